//! # micro-gan
//!
//! Trains the 1-D GAN end to end and reports how close the generator's output is to
//! N(0, 1) before and after training.
//!
//! Every knob is read from `MICROGAN_*` environment variables (see
//! [`microgan::config::from_env`]); log verbosity follows `RUST_LOG` (default `info`).

use microgan::{Histogram, Summary, Trainer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn report(stage: &str, samples: &[f64], bins: usize) -> Result<(), Box<dyn std::error::Error>> {
    let Some(summary) = Summary::of(samples) else {
        warn!(stage, "no samples to summarize");
        return Ok(());
    };
    info!(
        stage,
        mean = format_args!("{:.4}", summary.mean),
        std = format_args!("{:.4}", summary.std),
        min = format_args!("{:.4}", summary.min),
        max = format_args!("{:.4}", summary.max),
        normal_gap = format_args!("{:.4}", summary.normal_gap()),
        "generator output"
    );
    let histogram = Histogram::from_values(samples, bins)?;
    println!("{stage} ({summary}):\n{histogram}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = microgan::config::from_env()?;
    config.validate()?;
    info!(?config, "loaded configuration");

    let eval_samples = config.eval_samples;
    let bins = config.histogram_bins;
    let epochs = config.num_epochs;

    let mut trainer = Trainer::from_config(config)?;
    info!(parameters = trainer.parameter_count(), "initialized networks");

    let before = trainer.evaluate(eval_samples)?;
    report("before training", &before, bins)?;

    let trace = trainer.train(epochs)?;
    if let Some((d_loss, g_loss)) = trace.moving_average(10) {
        info!(d_loss, g_loss, "mean loss over the last 10 iterations");
    }

    let after = trainer.evaluate(eval_samples)?;
    report("after training", &after, bins)?;

    Ok(())
}
