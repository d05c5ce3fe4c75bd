//! End-to-end training runs through the public API.

use microgan::model::Module;
use microgan::{
    Config, Discriminator, Generator, GeneratorTarget, Histogram, SampleSource, SeededSampler,
    Summary, Trainer,
};

#[test]
fn default_run_produces_full_traces() {
    let config = Config::default();
    assert_eq!(
        (config.noise_dim, config.batch_size, config.num_epochs),
        (10, 128, 100)
    );
    let epochs = config.num_epochs;
    let mut trainer = Trainer::from_config(config).unwrap();
    let trace = trainer.train(epochs).unwrap();

    assert_eq!(trace.len(), 100);
    assert_eq!(trace.discriminator().len(), 100);
    assert_eq!(trace.generator().len(), 100);
    assert!(trace.discriminator().iter().all(|&l| l >= 0.0));
    assert!(trace.generator().iter().all(|&l| l >= 0.0));
}

#[test]
fn same_seed_gives_identical_traces() {
    let config = Config {
        batch_size: 32,
        ..Config::default()
    };
    let mut a = Trainer::from_config(config.clone()).unwrap();
    let mut b = Trainer::from_config(config).unwrap();
    assert_eq!(a.train(20).unwrap(), b.train(20).unwrap());
    assert_eq!(
        a.generator().parameter_values(),
        b.generator().parameter_values()
    );
}

#[test]
fn different_seeds_diverge() {
    let mut a = Trainer::from_config(Config {
        seed: 1,
        batch_size: 16,
        ..Config::default()
    })
    .unwrap();
    let mut b = Trainer::from_config(Config {
        seed: 2,
        batch_size: 16,
        ..Config::default()
    })
    .unwrap();
    assert_ne!(a.train(3).unwrap(), b.train(3).unwrap());
}

#[test]
fn train_step_moves_both_networks() {
    let mut trainer = Trainer::from_config(Config {
        batch_size: 16,
        ..Config::default()
    })
    .unwrap();
    let g_before = trainer.generator().parameter_values();
    let d_before = trainer.discriminator().parameter_values();
    trainer.train_step().unwrap();
    assert_ne!(trainer.generator().parameter_values(), g_before);
    assert_ne!(trainer.discriminator().parameter_values(), d_before);
}

/// With the conventional objective and a discriminator that starts out favouring
/// small values, a generator that begins far to the right of N(0, 1) is pulled
/// toward it.
#[test]
fn conventional_objective_moves_output_toward_standard_normal() {
    let config = Config {
        seed: 7,
        batch_size: 64,
        generator_target: GeneratorTarget::Real,
        ..Config::default()
    };
    // Noise is U[0, 1)^10, so the initial output is about 1.0 + 0.3 * 5 = 2.5.
    let generator = Generator::from_parameters(&[0.3; 10], 1.0, config.leaky_slope).unwrap();
    let discriminator = Discriminator::from_parameters(-0.5, 1.0).unwrap();
    let mut trainer =
        Trainer::new(config, generator, discriminator, SeededSampler::new(7)).unwrap();

    let before = Summary::of(&trainer.evaluate(5_000).unwrap()).unwrap();
    assert!(before.mean > 2.0, "initial mean {}", before.mean);

    trainer.train(400).unwrap();

    let after = Summary::of(&trainer.evaluate(5_000).unwrap()).unwrap();
    assert!(
        after.mean.abs() < before.mean.abs(),
        "mean {} -> {}",
        before.mean,
        after.mean
    );
    assert!(
        after.normal_gap() < before.normal_gap(),
        "gap {} -> {}",
        before.normal_gap(),
        after.normal_gap()
    );
}

#[test]
fn non_finite_losses_flow_into_the_trace() {
    let config = Config {
        noise_dim: 3,
        batch_size: 8,
        ..Config::default()
    };
    let generator = Generator::from_parameters(&[f64::NAN, 0.5, 0.5], 0.0, 0.01).unwrap();
    let discriminator = Discriminator::from_parameters(1.0, 0.0).unwrap();
    let mut trainer =
        Trainer::new(config, generator, discriminator, SeededSampler::new(5)).unwrap();

    let trace = trainer.train(3).unwrap();
    assert_eq!(trace.len(), 3);
    assert!(trace.generator().iter().all(|l| !l.is_finite()));
    assert!(trace.discriminator().iter().any(|l| !l.is_finite()));

    let samples = trainer.evaluate(100).unwrap();
    assert_eq!(samples.len(), 100);
    assert!(samples.iter().all(|x| x.is_nan()));

    let summary = Summary::of(&samples).unwrap();
    assert_eq!(summary.count, 100);
    assert!(summary.mean.is_nan());

    let histogram = Histogram::from_values(&samples, 10).unwrap();
    assert_eq!(histogram.total(), 0);
    assert_eq!(histogram.to_string().lines().count(), 10);
}

#[test]
fn custom_source_drives_training() {
    // Every batch is constant: real = 0, noise = 1.
    struct Constant;
    impl SampleSource for Constant {
        fn gaussian_batch(
            &mut self,
            n_samples: usize,
            n_dim: usize,
        ) -> microgan::Result<microgan::matrix::Matrix> {
            microgan::matrix::Matrix::filled(n_samples, n_dim, 0.0)
        }
        fn uniform_batch(
            &mut self,
            n_samples: usize,
            n_dim: usize,
        ) -> microgan::Result<microgan::matrix::Matrix> {
            microgan::matrix::Matrix::filled(n_samples, n_dim, 1.0)
        }
    }

    let config = Config {
        noise_dim: 2,
        batch_size: 8,
        ..Config::default()
    };
    let generator = Generator::from_parameters(&[0.5, 0.5], 0.0, 0.01).unwrap();
    let discriminator = Discriminator::from_parameters(1.0, 0.0).unwrap();
    let mut trainer = Trainer::new(config, generator, discriminator, Constant).unwrap();
    let trace = trainer.train(5).unwrap();
    assert_eq!(trace.len(), 5);
    // All fakes equal 1.0 before the first update: BCE of sigmoid(1) against [1; 0].
    let p_real = 0.5_f64;
    let p_fake = 1.0 / (1.0 + (-1.0_f64).exp());
    let expected = -(p_real.ln() + (1.0 - p_fake).ln()) / 2.0;
    assert!((trace.discriminator()[0] - expected).abs() < 1e-12);
}
