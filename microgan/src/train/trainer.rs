//! Alternating discriminator/generator optimization.

use tracing::{debug, info};

use super::LossTrace;
use crate::autograd::{MatrixValue, ScalarNode};
use crate::config::Config;
use crate::error::{ensure_extent, Result};
use crate::eval;
use crate::matrix::Matrix;
use crate::model::{binary_cross_entropy, stacked_labels, Discriminator, Generator, Module};
use crate::optim::{Adam, Optimizer, Sgd};
use crate::sampling::{SampleSource, SeededSampler};

/// Owns everything a training run mutates: both networks, their optimizers, and the
/// sample source.
///
/// The generator is stepped with [`Sgd`] and the discriminator with [`Adam`]; each
/// optimizer holds only its own network's parameters.
pub struct Trainer<S = SeededSampler> {
    config: Config,
    generator: Generator,
    discriminator: Discriminator,
    generator_opt: Sgd,
    discriminator_opt: Adam,
    source: S,
}

impl Trainer<SeededSampler> {
    /// Validates `config`, seeds a [`SeededSampler`] from it, and initializes both
    /// networks from that sampler's RNG (generator first).
    ///
    /// # Errors
    ///
    /// [`GanError::Config`](crate::GanError::Config) when validation fails.
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let mut source = SeededSampler::new(config.seed);
        let generator = Generator::new(config.noise_dim, config.leaky_slope, source.rng())?;
        let discriminator = Discriminator::new(source.rng())?;
        Self::new(config, generator, discriminator, source)
    }
}

impl<S> Trainer<S>
where
    S: SampleSource,
{
    /// Assembles a trainer from explicit parts.
    ///
    /// # Errors
    ///
    /// - [`GanError::Config`](crate::GanError::Config) when validation fails.
    /// - [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when the generator's
    ///   noise width differs from `config.noise_dim`.
    pub fn new(
        config: Config,
        generator: Generator,
        discriminator: Discriminator,
        source: S,
    ) -> Result<Self> {
        config.validate()?;
        ensure_extent("Trainer::new noise_dim", config.noise_dim, generator.noise_dim())?;
        let generator_opt = Sgd::new(generator.parameters(), config.generator_lr);
        let discriminator_opt = Adam::new(discriminator.parameters(), config.discriminator_adam());
        Ok(Trainer {
            config,
            generator,
            discriminator,
            generator_opt,
            discriminator_opt,
            source,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The generator (updated in place by training).
    #[must_use]
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// The discriminator (updated in place by training).
    #[must_use]
    pub fn discriminator(&self) -> &Discriminator {
        &self.discriminator
    }

    /// Total number of scalar parameters across both networks.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.generator.parameter_count() + self.discriminator.parameter_count()
    }

    /// The sample source, e.g. to draw batches for a manual step.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// One discriminator update on `[real; fake]`.
    ///
    /// `fake` is detached first, so the loss reaches only the discriminator's parameters.
    /// Returns the loss before the update.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when the two batches differ in
    /// row count or are not single-column.
    pub fn discriminator_step(&mut self, real: &Matrix, fake: &MatrixValue) -> Result<f64> {
        ensure_extent("discriminator_step rows", real.rows(), fake.rows())?;
        let batch = MatrixValue::constant(real).vstack(&fake.detach())?;
        let labels = stacked_labels(real.rows(), fake.rows());

        self.discriminator_opt.zero_grad();
        let probs = self.discriminator.discriminate(&batch)?;
        let loss = binary_cross_entropy(&probs, &labels)?;
        loss.backward();
        self.discriminator_opt.step();
        Ok(loss.data())
    }

    /// One generator update on the attached `fake` batch.
    ///
    /// The loss is BCE between the discriminator's output and
    /// [`GeneratorTarget::label`](super::GeneratorTarget::label). Gradients also land on the
    /// discriminator's parameters but only the generator's optimizer steps.
    pub fn generator_step(&mut self, fake: &MatrixValue) -> Result<f64> {
        let labels = vec![self.config.generator_target.label(); fake.rows()];

        self.generator_opt.zero_grad();
        let probs = self.discriminator.discriminate(fake)?;
        let loss = binary_cross_entropy(&probs, &labels)?;
        loss.backward();
        self.generator_opt.step();
        Ok(loss.data())
    }

    /// One full iteration: draw noise and real batches, generate, update the
    /// discriminator, then the generator. Returns `(discriminator_loss, generator_loss)`.
    pub fn train_step(&mut self) -> Result<(f64, f64)> {
        let noise = self
            .source
            .uniform_batch(self.config.batch_size, self.config.noise_dim)?;
        let real = self
            .source
            .gaussian_batch(self.config.batch_size, Discriminator::INPUT_DIM)?;
        let fake = self.generator.generate(&noise)?;
        let d_loss = self.discriminator_step(&real, &fake)?;
        let g_loss = self.generator_step(&fake)?;
        Ok((d_loss, g_loss))
    }

    /// Runs exactly `epochs` iterations and returns both loss sequences.
    ///
    /// There is no early stopping and no NaN detection: non-finite losses are recorded as-is.
    pub fn train(&mut self, epochs: usize) -> Result<LossTrace> {
        info!(
            epochs,
            batch_size = self.config.batch_size,
            noise_dim = self.config.noise_dim,
            generator_lr = self.generator_opt.lr(),
            discriminator_lr = self.discriminator_opt.lr(),
            generator_target = %self.config.generator_target,
            "starting training"
        );
        let mut trace = LossTrace::with_capacity(epochs);
        for epoch in 0..epochs {
            let (d_loss, g_loss) = self.train_step()?;
            trace.push(d_loss, g_loss);
            if epoch == 0 || (epoch + 1) % self.config.loss_log_every == 0 {
                info!(
                    epoch = epoch + 1,
                    d_loss = format_args!("{d_loss:.4}"),
                    g_loss = format_args!("{g_loss:.4}"),
                    "losses"
                );
            } else {
                debug!(epoch = epoch + 1, d_loss, g_loss, "losses");
            }
        }
        if let Some((d_loss, g_loss)) = trace.last() {
            info!(
                d_loss,
                g_loss,
                discriminator_steps = self.discriminator_opt.step_count(),
                "training finished"
            );
        }
        Ok(trace)
    }

    /// Draws `sample_count` noise vectors from the trainer's source and returns the
    /// generator's outputs, computed without recording a graph.
    pub fn evaluate(&mut self, sample_count: usize) -> Result<Vec<f64>> {
        eval::evaluate(
            &self.generator,
            &mut self.source,
            sample_count,
            self.config.noise_dim,
        )
    }

    /// Consumes the trainer and hands back the trained networks and the source.
    #[must_use]
    pub fn into_parts(self) -> (Generator, Discriminator, S) {
        (self.generator, self.discriminator, self.source)
    }
}
