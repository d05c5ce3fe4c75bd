//! Which label the generator's loss aims the discriminator at.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{FAKE_LABEL, REAL_LABEL};

/// Label used for the fake batch in the generator's loss.
///
/// `Fake` (the default) trains the generator to make the discriminator output 0 on its
/// own samples, which pushes fakes *away* from the real distribution. This is an
/// inverted-label variant of standard GAN training. `Real` is the conventional
/// non-saturating objective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorTarget {
    /// Label 0 for fakes.
    #[default]
    Fake,
    /// Label 1 for fakes (conventional GAN objective).
    Real,
}

impl GeneratorTarget {
    /// The BCE target value for every fake row.
    #[must_use]
    pub fn label(self) -> f64 {
        match self {
            GeneratorTarget::Fake => FAKE_LABEL,
            GeneratorTarget::Real => REAL_LABEL,
        }
    }
}

impl fmt::Display for GeneratorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorTarget::Fake => f.write_str("fake"),
            GeneratorTarget::Real => f.write_str("real"),
        }
    }
}

/// Returned when a string names neither target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown generator target {0:?} (expected \"fake\" or \"real\")")]
pub struct ParseGeneratorTargetError(String);

impl FromStr for GeneratorTarget {
    type Err = ParseGeneratorTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fake" | "0" => Ok(GeneratorTarget::Fake),
            "real" | "1" => Ok(GeneratorTarget::Real),
            _ => Err(ParseGeneratorTargetError(s.to_string())),
        }
    }
}
