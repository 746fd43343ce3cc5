use crate::error::SgradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Strategy for drawing initial parameter values.
///
/// Sampling always goes through a caller-supplied random generator, so a
/// seeded generator gives reproducible models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` values.
    ///
    /// # Errors
    ///
    /// `InvalidInitialization` when the strategy's parameters are not
    /// usable: non-finite bounds, `low >= high`, or a negative or non-finite
    /// standard deviation.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, SgradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(SgradError::InvalidInitialization(format!(
                        "uniform bounds must be finite with low < high, got [{}, {})",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(SgradError::InvalidInitialization(format!(
                        "normal mean must be finite, got {}",
                        mean
                    )));
                }
                // rand_distr accepts a negative std_dev and mirrors the samples.
                if !(std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(SgradError::InvalidInitialization(format!(
                        "normal std_dev must be finite and non-negative, got {}",
                        std_dev
                    )));
                }
                let dist = Normal::new(mean, std_dev).map_err(|e| {
                    SgradError::InvalidInitialization(format!(
                        "normal std_dev {}: {}",
                        std_dev, e
                    ))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Constant(value) => Ok(vec![value; n]),
        }
    }
}
