use crate::error::ScalarGradError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Strategy used to draw the initial value of each weight and bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
}

impl Default for Init {
    /// `Uniform { low: -1.0, high: 1.0 }`
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the distribution parameters without sampling.
    ///
    /// # Errors
    /// `InvalidArgument` for non-finite bounds, `low >= high`, or a negative or
    /// non-finite standard deviation.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(ScalarGradError::InvalidArgument(format!(
                        "Uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std_dev } => {
                if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(ScalarGradError::InvalidArgument(format!(
                        "Normal init requires a finite mean and std_dev >= 0, got mean={}, std_dev={}",
                        mean, std_dev
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` initial values from `rng`.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, ScalarGradError> {
        self.validate()?;
        let values: Vec<f64> = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Init::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev)
                    .map_err(|e| ScalarGradError::InvalidArgument(e.to_string()))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
        };
        Ok(values)
    }
}

/// Builds the random generator used for initialization: seeded when `seed`
/// is given, from OS entropy otherwise.
pub fn init_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
