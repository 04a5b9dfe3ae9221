use super::errors::EnvironmentError;

use rand::rngs::SmallRng;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

/// Standard deviation of the random walk applied to an arm's mean after
/// every pull. A fixed constant, not derived from the arm's own variance.
const DRIFT_STD: f64 = 0.01;

/// Ground-truth reward distribution of a single action. Only `mean` drifts;
/// `variance` stays at its reset value for the arm's whole lifetime.
#[derive(Clone, Debug)]
pub(super) struct Arm {
    pub(super) mean: f64,
    pub(super) variance: f64,
}

impl Default for Arm {
    fn default() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
        }
    }
}

impl Arm {
    pub(super) fn reset(&mut self) {
        self.mean = 0.0;
        self.variance = 1.0;
    }

    /// Draws a reward from this arm's current distribution.
    ///
    /// The sampling width is `variance^2`, not `sqrt(variance)`. Every
    /// published number from this testbed depends on that width, so it is
    /// part of the environment's contract.
    pub(super) fn sample(&self, rng: &mut SmallRng) -> Result<f64, EnvironmentError> {
        let reward = Normal::new(self.mean, self.variance.powi(2))
            .map_err(|e| EnvironmentError::Sampling(e.to_string()))?
            .sample(rng);

        Ok(reward)
    }

    /// Advances the random walk on `mean` by one zero-mean Gaussian step.
    pub(super) fn drift(&mut self, rng: &mut SmallRng) {
        let step: f64 = rng.sample(StandardNormal);
        self.mean += DRIFT_STD * step;
    }
}
