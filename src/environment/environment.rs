use super::arm::Arm;
use super::errors::EnvironmentError;

use crate::rng::MaybeSeededRng;

use std::collections::HashSet;

/// Non-stationary multi-armed bandit environment. Owns one [`Arm`] per
/// action plus the random source used for reward sampling and drift.
#[derive(Debug)]
pub struct Environment {
    arms: Vec<Arm>,
    rng: MaybeSeededRng,
}

impl Environment {
    /// Builds an environment with `arms` actions, all starting at
    /// `{mean: 0, variance: 1}`. The stationary variant is a declared
    /// capability gap and is rejected outright.
    pub fn new(arms: usize, stationary: bool, seed: Option<u64>) -> Result<Self, EnvironmentError> {
        if stationary {
            return Err(EnvironmentError::StationaryNotSupported);
        }

        Ok(Self {
            arms: vec![Arm::default(); arms],
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn arms(&self) -> usize {
        self.arms.len()
    }

    /// Reinitializes every arm. Must run before each run of the testbed;
    /// otherwise drifted means leak across the run boundary.
    pub fn reset(&mut self) {
        self.arms.iter_mut().for_each(Arm::reset);
    }

    /// Samples a reward from the arm's current distribution, then advances
    /// that arm's random walk. Drift happens only here, so callers that need
    /// the pre-pull optimal set must read it before pulling.
    pub fn pull(&mut self, action: usize) -> Result<f64, EnvironmentError> {
        let rng = self.rng.get_rng();
        let arm = self
            .arms
            .get_mut(action)
            .ok_or(EnvironmentError::ArmNotFound(action))?;

        let reward = arm.sample(rng)?;
        arm.drift(rng);

        Ok(reward)
    }

    /// Indices of all arms whose true mean is tied for the maximum.
    /// Non-empty whenever the environment has at least one arm.
    pub fn optimal_actions(&self) -> HashSet<usize> {
        let best = self
            .arms
            .iter()
            .map(|arm| arm.mean)
            .fold(f64::NEG_INFINITY, f64::max);

        self.arms
            .iter()
            .enumerate()
            .filter(|(_, arm)| arm.mean == best)
            .map(|(action, _)| action)
            .collect()
    }
}
