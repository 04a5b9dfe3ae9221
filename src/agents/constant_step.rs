use super::agent::Agent;
use super::select;

use crate::rng::MaybeSeededRng;

/// Epsilon-greedy agent with a fixed learning rate. Each update moves the
/// estimate a constant fraction toward the latest reward, so older rewards
/// decay exponentially and the agent keeps tracking a drifting mean. Carries
/// no pull counts; the update weight never depends on history length.
#[derive(Debug)]
pub struct ConstantStepSize {
    estimates: Vec<f64>,
    starting_value: f64,
    epsilon: f64,
    step_size: f64,
    rng: MaybeSeededRng,
}

impl ConstantStepSize {
    pub fn new(
        arms: usize,
        starting_value: f64,
        epsilon: f64,
        step_size: f64,
        seed: Option<u64>,
    ) -> Self {
        debug_assert!((0.0..=1.0).contains(&epsilon));
        debug_assert!(step_size > 0.0 && step_size <= 1.0);

        Self {
            estimates: vec![starting_value; arms],
            starting_value,
            epsilon,
            step_size,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Agent for ConstantStepSize {
    fn reset_agent(&mut self) {
        self.estimates.fill(self.starting_value);
    }

    fn pick_action(&mut self) -> usize {
        select::epsilon_greedy(&self.estimates, self.epsilon, self.rng.get_rng())
    }

    fn process_reward(&mut self, action: usize, reward: f64) {
        self.estimates[action] += self.step_size * (reward - self.estimates[action]);
    }
}
