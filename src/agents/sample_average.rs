use super::agent::Agent;
use super::select;

use crate::rng::MaybeSeededRng;

/// Per-arm estimate for the sample-average rule. The pull count drives the
/// shrinking update weight `1 / pulls`.
#[derive(Clone, Debug)]
struct ActionValue {
    estimate: f64,
    pulls: u64,
}

/// Epsilon-greedy agent whose estimates converge to the running mean of
/// observed rewards. Weights all history equally, so it is slow to track a
/// drifting environment once pull counts grow large.
#[derive(Debug)]
pub struct SampleAverage {
    values: Vec<ActionValue>,
    starting_value: f64,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl SampleAverage {
    pub fn new(arms: usize, starting_value: f64, epsilon: f64, seed: Option<u64>) -> Self {
        debug_assert!((0.0..=1.0).contains(&epsilon));

        Self {
            values: vec![
                ActionValue {
                    estimate: starting_value,
                    pulls: 0,
                };
                arms
            ],
            starting_value,
            epsilon,
            rng: MaybeSeededRng::new(seed),
        }
    }

    #[cfg(test)]
    fn estimates(&self) -> Vec<f64> {
        self.values.iter().map(|value| value.estimate).collect()
    }
}

impl Agent for SampleAverage {
    fn reset_agent(&mut self) {
        for value in &mut self.values {
            value.estimate = self.starting_value;
            value.pulls = 0;
        }
    }

    fn pick_action(&mut self) -> usize {
        let estimates: Vec<f64> = self.values.iter().map(|value| value.estimate).collect();
        select::epsilon_greedy(&estimates, self.epsilon, self.rng.get_rng())
    }

    fn process_reward(&mut self, action: usize, reward: f64) {
        let value = &mut self.values[action];
        value.pulls += 1;
        value.estimate += (reward - value.estimate) / value.pulls as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    fn make_agent(arms: usize, starting_value: f64, epsilon: f64) -> SampleAverage {
        SampleAverage::new(arms, starting_value, epsilon, Some(SEED))
    }

    #[test]
    fn reset_restores_starting_values() {
        let mut agent = make_agent(4, 2.5, 0.1);
        agent.process_reward(1, 10.0);
        agent.process_reward(1, -3.0);

        agent.reset_agent();
        assert_eq!(agent.estimates(), vec![2.5; 4]);
        assert!(agent.values.iter().all(|value| value.pulls == 0));
    }

    #[test]
    fn estimate_is_the_mean_of_observed_rewards() {
        let mut agent = make_agent(1, 0.0, 0.0);
        for reward in [1.0, 2.0, 3.0, 4.0] {
            agent.process_reward(0, reward);
        }
        assert!((agent.values[0].estimate - 2.5).abs() < 1e-12);
    }

    #[test]
    fn estimate_is_order_independent() {
        let mut forward = make_agent(1, 0.0, 0.0);
        let mut backward = make_agent(1, 0.0, 0.0);
        let rewards = [5.0, -1.0, 2.0, 0.5, 8.0];

        for &reward in &rewards {
            forward.process_reward(0, reward);
        }
        for &reward in rewards.iter().rev() {
            backward.process_reward(0, reward);
        }

        assert!((forward.values[0].estimate - backward.values[0].estimate).abs() < 1e-12);
    }

    #[test]
    fn reward_updates_only_the_acted_arm() {
        let mut agent = make_agent(2, 0.0, 0.0);
        agent.process_reward(0, 5.0);

        assert_eq!(agent.estimates(), vec![5.0, 0.0]);
        assert_eq!(agent.values[0].pulls, 1);
        assert_eq!(agent.values[1].pulls, 0);
    }

    #[test]
    fn greedy_pick_follows_the_best_estimate() {
        let mut agent = make_agent(3, 0.0, 0.0);
        agent.process_reward(2, 1.0);

        for _ in 0..50 {
            assert_eq!(agent.pick_action(), 2);
        }
    }
}
