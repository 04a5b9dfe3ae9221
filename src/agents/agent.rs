use super::constant_step::ConstantStepSize;
use super::sample_average::SampleAverage;

use serde::Deserialize;

/// Action-selection strategy run against the environment. All three
/// operations are required, so an incomplete strategy fails to compile
/// instead of failing at call time.
pub trait Agent: Send {
    /// Reinitializes every action-value estimate. Must run once per run,
    /// before the first step.
    fn reset_agent(&mut self);

    /// Returns the index of the arm to pull next.
    fn pick_action(&mut self) -> usize;

    /// Feeds the reward for `action` back into its estimate. Touches no
    /// other arm's state.
    fn process_reward(&mut self, action: usize, reward: f64);
}

#[derive(Debug, Deserialize)]
pub enum AgentType {
    SampleAverage {
        starting_value: f64,
        epsilon: f64,
        seed: Option<u64>,
    },
    ConstantStepSize {
        starting_value: f64,
        epsilon: f64,
        step_size: f64,
        seed: Option<u64>,
    },
}

impl AgentType {
    pub fn into_agent(self, arms: usize) -> Box<dyn Agent + Send> {
        match self {
            AgentType::SampleAverage {
                starting_value,
                epsilon,
                seed,
            } => Box::new(SampleAverage::new(arms, starting_value, epsilon, seed)),
            AgentType::ConstantStepSize {
                starting_value,
                epsilon,
                step_size,
                seed,
            } => Box::new(ConstantStepSize::new(
                arms,
                starting_value,
                epsilon,
                step_size,
                seed,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_sample_average() {
        let agent_type: AgentType = serde_json::from_str(
            r#"{"SampleAverage": {"starting_value": 0.0, "epsilon": 0.1, "seed": 1234}}"#,
        )
        .unwrap();

        assert!(matches!(agent_type, AgentType::SampleAverage { .. }));
        let _ = agent_type.into_agent(10);
    }

    #[test]
    fn deserialize_constant_step_size() {
        let agent_type: AgentType = serde_json::from_str(
            r#"{"ConstantStepSize": {"starting_value": 5.0, "epsilon": 0.0, "step_size": 0.1, "seed": null}}"#,
        )
        .unwrap();

        assert!(matches!(agent_type, AgentType::ConstantStepSize { .. }));
        let _ = agent_type.into_agent(10);
    }
}
