use crate::agents::Agent;
use crate::environment::Environment;
use crate::errors::TestbedError;

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Everything observed at one time step of one run. Consumed only by the
/// aggregation pass at the end of `run_test`.
struct StepRecord {
    reward: f64,
    chosen_action: usize,
    optimal_actions: HashSet<usize>,
}

impl StepRecord {
    fn was_optimal(&self) -> bool {
        self.optimal_actions.contains(&self.chosen_action)
    }
}

/// Cross-run aggregate for one time-step index.
#[derive(Clone, Debug, Serialize)]
pub struct StepSummary {
    pub average_reward: f64,
    pub percent_optimal: f64,
}

/// Drives an agent against the environment for many independent runs and
/// reduces the per-step records into one [`StepSummary`] per step index.
pub struct Testbed {
    environment: Environment,
    agent: Box<dyn Agent + Send>,
}

impl Testbed {
    pub fn new(environment: Environment, agent: Box<dyn Agent + Send>) -> Self {
        Self { environment, agent }
    }

    /// Executes `runs` independent runs of `steps` steps each and returns
    /// exactly `steps` summaries, one per step index. Both components are
    /// reset at every run boundary, so no state crosses between runs apart
    /// from their random sources.
    pub fn run_test(&mut self, steps: usize, runs: usize) -> Result<Vec<StepSummary>, TestbedError> {
        info!(steps, runs, arms = self.environment.arms(), "Running testbed");

        let mut all_runs = Vec::with_capacity(runs);
        for run in 0..runs {
            all_runs.push(self.single_run(steps)?);
            debug!(run, "Run finished");
        }

        Ok(summarize(&all_runs, steps))
    }

    fn single_run(&mut self, steps: usize) -> Result<Vec<StepRecord>, TestbedError> {
        self.environment.reset();
        self.agent.reset_agent();

        let mut records = Vec::with_capacity(steps);
        for _ in 0..steps {
            let chosen_action = self.agent.pick_action();
            // the optimal set must be read before the pull drifts it
            let optimal_actions = self.environment.optimal_actions();
            let reward = self.environment.pull(chosen_action)?;
            self.agent.process_reward(chosen_action, reward);

            records.push(StepRecord {
                reward,
                chosen_action,
                optimal_actions,
            });
        }

        Ok(records)
    }
}

fn summarize(all_runs: &[Vec<StepRecord>], steps: usize) -> Vec<StepSummary> {
    let runs = all_runs.len() as f64;

    (0..steps)
        .map(|step| {
            let total_reward: f64 = all_runs.iter().map(|run| run[step].reward).sum();
            let optimal = all_runs.iter().filter(|run| run[step].was_optimal()).count();

            StepSummary {
                average_reward: total_reward / runs,
                percent_optimal: optimal as f64 / runs,
            }
        })
        .collect()
}
