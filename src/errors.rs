use crate::environment::EnvironmentError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestbedError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error(transparent)]
    Testbed(#[from] TestbedError),
    #[error("Failed to write step summaries: {0}")]
    Output(#[from] crate::output::OutputError),
}
