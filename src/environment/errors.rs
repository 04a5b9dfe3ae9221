use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Stationary environments are not supported")]
    StationaryNotSupported,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Failed to sample reward: {0}")]
    Sampling(String),
}
