mod arm;
mod environment;
mod errors;

pub use environment::Environment;
pub use errors::EnvironmentError;
