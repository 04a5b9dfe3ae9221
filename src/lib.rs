pub mod agents;
pub mod config;
pub mod environment;
pub mod errors;
pub mod output;
pub mod rng;
pub mod testbed;
