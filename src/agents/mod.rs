mod agent;
mod constant_step;
mod sample_average;
mod select;

pub use agent::{Agent, AgentType};
pub use constant_step::ConstantStepSize;
pub use sample_average::SampleAverage;
