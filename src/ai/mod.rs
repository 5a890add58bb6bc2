mod agent;
mod human;
mod random;
mod value_agent;

pub use agent::Agent;
pub use human::HumanSide;
pub use random::RandomAgent;
pub use value_agent::{ValueAgent, ValueAgentConfig};
