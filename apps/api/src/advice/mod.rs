// Career guidance: templated or live advice, learning plans, and the resource catalog.

pub mod advisor;
pub mod handlers;
pub mod plan;
pub mod prompts;
pub mod resources;

pub use advisor::{Advice, Advisor, ContentSource, LlmAdvisor, MockAdvisor};
pub use plan::LearningPlan;
