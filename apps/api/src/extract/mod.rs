// Skill extraction from uploaded résumés and public GitHub activity.

pub mod github;
pub mod handlers;
pub mod merge;
pub mod resume;

pub use github::{GithubClient, GithubError};
