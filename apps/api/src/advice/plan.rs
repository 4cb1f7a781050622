//! Learning plans: the templated step list shown under each match.

use serde::Serialize;

use crate::advice::advisor::ContentSource;

const DEFAULT_FOCUS: &[&str] = &["Python", "SQL"];

/// Steps toward a role, optionally with a free-form roadmap from live mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPlan {
    pub role: String,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<String>,
    pub source: ContentSource,
}

impl LearningPlan {
    pub fn mock(role: &str, missing: &[String]) -> Self {
        Self {
            role: role.to_string(),
            steps: mock_learning_steps(role, missing),
            roadmap: None,
            source: ContentSource::Mock,
        }
    }
}

/// One "Learn X fundamentals" step per missing skill (Python and SQL when nothing is
/// missing), then a project and a portfolio step.
pub fn mock_learning_steps(role: &str, missing: &[String]) -> Vec<String> {
    let mut steps: Vec<String> = if missing.is_empty() {
        DEFAULT_FOCUS
            .iter()
            .map(|s| format!("Learn {s} fundamentals"))
            .collect()
    } else {
        missing
            .iter()
            .map(|s| format!("Learn {} fundamentals", capitalize(s)))
            .collect()
    };
    steps.push(format!("Work on a project relevant to {role}"));
    steps.push("Build portfolio and practice interview questions".to_string());
    steps
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
