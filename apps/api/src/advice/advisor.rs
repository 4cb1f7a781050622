//! Advisors — pluggable, trait-based producers of career advice and learning roadmaps.
//!
//! Default: `MockAdvisor` (templated text, deterministic, no network).
//! Live:    `LlmAdvisor` (Claude), which degrades to the mock output on any failure.
//!
//! `AppState` carries both and picks one per request.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::advice::plan::LearningPlan;
use crate::advice::prompts::{ADVICE_PROMPT_TEMPLATE, ROADMAP_PROMPT_TEMPLATE};
use crate::llm_client::prompts::CAREER_COACH_SYSTEM;
use crate::llm_client::LlmClient;
use crate::matching::Match;
use crate::models::Profile;

const DEFAULT_INTERESTS: &str = "AI, Tech";
const DEFAULT_GOAL: &str = "AI Engineer";
const DEFAULT_SKILLS: &str = "Python, SQL";

/// Where a piece of generated content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Mock,
    Llm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub text: String,
    pub source: ContentSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap advice backends without touching handlers.
/// Neither method fails: backends fall back to templated output.
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, profile: &Profile, top_matches: &[Match]) -> Advice;

    async fn learning_plan(&self, skills: &[String], role: &str, missing: &[String])
        -> LearningPlan;
}

// ────────────────────────────────────────────────────────────────────────────
// MockAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct MockAdvisor;

#[async_trait]
impl Advisor for MockAdvisor {
    async fn advise(&self, profile: &Profile, top_matches: &[Match]) -> Advice {
        Advice {
            text: mock_advice(profile, top_matches),
            source: ContentSource::Mock,
        }
    }

    async fn learning_plan(
        &self,
        _skills: &[String],
        role: &str,
        missing: &[String],
    ) -> LearningPlan {
        LearningPlan::mock(role, missing)
    }
}

/// Templated guidance built from the profile and its best matches.
pub fn mock_advice(profile: &Profile, top_matches: &[Match]) -> String {
    let interests = or_default(profile.interests.join(", "), DEFAULT_INTERESTS);
    let skills = or_default(profile.skills.join(", "), DEFAULT_SKILLS);
    let career_goal = or_default(profile.career_goal.trim().to_string(), DEFAULT_GOAL);
    let first_interest = first_item(&interests);
    let first_skill = first_item(&skills);

    let mut text = String::from("Personalized AI Career Guidance (Mock)\n\n");
    text.push_str(&format!("Name: {}\n", profile.name));
    text.push_str(&format!("Age: {}\n", profile.age));
    text.push_str(&format!("Education: {}\n", profile.education));
    text.push_str(&format!("Interests: {interests}\n"));
    text.push_str(&format!("Career Goal: {career_goal}\n"));
    text.push_str(&format!("Current Skills: {skills}\n"));
    if !top_matches.is_empty() {
        text.push_str(&format!("Top Matches: {}\n", summarize_matches(top_matches)));
    }
    text.push_str("\nSuggested Path:\n");
    text.push_str(&format!(
        "1. Focus on {first_interest} fundamentals and core projects.\n"
    ));
    text.push_str(&format!(
        "2. Build 2-3 portfolio projects using {first_skill}.\n"
    ));
    text.push_str("3. Target internships / freelance projects to get hands-on experience.\n");
    text.push_str("4. Practice interviews and data-structure basics if applying to tech roles.\n");
    text.push_str("\n(Disclaimer: This is a mock response. Enable live mode for richer AI output.)\n");
    text
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn first_item(list: &str) -> &str {
    list.split(',').next().unwrap_or(list).trim()
}

fn summarize_matches(matches: &[Match]) -> String {
    matches
        .iter()
        .map(|m| format!("{} ({}%)", m.role, m.percent))
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAdvisor(pub LlmClient);

#[async_trait]
impl Advisor for LlmAdvisor {
    async fn advise(&self, profile: &Profile, top_matches: &[Match]) -> Advice {
        let prompt = ADVICE_PROMPT_TEMPLATE
            .replace("{profile}", &describe_profile(profile))
            .replace("{matches}", &describe_matches(top_matches));

        match self.0.call_text(&prompt, CAREER_COACH_SYSTEM).await {
            Ok(text) => Advice {
                text,
                source: ContentSource::Llm,
            },
            Err(e) => {
                warn!("Live advice failed, using mock: {e}");
                Advice {
                    text: format!(
                        "Error generating advice: {e}\n\nFalling back to mock advice.\n{}",
                        mock_advice(profile, top_matches)
                    ),
                    source: ContentSource::Mock,
                }
            }
        }
    }

    async fn learning_plan(
        &self,
        skills: &[String],
        role: &str,
        missing: &[String],
    ) -> LearningPlan {
        let prompt = ROADMAP_PROMPT_TEMPLATE
            .replace("{skills}", &skills.join(", "))
            .replace("{target_role}", role);

        let mut plan = LearningPlan::mock(role, missing);
        match self.0.call_text(&prompt, CAREER_COACH_SYSTEM).await {
            Ok(roadmap) => {
                plan.roadmap = Some(roadmap);
                plan.source = ContentSource::Llm;
            }
            Err(e) => warn!("Live roadmap for {role} failed, using mock plan: {e}"),
        }
        plan
    }
}

fn describe_profile(profile: &Profile) -> String {
    profile
        .display_fields()
        .into_iter()
        .map(|(label, value)| format!("- {label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_matches(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "- none".to_string();
    }
    matches
        .iter()
        .map(|m| {
            let missing = if m.missing.is_empty() {
                "none".to_string()
            } else {
                m.missing.join(", ")
            };
            format!("- {} ({}%), missing: {missing}", m.role, m.percent)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
