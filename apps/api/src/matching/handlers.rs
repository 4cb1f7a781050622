use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advice::{Advice, LearningPlan};
use crate::errors::AppError;
use crate::matching::{Match, Role, CATALOG, TOP_MATCHES};
use crate::models::Profile;
use crate::skills::{clean_skills, parse_skill_list};
use crate::state::AppState;

pub const EMPTY_SKILLS_MESSAGE: &str = "Please enter skills to analyze.";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub profile: Profile,
    /// Comma-separated skills; replaces `profile.skills` when present.
    pub skills_input: Option<String>,
    #[serde(default)]
    pub use_llm: bool,
}

#[derive(Debug, Serialize)]
pub struct MatchWithPlan {
    #[serde(flatten)]
    pub matched: Match,
    pub learning_plan: LearningPlan,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub profile: Profile,
    pub matches: Vec<MatchWithPlan>,
    pub advice: Advice,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut profile = req.profile;
    profile.validate()?;

    profile.skills = match req.skills_input.as_deref() {
        Some(input) => parse_skill_list(input),
        None => clean_skills(&profile.skills),
    };
    if profile.skills.is_empty() {
        return Err(AppError::Validation(EMPTY_SKILLS_MESSAGE.to_string()));
    }

    let top = state.top_matches(&profile.skills);
    info!(
        skills = profile.skills.len(),
        best = top.first().map(|m| m.percent).unwrap_or_default(),
        "Analyzed profile"
    );

    let advice = state.advisor(req.use_llm).advise(&profile, &top).await;
    let matches = top
        .into_iter()
        .map(|m| MatchWithPlan {
            learning_plan: LearningPlan::mock(&m.role, &m.missing),
            matched: m,
        })
        .collect();

    Ok(Json(AnalyzeResponse {
        profile,
        matches,
        advice,
    }))
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [Role]> {
    Json(CATALOG)
}

/// Leading `TOP_MATCHES` entries of an already-sorted list.
pub fn take_top(matches: &[Match]) -> Vec<Match> {
    matches.iter().take(TOP_MATCHES).cloned().collect()
}
