use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::advice::{Advice, LearningPlan};
use crate::advice::resources::{find_resources, ResourcePlan, Tier};
use crate::errors::AppError;
use crate::matching::find_role;
use crate::models::Profile;
use crate::skills::clean_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub profile: Profile,
    #[serde(default)]
    pub use_llm: bool,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: Advice,
}

/// POST /api/v1/advice
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let mut profile = req.profile;
    profile.validate()?;
    profile.skills = clean_skills(&profile.skills);

    let top = state.top_matches(&profile.skills);
    let advice = state.advisor(req.use_llm).advise(&profile, &top).await;
    Ok(Json(AdviceResponse { advice }))
}

#[derive(Debug, Deserialize)]
pub struct LearningPlanRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub target_role: String,
    #[serde(default)]
    pub use_llm: bool,
}

/// POST /api/v1/learning/plan
///
/// Missing skills come from the catalog entry for `target_role`; a role outside the
/// catalog gets the generic plan.
pub async fn handle_learning_plan(
    State(state): State<AppState>,
    Json(req): Json<LearningPlanRequest>,
) -> Result<Json<LearningPlan>, AppError> {
    let target_role = req.target_role.trim();
    if target_role.is_empty() {
        return Err(AppError::Validation("target_role is required".to_string()));
    }

    let skills = clean_skills(&req.skills);
    let missing: Vec<String> = find_role(target_role)
        .map(|role| {
            role.skills
                .iter()
                .filter(|required| !skills.iter().any(|s| s.as_str() == **required))
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default();

    let plan = state
        .advisor(req.use_llm)
        .learning_plan(&skills, target_role, &missing)
        .await;
    Ok(Json(plan))
}

#[derive(Debug, Deserialize)]
pub struct ResourcesQuery {
    pub role: String,
    /// Interview score in percent, when one is available.
    pub score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub role: &'static str,
    pub tier: Tier,
    pub resources: &'static ResourcePlan,
}

/// GET /api/v1/learning/resources
pub async fn handle_learning_resources(
    Query(params): Query<ResourcesQuery>,
) -> Result<Json<ResourcesResponse>, AppError> {
    let role = params.role.trim();
    let entry = find_resources(role).ok_or_else(|| {
        AppError::NotFound(format!("we don't have a learning plan for '{role}' yet"))
    })?;
    let tier = Tier::for_score(params.score);
    Ok(Json(ResourcesResponse {
        role: entry.role,
        tier,
        resources: entry.tier(tier),
    }))
}
