use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::advice::advisor::mock_advice;
use crate::errors::AppError;
use crate::models::Profile;
use crate::report::render::REPORT_FILENAME;
use crate::report::render_report;
use crate::skills::clean_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub profile: Profile,
    /// Advice text to include; the templated advice is used when absent.
    pub advice: Option<String>,
}

/// POST /api/v1/report
pub async fn handle_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Response, AppError> {
    let mut profile = req.profile;
    profile.validate()?;
    profile.skills = clean_skills(&profile.skills);

    let top = state.top_matches(&profile.skills);
    let advice = match req.advice {
        Some(text) if !text.trim().is_empty() => text,
        _ => mock_advice(&profile, &top),
    };

    let pdf = render_report(&profile, &top, &advice)
        .map_err(|e| AppError::Report(e.to_string()))?;
    info!(bytes = pdf.len(), "Rendered career report");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}
