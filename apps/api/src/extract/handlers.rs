use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::extract::GithubError;
use crate::extract::merge::merge_profiles;
use crate::extract::resume::{extract_pdf_text, is_pdf, parse_resume_profile};
use crate::models::{sample_profiles, Profile, SampleProfile};
use crate::state::AppState;

pub const NO_GITHUB_SKILLS_WARNING: &str = "No matching skills found in GitHub profile.";

/// The parts of a multipart upload the extractors care about.
#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    github_username: Option<String>,
    name: Option<String>,
}

struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read file: {e}")))?;
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "github_username" | "name" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read field: {e}")))?;
                let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
                if field_name == "name" {
                    form.name = value;
                } else {
                    form.github_username = value;
                }
            }
            _ => {}
        }
    }
    Ok(form)
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub profile: Profile,
    pub warnings: Vec<String>,
}

async fn resume_profile(
    state: &AppState,
    file: UploadedFile,
) -> Result<(Profile, Vec<String>), AppError> {
    if !is_pdf(
        file.file_name.as_deref(),
        file.content_type.as_deref(),
        &file.bytes,
    ) {
        return Err(AppError::Validation(
            "Please upload your résumé as a PDF file.".to_string(),
        ));
    }
    let extraction = extract_pdf_text(file.bytes).await;
    let profile = parse_resume_profile(&extraction.text, &state.skills);
    Ok((profile, extraction.warnings))
}

/// POST /api/v1/extract/resume
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeResponse>, AppError> {
    let form = read_form(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    let (profile, warnings) = resume_profile(&state, file).await?;
    Ok(Json(ResumeResponse { profile, warnings }))
}

#[derive(Debug, Deserialize)]
pub struct GithubRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct GithubResponse {
    pub skills: Vec<String>,
    pub warnings: Vec<String>,
}

/// Runs the GitHub extractor, turning transport failures into warnings.
async fn github_skills(
    state: &AppState,
    username: &str,
) -> Result<(Vec<String>, Vec<String>), AppError> {
    match state.github.extract_skills(username, &state.skills).await {
        Ok(skills) if skills.is_empty() => Ok((skills, vec![NO_GITHUB_SKILLS_WARNING.to_string()])),
        Ok(skills) => Ok((skills, Vec::new())),
        Err(e @ GithubError::InvalidUsername(_)) => Err(AppError::Validation(e.to_string())),
        Err(e) => {
            warn!("GitHub extraction for {username} failed: {e}");
            Ok((Vec::new(), vec![format!("Error fetching GitHub data: {e}")]))
        }
    }
}

/// POST /api/v1/extract/github
pub async fn handle_extract_github(
    State(state): State<AppState>,
    Json(req): Json<GithubRequest>,
) -> Result<Json<GithubResponse>, AppError> {
    let (skills, warnings) = github_skills(&state, &req.username).await?;
    Ok(Json(GithubResponse { skills, warnings }))
}

#[derive(Debug, Serialize)]
pub struct MergedProfileResponse {
    pub profile: Option<Profile>,
    pub warnings: Vec<String>,
}

/// POST /api/v1/extract/profile
///
/// Accepts a résumé, a GitHub username, or both, and returns one merged profile.
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MergedProfileResponse>, AppError> {
    let form = read_form(multipart).await?;
    if form.file.is_none() && form.github_username.is_none() {
        return Err(AppError::Validation(
            "Provide a résumé PDF, a GitHub username, or both.".to_string(),
        ));
    }

    let mut warnings = Vec::new();

    let resume = match form.file {
        Some(file) => {
            let (profile, resume_warnings) = resume_profile(&state, file).await?;
            warnings.extend(resume_warnings);
            Some(profile)
        }
        None => None,
    };

    let github = match form.github_username.as_deref() {
        Some(username) => {
            let (skills, github_warnings) = github_skills(&state, username).await?;
            warnings.extend(github_warnings);
            skills
        }
        None => Vec::new(),
    };

    let profile = merge_profiles(resume, github, form.name.as_deref());
    Ok(Json(MergedProfileResponse { profile, warnings }))
}

/// GET /api/v1/profiles/samples
pub async fn handle_sample_profiles() -> Json<Vec<SampleProfile>> {
    Json(sample_profiles())
}
