use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::evaluator::Evaluation;
use crate::interview::questions::Difficulty;
use crate::interview::quiz::{QuizChoice, QuizSession, QuizView};
use crate::interview::session::{InterviewSession, InterviewView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub role: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Default, Deserialize)]
pub struct RetryRequest {
    pub difficulty: Option<Difficulty>,
}

// ────────────────────────────────────────────────────────────────────────────
// Interviews
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
    #[serde(default)]
    pub use_llm: bool,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub evaluation: Evaluation,
    pub interview: InterviewView,
}

/// POST /api/v1/interviews
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<(StatusCode, Json<InterviewView>), AppError> {
    let session = InterviewSession::new(&req.role, req.difficulty);
    let view = session.view();
    info!(
        id = %session.id,
        role = session.role,
        questions = session.questions.len(),
        "Interview started"
    );
    state.interviews.insert(session.id, session);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    Ok(Json(state.interviews.with(id, |s| s.view())?))
}

/// POST /api/v1/interviews/:id/answers
///
/// The session lock is released while the answer is evaluated; `record` rejects the
/// answer if another one landed on the same question in the meantime.
pub async fn handle_answer_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    let (index, question, role) = state
        .interviews
        .with(id, |s| s.pending_question(&req.answer).map(|(i, q)| (i, q, s.role)))??;

    let evaluation = state
        .evaluator(req.use_llm)
        .evaluate(role, question, req.answer.trim())
        .await;

    let interview = state.interviews.with(id, |s| {
        s.record(index, req.answer.trim().to_string(), evaluation.clone())?;
        Ok::<_, AppError>(s.view())
    })??;

    Ok(Json(AnswerResponse {
        evaluation,
        interview,
    }))
}

/// POST /api/v1/interviews/:id/retry
pub async fn handle_retry_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Option<Json<RetryRequest>>,
) -> Result<Json<InterviewView>, AppError> {
    let req = req.map(|Json(r)| r).unwrap_or_default();
    let view = state.interviews.with(id, |s| {
        s.retry(req.difficulty);
        s.view()
    })?;
    Ok(Json(view))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.interviews.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Quizzes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    pub choice: String,
}

#[derive(Debug, Serialize)]
pub struct ChoiceResponse {
    pub result: QuizChoice,
    pub quiz: QuizView,
}

/// POST /api/v1/quizzes
pub async fn handle_start_quiz(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<(StatusCode, Json<QuizView>), AppError> {
    let session = QuizSession::new(&req.role, req.difficulty);
    let view = session.view();
    info!(id = %session.id, role = session.role, "Quiz started");
    state.quizzes.insert(session.id, session);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/quizzes/:id
pub async fn handle_get_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizView>, AppError> {
    Ok(Json(state.quizzes.with(id, |s| s.view())?))
}

/// POST /api/v1/quizzes/:id/answers
pub async fn handle_answer_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChoiceRequest>,
) -> Result<Json<ChoiceResponse>, AppError> {
    let (result, quiz) = state.quizzes.with(id, |s| {
        let result = s.answer(&req.choice)?;
        Ok::<_, AppError>((result, s.view()))
    })??;
    Ok(Json(ChoiceResponse { result, quiz }))
}

/// POST /api/v1/quizzes/:id/retry
pub async fn handle_retry_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Option<Json<RetryRequest>>,
) -> Result<Json<QuizView>, AppError> {
    let req = req.map(|Json(r)| r).unwrap_or_default();
    let view = state.quizzes.with(id, |s| {
        s.retry(req.difficulty);
        s.view()
    })?;
    Ok(Json(view))
}

/// DELETE /api/v1/quizzes/:id
pub async fn handle_delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.quizzes.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
