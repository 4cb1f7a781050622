use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-advisor-api",
        "live_mode": state.live_mode_available(),
        "known_skills": state.skills.len(),
        "match_cache": {
            "entries": state.match_cache.len(),
            "stats": state.match_cache.stats(),
        },
        "sessions": {
            "interviews": state.interviews.len(),
            "quizzes": state.quizzes.len(),
        },
    }))
}
