use crate::api::{ApiError, AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

// GET /api/memory/{user_id}
pub async fn get_memory(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let short_term = state
        .sessions
        .snapshot(&user_id)
        .ok_or_else(|| ApiError::NotFound("Memory not found for user".to_string()))?;

    Ok(Json(json!({
        "short_term_memory": short_term,
        "long_term_summary": "Long-term summary not yet implemented in this version.",
    })))
}

// DELETE /api/memory/{user_id}
pub async fn clear_memory(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    state.sessions.clear(&user_id);
    Json(json!({
        "message": format!("Short-term memory cleared for user_id: {user_id}"),
    }))
}
