use crate::api::{ApiError, AppState};
use adaptone_core::models::{Exchange, TonePreferences};
use adaptone_core::tone::{self, Context, Feedback};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub context: Context,
    pub feedback_on_previous: Option<Feedback>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub tone_applied: TonePreferences,
    pub memory_updated: bool,
    pub conversation_id: String,
}

// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let user_id = request.user_id.filter(|id| !id.is_empty());
    let message = request.message.filter(|msg| !msg.is_empty());
    let (Some(user_id), Some(message)) = (user_id, message) else {
        return Err(ApiError::Validation(
            "user_id and message are required".to_string(),
        ));
    };

    let mut profile = state.storage.profiles.get(&user_id)?.ok_or_else(|| {
        ApiError::NotFound("User profile not found. Please create a profile first.".to_string())
    })?;

    // Feedback on the previous reply is persisted before this turn counts.
    if let Some(feedback) = request.feedback_on_previous {
        tone::process_feedback(&mut profile, feedback);
        state.storage.profiles.update(&mut profile)?;
    }

    state.sessions.append(&user_id, Exchange::user(&message));
    let history = state.sessions.snapshot(&user_id).unwrap_or_default();

    let (response, tone_applied) = tone::generate_response(
        &profile,
        request.context,
        &message,
        &history,
        &mut rand::rng(),
    );
    state.sessions.append(&user_id, Exchange::assistant(&response));

    // Save interaction count
    state.storage.profiles.update(&mut profile)?;

    Ok(Json(ChatResponse {
        response,
        tone_applied,
        memory_updated: true,
        conversation_id: Uuid::new_v4().to_string(),
    }))
}
