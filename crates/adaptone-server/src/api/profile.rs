use crate::api::{ApiError, AppState};
use adaptone_core::models::{PreferencesUpdate, UserProfile};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub user_id: Option<String>,
    pub preferences: Option<PreferencesUpdate>,
}

// POST /api/profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Response, ApiError> {
    let user_id = request.user_id.filter(|id| !id.is_empty());
    let preferences = request.preferences.filter(|prefs| !prefs.is_empty());
    let (Some(user_id), Some(preferences)) = (user_id, preferences) else {
        return Err(ApiError::Validation(
            "user_id and preferences are required".to_string(),
        ));
    };

    match state.storage.profiles.get(&user_id)? {
        Some(mut profile) => {
            profile.apply_preferences(preferences);
            state.storage.profiles.update(&mut profile)?;
            Ok((
                StatusCode::OK,
                Json(json!({
                    "message": format!("Profile updated for {user_id}"),
                    "user_id": user_id,
                })),
            )
                .into_response())
        }
        None => {
            let mut profile = UserProfile::new(user_id.clone(), preferences);
            state.storage.profiles.create(&mut profile)?;
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "message": format!("Profile created for {user_id}"),
                    "user_id": user_id,
                })),
            )
                .into_response())
        }
    }
}

// GET /api/profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state
        .storage
        .profiles
        .get(&user_id)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    // Fetching a profile bootstraps the user's session buffer.
    state.sessions.touch(&user_id);

    Ok(Json(profile))
}
