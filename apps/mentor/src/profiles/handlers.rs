use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::profiles::models::{NewProfile, Profile};
use crate::session::actions::{create_profile, delete_profile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub goal: String,
    pub language: String,
    pub messages: usize,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            goal: profile.goal.clone(),
            language: profile.language.clone(),
            messages: profile.chat_history.len(),
        }
    }
}

/// GET /api/v1/profiles
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<Vec<ProfileSummary>> {
    let session = state.session.lock().await;
    Json(session.profiles.values().map(ProfileSummary::from).collect())
}

/// POST /api/v1/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(req): Json<NewProfile>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let mut session = state.session.lock().await;
    let name = create_profile(&mut session, &state.store, req).await?;
    let profile = session.profile(&name)?.clone();
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles/:name
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let session = state.session.lock().await;
    Ok(Json(session.profile(&name)?.clone()))
}

/// DELETE /api/v1/profiles/:name
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.lock().await;
    delete_profile(&mut session, &state.store, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}
