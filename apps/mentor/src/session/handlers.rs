use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::profiles::models::SUPPORTED_LANGUAGES;
use crate::session::actions::select_profile;
use crate::session::{MentorStyle, Session, Theme};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub active_profile: Option<String>,
    pub theme: Theme,
    pub mentor_style: MentorStyle,
    pub profiles: Vec<String>,
    pub mentor_styles: [MentorStyle; 3],
    pub languages: &'static [&'static str],
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            active_profile: session.active_name().ok().map(str::to_string),
            theme: session.theme,
            mentor_style: session.mentor_style,
            profiles: session.profile_names(),
            mentor_styles: MentorStyle::ALL,
            languages: SUPPORTED_LANGUAGES,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectProfileRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MentorStyleRequest {
    pub style: MentorStyle,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(SessionView::from(&*session))
}

/// PUT /api/v1/session/active
pub async fn handle_select_profile(
    State(state): State<AppState>,
    Json(req): Json<SelectProfileRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    select_profile(&mut session, req.name.as_deref())?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/session/theme/toggle
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.toggle_theme();
    Json(SessionView::from(&*session))
}

/// PUT /api/v1/session/mentor-style
pub async fn handle_set_mentor_style(
    State(state): State<AppState>,
    Json(req): Json<MentorStyleRequest>,
) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.mentor_style = req.style;
    Json(SessionView::from(&*session))
}
