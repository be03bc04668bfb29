//! Axum route handlers for chat turns, insights and history.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::mentor::chart::{chart_for_message, RoadmapChart};
use crate::profiles::models::{ChatMessage, Task};
use crate::session::actions::{chat_turn, run_insight};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// A chat entry together with its derived chart.
#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub message: ChatMessage,
    pub chart: Option<RoadmapChart>,
}

impl From<ChatMessage> for TurnResponse {
    fn from(message: ChatMessage) -> Self {
        let chart = chart_for_message(&message);
        Self { message, chart }
    }
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    let mut session = state.session.lock().await;
    let reply = chat_turn(&mut session, &state.store, state.llm.as_ref(), &req.message).await?;
    Ok(Json(reply.into()))
}

/// POST /api/v1/insights/:task
pub async fn handle_insight(
    State(state): State<AppState>,
    Path(task): Path<Task>,
) -> Result<Json<TurnResponse>, AppError> {
    let mut session = state.session.lock().await;
    let entry = run_insight(&mut session, &state.store, state.llm.as_ref(), task).await?;
    Ok(Json(entry.into()))
}

/// GET /api/v1/profiles/:name/history
pub async fn handle_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<TurnResponse>>, AppError> {
    let session = state.session.lock().await;
    let profile = session.profile(&name)?;
    let history = profile
        .chat_history
        .iter()
        .cloned()
        .map(TurnResponse::from)
        .collect();
    Ok(Json(history))
}
