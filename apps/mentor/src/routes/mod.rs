pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::mentor::handlers as mentor;
use crate::profiles::handlers as profiles;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML shell
        .route("/", get(ui::handle_index))
        .route("/ui/select", post(ui::handle_select))
        .route("/ui/create", post(ui::handle_create))
        .route("/ui/delete", post(ui::handle_delete))
        .route("/ui/theme", post(ui::handle_theme))
        .route("/ui/style", post(ui::handle_style))
        .route("/ui/chat", post(ui::handle_chat))
        .route("/ui/insight/:task", post(ui::handle_insight))
        // Session API
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/active", put(session::handle_select_profile))
        .route(
            "/api/v1/session/theme/toggle",
            post(session::handle_toggle_theme),
        )
        .route(
            "/api/v1/session/mentor-style",
            put(session::handle_set_mentor_style),
        )
        // Profiles API
        .route(
            "/api/v1/profiles",
            get(profiles::handle_list_profiles).post(profiles::handle_create_profile),
        )
        .route(
            "/api/v1/profiles/:name",
            get(profiles::handle_get_profile).delete(profiles::handle_delete_profile),
        )
        .route("/api/v1/profiles/:name/history", get(mentor::handle_history))
        // Mentor API
        .route("/api/v1/chat", post(mentor::handle_chat))
        .route("/api/v1/insights/:task", post(mentor::handle_insight))
        .with_state(state)
}
