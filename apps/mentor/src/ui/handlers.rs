use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::profiles::models::{split_comma_list, NewProfile, Task};
use crate::session::actions::{chat_turn, create_profile, delete_profile, run_insight, select_profile};
use crate::session::{MentorStyle, Notice, Session};
use crate::state::AppState;
use crate::ui::page::render_page;

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    #[serde(default)]
    pub name: String,
}

/// Profile form as posted: list fields arrive comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProfileForm {
    pub name: String,
    pub education: String,
    pub interests: String,
    pub strengths: String,
    pub goal: String,
    pub language: String,
}

impl From<CreateProfileForm> for NewProfile {
    fn from(form: CreateProfileForm) -> Self {
        NewProfile {
            name: form.name,
            education: form.education,
            interests: split_comma_list(&form.interests),
            strengths: split_comma_list(&form.strengths),
            goal: form.goal,
            language: form.language,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StyleForm {
    pub style: MentorStyle,
}

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

/// Records the outcome of a form action as the next page's notice.
fn report(session: &mut Session, outcome: Result<Option<String>, AppError>) -> Redirect {
    match outcome {
        Ok(Some(text)) => session.set_notice(Notice::success(text)),
        Ok(None) => {}
        Err(e) => {
            warn!("UI action failed: {e}");
            session.set_notice(Notice::error(e.to_string()));
        }
    }
    Redirect::to("/")
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;
    let notice = session.take_notice();
    Html(render_page(&session, notice.as_ref()))
}

/// POST /ui/select
pub async fn handle_select(State(state): State<AppState>, Form(form): Form<SelectForm>) -> Redirect {
    let mut session = state.session.lock().await;
    let outcome = select_profile(&mut session, Some(form.name.as_str())).map(|_| None);
    report(&mut session, outcome)
}

/// POST /ui/create
pub async fn handle_create(
    State(state): State<AppState>,
    Form(form): Form<CreateProfileForm>,
) -> Redirect {
    let mut session = state.session.lock().await;
    let outcome = create_profile(&mut session, &state.store, form.into())
        .await
        .map(|name| Some(format!("Profile '{name}' created!")));
    report(&mut session, outcome)
}

/// POST /ui/delete: removes the active profile.
pub async fn handle_delete(State(state): State<AppState>) -> Redirect {
    let mut session = state.session.lock().await;
    let active = session.active_name().map(str::to_string);
    let outcome = match active {
        Ok(name) => delete_profile(&mut session, &state.store, &name)
            .await
            .map(|_| Some(format!("Profile '{name}' deleted!"))),
        Err(e) => Err(e),
    };
    report(&mut session, outcome)
}

/// POST /ui/theme
pub async fn handle_theme(State(state): State<AppState>) -> Redirect {
    let mut session = state.session.lock().await;
    session.toggle_theme();
    Redirect::to("/")
}

/// POST /ui/style
pub async fn handle_style(State(state): State<AppState>, Form(form): Form<StyleForm>) -> Redirect {
    let mut session = state.session.lock().await;
    session.mentor_style = form.style;
    Redirect::to("/")
}

/// POST /ui/chat
pub async fn handle_chat(State(state): State<AppState>, Form(form): Form<ChatForm>) -> Redirect {
    let mut session = state.session.lock().await;
    let outcome = chat_turn(&mut session, &state.store, state.llm.as_ref(), &form.message)
        .await
        .map(|_| None);
    report(&mut session, outcome)
}

/// POST /ui/insight/:task
pub async fn handle_insight(State(state): State<AppState>, Path(task): Path<Task>) -> Redirect {
    let mut session = state.session.lock().await;
    let outcome = run_insight(&mut session, &state.store, state.llm.as_ref(), task)
        .await
        .map(|_| {
            Some(match task {
                Task::SkillGap => "Skill Gap Analysis added to chat!".to_string(),
                Task::Resources => "Resource Recommendations added to chat!".to_string(),
            })
        });
    report(&mut session, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_form_splits_lists() {
        let form = CreateProfileForm {
            name: "Bob".into(),
            interests: "Data, ML ,".into(),
            strengths: "Python".into(),
            ..Default::default()
        };
        let new: NewProfile = form.into();
        assert_eq!(new.name, "Bob");
        assert_eq!(new.interests, vec!["Data", "ML"]);
        assert_eq!(new.strengths, vec!["Python"]);
        assert_eq!(new.language, "");
    }
}
