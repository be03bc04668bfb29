//! Shell actions. Each one runs a full load -> mutate -> persist cycle against
//! the session it is handed.
//!
//! Chat ordering: the user's message is appended and persisted BEFORE the model
//! is asked, the assistant's message is appended and persisted AFTER the reply
//! (and any translation) completes. A failed reply therefore leaves the user's
//! turn on disk and no assistant turn.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::mentor::reply::{get_reply, ReplyParams};
use crate::profiles::models::{ChatMessage, NewProfile, Profile, Task};
use crate::profiles::store::{delete_profile as remove_profile, ProfileStore};
use crate::session::Session;

/// Creates (or overwrites) a profile. Does not change the active profile.
pub async fn create_profile(
    session: &mut Session,
    store: &ProfileStore,
    new: NewProfile,
) -> Result<String, AppError> {
    let name = new.name.clone();
    if !store.create(&mut session.profiles, new).await? {
        return Err(AppError::Validation("Profile name cannot be empty".to_string()));
    }
    Ok(name)
}

/// Removes a profile, clearing the active selection if it pointed there.
pub async fn delete_profile(
    session: &mut Session,
    store: &ProfileStore,
    name: &str,
) -> Result<Profile, AppError> {
    let removed = remove_profile(&mut session.profiles, name)
        .ok_or_else(|| AppError::NotFound(format!("Profile '{name}' not found")))?;
    if session.active_profile.as_deref() == Some(name) {
        session.active_profile = None;
    }
    store.save(&session.profiles).await?;
    info!("Deleted profile '{name}'");
    Ok(removed)
}

/// Selecting nothing keeps the current selection.
pub fn select_profile(session: &mut Session, name: Option<&str>) -> Result<(), AppError> {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Ok(());
    };
    session.profile(name)?;
    session.active_profile = Some(name.to_string());
    Ok(())
}

/// Free-text chat turn against the active profile. Returns the assistant entry.
pub async fn chat_turn(
    session: &mut Session,
    store: &ProfileStore,
    llm: &dyn TextGenerator,
    message: &str,
) -> Result<ChatMessage, AppError> {
    if message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    let name = session.active_name()?.to_string();
    let mentor_mode = session.mentor_style.mentor_mode();

    session
        .profile_mut(&name)?
        .chat_history
        .push(ChatMessage::user(message));
    store.save(&session.profiles).await?;

    let reply = {
        let profile = session.profile(&name)?;
        get_reply(
            llm,
            ReplyParams {
                profile,
                messages: &profile.chat_history,
                mentor_mode,
                return_json_roadmap: true,
                task: None,
                language: &profile.language,
            },
        )
        .await?
    };

    append_assistant(session, store, &name, reply.into_message()).await
}

/// One-shot insight (skill gap or resources) appended to the active profile.
pub async fn run_insight(
    session: &mut Session,
    store: &ProfileStore,
    llm: &dyn TextGenerator,
    task: Task,
) -> Result<ChatMessage, AppError> {
    let name = session.active_name()?.to_string();
    info!("Running {} insight for '{name}'", task.as_str());

    let reply = {
        let profile = session.profile(&name)?;
        get_reply(
            llm,
            ReplyParams {
                profile,
                messages: &profile.chat_history,
                mentor_mode: true,
                return_json_roadmap: true,
                task: Some(task),
                language: &profile.language,
            },
        )
        .await?
    };

    append_assistant(session, store, &name, reply.into_message()).await
}

async fn append_assistant(
    session: &mut Session,
    store: &ProfileStore,
    name: &str,
    message: ChatMessage,
) -> Result<ChatMessage, AppError> {
    let profile = session.profile_mut(name)?;
    profile.chat_history.push(message.clone());
    let turns = profile.chat_history.len();
    store.save(&session.profiles).await?;
    info!(
        "Appended assistant reply for '{name}' (roadmap: {}, history: {turns})",
        message.roadmap.is_some()
    );
    Ok(message)
}
