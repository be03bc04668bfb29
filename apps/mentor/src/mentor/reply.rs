//! Reply Service: one primary model call, best-effort roadmap extraction,
//! and an optional translation pass.
//!
//! Only the primary call may fail. Extraction and translation failures are
//! absorbed: the roadmap is simply absent, or the untranslated text is returned.

use serde::Serialize;
use tracing::{debug, warn};

use crate::llm_client::prompts::TRANSLATE_PROMPT_TEMPLATE;
use crate::llm_client::{LlmError, TextGenerator};
use crate::mentor::context::build_conversation_context;
use crate::mentor::extract::{extract_roadmap, split_json_block};
use crate::mentor::roadmap::Roadmap;
use crate::profiles::models::{ChatMessage, Profile, Task, DEFAULT_LANGUAGE};

/// Inputs for a single mentor reply.
pub struct ReplyParams<'a> {
    pub profile: &'a Profile,
    pub messages: &'a [ChatMessage],
    pub mentor_mode: bool,
    pub return_json_roadmap: bool,
    pub task: Option<Task>,
    pub language: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentorReply {
    pub text: String,
    pub roadmap: Option<Roadmap>,
    pub task: Option<Task>,
}

impl MentorReply {
    pub fn into_message(self) -> ChatMessage {
        ChatMessage::assistant(self.text, self.roadmap, self.task)
    }
}

pub async fn get_reply(
    llm: &dyn TextGenerator,
    params: ReplyParams<'_>,
) -> Result<MentorReply, LlmError> {
    let ReplyParams {
        profile,
        messages,
        mentor_mode,
        return_json_roadmap,
        task,
        language,
    } = params;

    let prompt = build_conversation_context(profile, messages, mentor_mode, task, language);
    debug!(
        "Requesting reply for '{}': task={:?}, history={}, prompt_chars={}",
        profile.name,
        task,
        messages.len(),
        prompt.len()
    );

    let raw = llm.generate(&prompt).await?;
    let text = raw.trim();

    let roadmap = if return_json_roadmap {
        extract_roadmap(text)
    } else {
        None
    };

    // The translation pass works on the pre-extraction text so the JSON span
    // is carried through verbatim.
    let text = force_translate(llm, text, language).await;

    Ok(MentorReply {
        text,
        roadmap,
        task,
    })
}

/// Translates `text` into `target_lang`, withholding the embedded JSON span.
///
/// English passes through with no model call. On translation failure the
/// original text is returned unchanged.
pub async fn force_translate(llm: &dyn TextGenerator, text: &str, target_lang: &str) -> String {
    if target_lang.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
        return text.to_string();
    }

    let (prose, json_block) = split_json_block(text);
    let prompt = TRANSLATE_PROMPT_TEMPLATE
        .replace("{target_lang}", target_lang)
        .replace("{text}", &prose);

    let translated = match llm.generate(&prompt).await {
        Ok(translated) => translated.trim().to_string(),
        Err(e) => {
            warn!("Translation to {target_lang} failed, keeping original text: {e}");
            return text.to_string();
        }
    };

    match json_block {
        Some(block) => format!("{translated}\n\n{block}"),
        None => translated,
    }
}
