use serde::{Deserialize, Deserializer, Serialize};

use crate::mentor::roadmap::Roadmap;

/// Display and translation target used when a record carries no language.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Languages offered by the profile form. Any non-blank value is accepted.
pub const SUPPORTED_LANGUAGES: &[&str] = &["English", "Hindi", "Spanish", "French", "German"];

/// A named user record: career attributes plus its conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chat_history: Vec<ChatMessage>,
    /// Legacy records written before this field existed are backfilled on load.
    #[serde(default = "default_language", deserialize_with = "language_or_default")]
    pub language: String,
}

/// Input for creating (or overwriting) a profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProfile {
    pub name: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub language: String,
}

impl NewProfile {
    /// Builds the stored record with an empty chat history.
    /// A blank language falls back to [`DEFAULT_LANGUAGE`].
    pub fn into_profile(self) -> Profile {
        let language = match self.language.trim() {
            "" => DEFAULT_LANGUAGE.to_string(),
            lang => lang.to_string(),
        };
        Profile {
            name: self.name,
            education: self.education,
            interests: self.interests,
            strengths: self.strengths,
            goal: self.goal,
            chat_history: Vec::new(),
            language,
        }
    }
}

/// Splits a comma separated form field, trimming items and dropping empty ones.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Capitalized form used in the conversation excerpt ("User: ...").
    pub fn title(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// Directive steering the model toward a structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    SkillGap,
    Resources,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::SkillGap => "skill_gap",
            Task::Resources => "resources",
        }
    }
}

/// One entry in a profile's chat history. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Roadmap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            roadmap: None,
            task: None,
        }
    }

    /// Assistant entry. `roadmap` and `task` are only recorded together, and only
    /// when a non-empty roadmap was actually extracted.
    pub fn assistant(content: impl Into<String>, roadmap: Option<Roadmap>, task: Option<Task>) -> Self {
        let roadmap = roadmap.filter(|r| !r.is_empty());
        let task = roadmap.as_ref().and(task);
        Self {
            role: Role::Assistant,
            content: content.into(),
            roadmap,
            task,
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Hand-edited files sometimes carry `null` where a list or string belongs.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn language_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let language = Option::<String>::deserialize(deserializer)?;
    Ok(language
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(default_language))
}
