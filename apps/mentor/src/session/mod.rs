//! Explicit application session: the loaded profiles plus the shell's view
//! state (active profile, theme, mentor style, one pending notice).
//!
//! Held in `AppState` behind a mutex and passed by reference into each action.

pub mod actions;
pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::profiles::models::Profile;
use crate::profiles::store::Profiles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MentorStyle {
    #[default]
    #[serde(rename = "Supportive Mentor")]
    SupportiveMentor,
    #[serde(rename = "Strict Coach")]
    StrictCoach,
    #[serde(rename = "Practical Advisor")]
    PracticalAdvisor,
}

impl MentorStyle {
    pub const ALL: [MentorStyle; 3] = [
        MentorStyle::SupportiveMentor,
        MentorStyle::StrictCoach,
        MentorStyle::PracticalAdvisor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MentorStyle::SupportiveMentor => "Supportive Mentor",
            MentorStyle::StrictCoach => "Strict Coach",
            MentorStyle::PracticalAdvisor => "Practical Advisor",
        }
    }

    /// Whether free-text chat asks for the long, encouraging register.
    pub fn mentor_mode(&self) -> bool {
        matches!(self, MentorStyle::SupportiveMentor)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Transcript colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub user_bg: &'static str,
    pub user_color: &'static str,
    pub bot_bg: &'static str,
    pub bot_color: &'static str,
    pub container_bg: &'static str,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                user_bg: "#DCF8C6",
                user_color: "#000000",
                bot_bg: "#1E1E1E",
                bot_color: "#FFFFFF",
                container_bg: "#121212",
            },
            Theme::Light => Palette {
                user_bg: "#E1FFC7",
                user_color: "#000000",
                bot_bg: "#F1F0F0",
                bot_color: "#000000",
                container_bg: "#FFFFFF",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-shot status line shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    pub profiles: Profiles,
    pub active_profile: Option<String>,
    pub theme: Theme,
    pub mentor_style: MentorStyle,
    notice: Option<Notice>,
}

impl Session {
    pub fn new(profiles: Profiles) -> Self {
        Self {
            profiles,
            ..Default::default()
        }
    }

    /// Name of the active profile, if it still exists.
    pub fn active_name(&self) -> Result<&str, AppError> {
        self.active_profile
            .as_deref()
            .filter(|name| self.profiles.contains_key(*name))
            .ok_or(AppError::NoActiveProfile)
    }

    pub fn active(&self) -> Option<&Profile> {
        self.active_name().ok().and_then(|name| self.profiles.get(name))
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, AppError> {
        self.profiles
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Profile '{name}' not found")))
    }

    pub fn profile_mut(&mut self, name: &str) -> Result<&mut Profile, AppError> {
        self.profiles
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(format!("Profile '{name}' not found")))
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
