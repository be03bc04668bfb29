//! Prompt Builder: deterministic assembly of the conversation prompt.
//! Pure function of its inputs; no I/O.

use crate::mentor::prompts::{
    DIRECT_STYLE_INSTRUCTION, MENTOR_STYLE_INSTRUCTION, MENTOR_SYSTEM_PROMPT,
    NO_HISTORY_PLACEHOLDER, RESOURCES_INSTRUCTION, SKILL_GAP_INSTRUCTION,
};
use crate::profiles::models::{ChatMessage, Profile, Task};

/// Number of trailing messages included in the conversation excerpt.
pub const HISTORY_WINDOW: usize = 6;

pub fn build_conversation_context(
    profile: &Profile,
    messages: &[ChatMessage],
    mentor_mode: bool,
    task: Option<Task>,
    language: &str,
) -> String {
    let profile_text = format!(
        "User Profile:\nName: {}\nEducation: {}\nInterests: {}\nStrengths: {}\nGoal: {}",
        profile.name,
        profile.education,
        profile.interests.join(", "),
        profile.strengths.join(", "),
        profile.goal,
    );

    let history = render_history(messages);

    let style_instruction = if mentor_mode {
        MENTOR_STYLE_INSTRUCTION
    } else {
        DIRECT_STYLE_INSTRUCTION
    };

    let task_instruction = match task {
        Some(Task::SkillGap) => SKILL_GAP_INSTRUCTION,
        Some(Task::Resources) => RESOURCES_INSTRUCTION,
        None => "",
    };

    format!(
        "{MENTOR_SYSTEM_PROMPT}\n\n\
         {profile_text}\n\n\
         Conversation so far:\n{history}\n\n\
         Task: {task_instruction}\n\n\
         Language: Respond in {language}.\n\n\
         Now continue the conversation.\n\
         {style_instruction}\n"
    )
}

/// Last [`HISTORY_WINDOW`] messages as `Role: content` lines.
fn render_history(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return NO_HISTORY_PLACEHOLDER.to_string();
    }
    let start = messages.len().saturating_sub(HISTORY_WINDOW);
    messages[start..]
        .iter()
        .map(|m| format!("{}: {}", m.role.title(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::models::NewProfile;

    fn ada() -> Profile {
        NewProfile {
            name: "Ada".into(),
            education: "BS CS".into(),
            interests: vec!["AI".into(), "Music".into()],
            strengths: vec!["Math".into()],
            goal: "Become ML engineer".into(),
            language: "English".into(),
        }
        .into_profile()
    }

    #[test]
    fn test_skill_gap_prompt_contains_profile_and_template() {
        let prompt = build_conversation_context(&ada(), &[], true, Some(Task::SkillGap), "English");
        assert!(prompt.contains("Ada"));
        assert!(prompt.contains("BS CS"));
        assert!(prompt.contains("AI, Music"));
        assert!(prompt.contains("Strengths: Math"));
        assert!(prompt.contains("Goal: Become ML engineer"));
        assert!(prompt.contains(SKILL_GAP_INSTRUCTION));
        assert!(!prompt.contains(RESOURCES_INSTRUCTION));
    }

    #[test]
    fn test_resources_prompt_contains_week_template() {
        let prompt = build_conversation_context(&ada(), &[], true, Some(Task::Resources), "English");
        assert!(prompt.contains(RESOURCES_INSTRUCTION));
        assert!(prompt.contains("\"Week 1\": \"Resource A\""));
    }

    #[test]
    fn test_no_task_leaves_task_line_empty() {
        let prompt = build_conversation_context(&ada(), &[], true, None, "English");
        assert!(prompt.contains("Task: \n"));
        assert!(!prompt.contains("JSON object"));
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        let prompt = build_conversation_context(&ada(), &[], true, None, "English");
        assert!(prompt.contains("Conversation so far:\nNo prior conversation."));
    }

    #[test]
    fn test_history_keeps_only_last_six_in_order() {
        let messages: Vec<ChatMessage> = (1..=8)
            .map(|i| {
                if i % 2 == 1 {
                    ChatMessage::user(format!("question {i}"))
                } else {
                    ChatMessage::assistant(format!("answer {i}"), None, None)
                }
            })
            .collect();

        let prompt = build_conversation_context(&ada(), &messages, true, None, "English");

        assert!(!prompt.contains("question 1"));
        assert!(!prompt.contains("answer 2"));
        assert!(prompt.contains("User: question 3\nAssistant: answer 4"));
        assert!(prompt.contains("Assistant: answer 8"));
        assert!(!prompt.contains(NO_HISTORY_PLACEHOLDER));
    }

    #[test]
    fn test_style_follows_mentor_mode() {
        let warm = build_conversation_context(&ada(), &[], true, None, "English");
        let direct = build_conversation_context(&ada(), &[], false, None, "English");
        assert!(warm.contains(MENTOR_STYLE_INSTRUCTION));
        assert!(direct.contains(DIRECT_STYLE_INSTRUCTION));
        assert!(!direct.contains(MENTOR_STYLE_INSTRUCTION));
    }

    #[test]
    fn test_language_and_closing_instruction_present() {
        let prompt = build_conversation_context(&ada(), &[], true, None, "Spanish");
        assert!(prompt.contains("Language: Respond in Spanish."));
        assert!(prompt.starts_with(MENTOR_SYSTEM_PROMPT));
        assert!(prompt.contains("Now continue the conversation."));
    }

    #[test]
    fn test_build_is_deterministic() {
        let messages = vec![ChatMessage::user("What skills do I need?")];
        let a = build_conversation_context(&ada(), &messages, true, Some(Task::SkillGap), "English");
        let b = build_conversation_context(&ada(), &messages, true, Some(Task::SkillGap), "English");
        assert_eq!(a, b);
    }
}
