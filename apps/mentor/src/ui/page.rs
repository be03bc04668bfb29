//! HTML rendering for the single chat page.

use crate::errors::NO_ACTIVE_PROFILE_MESSAGE;
use crate::mentor::chart::{chart_for_message, RoadmapChart};
use crate::profiles::models::{ChatMessage, Profile, Role, SUPPORTED_LANGUAGES};
use crate::session::{MentorStyle, Notice, NoticeKind, Palette, Session};

pub const PAGE_TITLE: &str = "Career Guidance Bot";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_page(session: &Session, notice: Option<&Notice>) -> String {
    let palette = session.theme.palette();
    let active = session.active();

    let main = match active {
        Some(profile) => render_chat(profile),
        None => format!("<p class=\"info\">{NO_ACTIVE_PROFILE_MESSAGE}</p>"),
    };

    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>🎯 {PAGE_TITLE}</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <aside class=\"sidebar\">{sidebar}</aside>\n\
         <main>{notice}{main}</main>\n</body>\n</html>\n",
        style = render_style(&palette),
        sidebar = render_sidebar(session, active),
        notice = notice.map(render_notice).unwrap_or_default(),
    )
}

fn render_style(p: &Palette) -> String {
    format!(
        "body {{ display: flex; font-family: sans-serif; margin: 0; background: {bg}; color: {fg}; }}\n\
         .sidebar {{ width: 300px; padding: 16px; border-right: 1px solid #888; }}\n\
         main {{ flex: 1; padding: 16px; }}\n\
         .user-bubble {{ background-color: {user_bg}; color: {user_color}; padding: 10px; border-radius: 16px; \
         margin: 5px 0; text-align: right; max-width: 75%; float: right; clear: both; white-space: pre-wrap; }}\n\
         .bot-bubble {{ background-color: {bot_bg}; color: {bot_color}; padding: 10px; border-radius: 16px; \
         margin: 5px 0; text-align: left; max-width: 75%; float: left; clear: both; white-space: pre-wrap; }}\n\
         .chat-container {{ background-color: {bg}; padding: 10px; border-radius: 10px; height: 500px; overflow-y: auto; }}\n\
         .roadmap {{ clear: both; margin: 8px 0; padding: 8px; border: 1px solid #888; }}\n\
         .lane {{ display: flex; gap: 6px; margin: 4px 0; }}\n\
         .lane-label {{ width: 120px; font-weight: bold; }}\n\
         .bar {{ color: #000000; padding: 6px; border-radius: 4px; white-space: pre-wrap; }}\n\
         .notice-success {{ color: #2E7D32; }} .notice-error {{ color: #C62828; }}\n",
        bg = p.container_bg,
        fg = p.bot_color,
        user_bg = p.user_bg,
        user_color = p.user_color,
        bot_bg = p.bot_bg,
        bot_color = p.bot_color,
    )
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };
    format!("<p class=\"{class}\">{}</p>", escape_html(&notice.text))
}

fn render_options<'a>(values: impl IntoIterator<Item = &'a str>, selected: &str) -> String {
    values
        .into_iter()
        .map(|value| {
            let value = escape_html(value);
            let mark = if value == escape_html(selected) { " selected" } else { "" };
            format!("<option value=\"{value}\"{mark}>{value}</option>")
        })
        .collect()
}

fn render_sidebar(session: &Session, active: Option<&Profile>) -> String {
    let active_name = active.map(|p| p.name.as_str()).unwrap_or_default();
    let styles = render_options(
        MentorStyle::ALL.iter().map(MentorStyle::label),
        session.mentor_style.label(),
    );
    let profiles = render_options(session.profiles.keys().map(String::as_str), active_name);
    let languages = render_options(SUPPORTED_LANGUAGES.iter().copied(), "English");

    let mut html = format!(
        "<h2>🧑‍🏫 Mentor Settings</h2>\
         <form method=\"post\" action=\"/ui/style\"><label>Choose Mentor Style: \
         <select name=\"style\">{styles}</select></label> <button>Apply</button></form>\
         <h3>🎨 Theme</h3>\
         <form method=\"post\" action=\"/ui/theme\"><button>Toggle Dark/Light Mode</button></form>\
         <h2>👤 Profile Manager</h2>\
         <form method=\"post\" action=\"/ui/select\"><label>Select Profile \
         <select name=\"name\"><option value=\"\">-- None --</option>{profiles}</select></label> \
         <button>Select</button></form>"
    );

    if active.is_some() {
        html.push_str(
            "<form method=\"post\" action=\"/ui/delete\"><button>🗑️ Delete Profile</button></form>",
        );
    }

    html.push_str(&format!(
        "<details><summary>➕ Create New Profile</summary>\
         <form method=\"post\" action=\"/ui/create\">\
         <label>Profile Name <input name=\"name\"></label><br>\
         <label>Education <input name=\"education\"></label><br>\
         <label>Interests (comma separated) <textarea name=\"interests\"></textarea></label><br>\
         <label>Strengths (comma separated) <textarea name=\"strengths\"></textarea></label><br>\
         <label>Career Goal <textarea name=\"goal\"></textarea></label><br>\
         <label>Preferred Language <select name=\"language\">{languages}</select></label><br>\
         <button>Save Profile</button></form></details>"
    ));

    if active.is_some() {
        html.push_str(
            "<h3>🎯 Career Insights</h3>\
             <form method=\"post\" action=\"/ui/insight/skill_gap\"><button>🔍 Skill Gap Analysis</button></form>\
             <form method=\"post\" action=\"/ui/insight/resources\"><button>📚 Resource Recommendations</button></form>",
        );
    }
    html
}

fn render_chat(profile: &Profile) -> String {
    let transcript: String = profile.chat_history.iter().map(render_message).collect();
    format!(
        "<h1>🎯 Personalized Career Guidance Chatbot</h1>\
         <h3>💡 Active Profile: {name} ({language})</h3>\
         <div class=\"chat-container\">{transcript}</div>\
         <form method=\"post\" action=\"/ui/chat\">\
         <input name=\"message\" size=\"60\" placeholder=\"Ask about careers, skills, or roadmaps...\"> \
         <button>Send</button></form>",
        name = escape_html(&profile.name),
        language = escape_html(&profile.language),
    )
}

fn render_message(message: &ChatMessage) -> String {
    let class = match message.role {
        Role::User => "user-bubble",
        Role::Assistant => "bot-bubble",
    };
    let chart = chart_for_message(message)
        .map(|chart| render_chart(&chart))
        .unwrap_or_default();
    format!(
        "<div class=\"{class}\">{}</div>{chart}",
        escape_html(&message.content)
    )
}

pub fn render_chart(chart: &RoadmapChart) -> String {
    let lanes: String = chart
        .lanes()
        .into_iter()
        .map(|(label, texts)| {
            let bars: String = texts
                .into_iter()
                .map(|text| {
                    format!(
                        "<div class=\"bar\" style=\"background: {};\">{}</div>",
                        chart.bar_color,
                        escape_html(text)
                    )
                })
                .collect();
            format!(
                "<div class=\"lane\"><span class=\"lane-label\">{}</span>{bars}</div>",
                escape_html(label)
            )
        })
        .collect();
    format!(
        "<figure class=\"roadmap\" style=\"min-height: {}px;\"><figcaption>{}</figcaption>\
         <div class=\"axis\">{}</div>{lanes}</figure>",
        chart.height,
        escape_html(&chart.title),
        escape_html(&chart.y_axis_title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mentor::roadmap::Roadmap;
    use crate::profiles::models::{NewProfile, Task};
    use crate::session::Theme;

    fn session_with_ada() -> Session {
        let mut profile = NewProfile {
            name: "Ada".into(),
            language: "French".into(),
            ..Default::default()
        }
        .into_profile();
        profile.chat_history.push(ChatMessage::user("<b>hi</b>"));
        let roadmap: Roadmap =
            serde_json::from_value(serde_json::json!({"Week 1": ["Learn Python"]})).unwrap();
        profile.chat_history.push(ChatMessage::assistant(
            "Here is your plan",
            Some(roadmap),
            Some(Task::SkillGap),
        ));
        let mut session = Session::new([("Ada".to_string(), profile)].into_iter().collect());
        session.active_profile = Some("Ada".into());
        session
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_without_active_profile_prompts_selection() {
        let html = render_page(&Session::default(), None);
        assert!(html.contains(NO_ACTIVE_PROFILE_MESSAGE));
        assert!(!html.contains("Career Insights"));
        assert!(!html.contains("Delete Profile"));
    }

    #[test]
    fn test_page_renders_transcript_and_chart() {
        let html = render_page(&session_with_ada(), None);
        assert!(html.contains("Active Profile: Ada (French)"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("<div class=\"bot-bubble\">Here is your plan</div>"));
        assert!(html.contains("📊 Career Roadmap"));
        assert!(html.contains("Learn Python"));
        assert!(html.contains("Skill Gap Analysis"));
        assert!(html.contains("<option value=\"Ada\" selected>Ada</option>"));
    }

    #[test]
    fn test_page_uses_theme_palette() {
        let mut session = session_with_ada();
        assert!(render_page(&session, None).contains("#1E1E1E"));
        session.theme = Theme::Light;
        let html = render_page(&session, None);
        assert!(html.contains("#F1F0F0"));
        assert!(!html.contains("#1E1E1E"));
    }

    #[test]
    fn test_notice_rendered_escaped() {
        let html = render_page(&Session::default(), Some(&Notice::error("bad <input>")));
        assert!(html.contains("<p class=\"notice-error\">bad &lt;input&gt;</p>"));
    }
}
