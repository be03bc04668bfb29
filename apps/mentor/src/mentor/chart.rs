//! Chart Renderer: turns a roadmap into a horizontal bar-chart description.
//! Presentation only; the roadmap is read, never modified.

use serde::Serialize;

use crate::mentor::roadmap::Roadmap;
use crate::profiles::models::{ChatMessage, Task};

pub const CAREER_ROADMAP_TITLE: &str = "📊 Career Roadmap";
pub const RESOURCE_PLAN_TITLE: &str = "📚 Resource Plan";
pub const Y_AXIS_TITLE: &str = "Weeks";
pub const BAR_COLOR: &str = "lightgreen";

const BASE_HEIGHT: u32 = 400;
const HEIGHT_PER_KEY: u32 = 30;

/// One bar: a leaf item stacked under its top-level roadmap key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapChart {
    pub title: String,
    pub y_axis_title: String,
    pub height: u32,
    pub bar_color: String,
    pub bars: Vec<ChartBar>,
}

impl RoadmapChart {
    /// Bars grouped by label, in first-seen order.
    pub fn lanes(&self) -> Vec<(&str, Vec<&str>)> {
        let mut lanes: Vec<(&str, Vec<&str>)> = Vec::new();
        for bar in &self.bars {
            match lanes.iter().position(|(label, _)| *label == bar.label) {
                Some(i) => lanes[i].1.push(bar.text.as_str()),
                None => lanes.push((bar.label.as_str(), vec![bar.text.as_str()])),
            }
        }
        lanes
    }
}

/// `task == Some(SkillGap)` gets the roadmap title; anything else the resource-plan title.
pub fn render_roadmap_chart(roadmap: &Roadmap, task: Option<Task>) -> RoadmapChart {
    let bars = roadmap
        .entries()
        .flat_map(|(key, value)| {
            value.display_items().into_iter().map(move |text| ChartBar {
                label: key.to_string(),
                text,
            })
        })
        .collect();

    let title = match task {
        Some(Task::SkillGap) => CAREER_ROADMAP_TITLE,
        _ => RESOURCE_PLAN_TITLE,
    };

    RoadmapChart {
        title: title.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        height: BASE_HEIGHT + HEIGHT_PER_KEY * roadmap.len() as u32,
        bar_color: BAR_COLOR.to_string(),
        bars,
    }
}

/// Chart for a stored chat entry, if it carries a non-empty roadmap.
pub fn chart_for_message(message: &ChatMessage) -> Option<RoadmapChart> {
    message
        .roadmap
        .as_ref()
        .filter(|roadmap| !roadmap.is_empty())
        .map(|roadmap| render_roadmap_chart(roadmap, message.task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roadmap(value: serde_json::Value) -> Roadmap {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_list_item_is_one_bar() {
        let chart = render_roadmap_chart(&roadmap(json!({"Week 1": ["Learn Python"]})), Some(Task::SkillGap));
        assert_eq!(
            chart.bars,
            vec![ChartBar {
                label: "Week 1".into(),
                text: "Learn Python".into()
            }]
        );
        assert_eq!(chart.title, CAREER_ROADMAP_TITLE);
        assert!(chart.title.contains("Roadmap"));
    }

    #[test]
    fn test_non_skill_gap_uses_resource_title() {
        let r = roadmap(json!({"Week 1": "Read X"}));
        assert_eq!(render_roadmap_chart(&r, Some(Task::Resources)).title, RESOURCE_PLAN_TITLE);
        assert_eq!(render_roadmap_chart(&r, None).title, RESOURCE_PLAN_TITLE);
    }

    #[test]
    fn test_mixed_shapes_flatten_in_key_order() {
        let r = roadmap(json!({
            "Week 1": "Read X",
            "Week 2": ["A", "B"],
            "Week 3": [{"Topic": "SQL", "Resource": "Docs", "Action": "Practice"}]
        }));
        let chart = render_roadmap_chart(&r, Some(Task::Resources));
        let pairs: Vec<_> = chart
            .bars
            .iter()
            .map(|b| (b.label.as_str(), b.text.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Week 1", "Read X"),
                ("Week 2", "A"),
                ("Week 2", "B"),
                ("Week 3", "Topic: SQL\nResource: Docs\nAction: Practice"),
            ]
        );
    }

    #[test]
    fn test_height_scales_with_top_level_keys() {
        let one = render_roadmap_chart(&roadmap(json!({"a": ["x", "y", "z"]})), None);
        let three = render_roadmap_chart(&roadmap(json!({"a": 1, "b": 2, "c": 3})), None);
        assert_eq!(one.height, 430);
        assert_eq!(three.height, 490);
    }

    #[test]
    fn test_lanes_group_bars_under_label() {
        let chart = render_roadmap_chart(&roadmap(json!({"Week 1": ["A", "B"], "Week 2": "C"})), None);
        assert_eq!(
            chart.lanes(),
            vec![("Week 1", vec!["A", "B"]), ("Week 2", vec!["C"])]
        );
    }

    #[test]
    fn test_chart_for_plain_message_is_none() {
        assert!(chart_for_message(&ChatMessage::user("hi")).is_none());
        let with_roadmap = ChatMessage::assistant(
            "plan",
            Some(roadmap(json!({"Week 1": "Read X"}))),
            Some(Task::SkillGap),
        );
        let chart = chart_for_message(&with_roadmap).unwrap();
        assert_eq!(chart.title, CAREER_ROADMAP_TITLE);
    }

    #[test]
    fn test_render_leaves_roadmap_untouched() {
        let r = roadmap(json!({"Week 1": ["Learn Python"]}));
        let before = r.clone();
        let _ = render_roadmap_chart(&r, Some(Task::SkillGap));
        assert_eq!(r, before);
    }
}
