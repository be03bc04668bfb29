//! Roadmap: the structured plan a model reply may embed as a JSON object.
//!
//! The mapping is stored exactly as parsed so it round-trips through the
//! profile file unchanged. Its dynamic value shapes are classified into
//! [`RoadmapValue`] only where they are consumed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level key (week label or skill) to plan item(s), in the model's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roadmap(Map<String, Value>);

impl Roadmap {
    /// Parses a JSON object. Anything that is not an object is rejected.
    pub fn parse(block: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(block).map(Roadmap)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in document order, classifying each value.
    pub fn entries(&self) -> impl Iterator<Item = (&str, RoadmapValue)> + '_ {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), RoadmapValue::classify(value)))
    }
}

/// A resource-plan step as emitted by the model: `{Topic, Resource, Action}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapStep {
    pub topic: String,
    pub resource: String,
    pub action: String,
}

impl RoadmapStep {
    fn from_object(object: &Map<String, Value>) -> Self {
        let field = |name: &str| object.get(name).map(stringify).unwrap_or_default();
        Self {
            topic: field("Topic"),
            resource: field("Resource"),
            action: field("Action"),
        }
    }

    pub fn display(&self) -> String {
        format!(
            "Topic: {}\nResource: {}\nAction: {}",
            self.topic, self.resource, self.action
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapValue {
    Scalar(String),
    StringList(Vec<String>),
    ObjectList(Vec<RoadmapStep>),
}

impl RoadmapValue {
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                RoadmapValue::ObjectList(
                    items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(RoadmapStep::from_object)
                        .collect(),
                )
            }
            Value::Array(items) => RoadmapValue::StringList(items.iter().map(stringify).collect()),
            other => RoadmapValue::Scalar(stringify(other)),
        }
    }

    /// One display string per leaf item.
    pub fn display_items(&self) -> Vec<String> {
        match self {
            RoadmapValue::Scalar(text) => vec![text.clone()],
            RoadmapValue::StringList(items) => items.clone(),
            RoadmapValue::ObjectList(steps) => steps.iter().map(RoadmapStep::display).collect(),
        }
    }
}

/// Strings render bare; everything else renders as compact JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
