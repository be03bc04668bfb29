// Mentor engine: prompt construction, reply + roadmap extraction, optional
// translation, and roadmap chart rendering.
// All model calls go through llm_client::TextGenerator.

pub mod chart;
pub mod context;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod reply;
pub mod roadmap;
