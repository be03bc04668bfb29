use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::profiles::store::ProfileStore;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single logical session. Every action holds this lock for its whole
    /// load -> mutate -> persist cycle, so user actions run one at a time.
    pub session: Arc<Mutex<Session>>,
    pub store: ProfileStore,
    /// Pluggable text generator. Default: the Gemini `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}

impl AppState {
    pub fn new(session: Session, store: ProfileStore, llm: Arc<dyn TextGenerator>, config: Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            store,
            llm,
            config,
        }
    }
}
