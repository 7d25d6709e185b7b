use std::sync::Arc;

use kotoba_engine::VocabEngine;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<VocabEngine>,
}

impl AppState {
    #[must_use]
    pub fn new(engine: VocabEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
