use std::sync::Arc;

use crate::engine::Engine;

/// Shared application state
///
/// The engine is built once before the server starts and only ever read
/// afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    /// Wraps a built engine for sharing across request handlers
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
