use std::sync::Arc;

use crate::config::Config;
use crate::line::ReplySender;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The lookup tables are `static`, so this carries only config and the reply
/// delivery seam.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Reply delivery. Production: `LineReplyClient`; tests: in-memory double.
    pub sender: Arc<dyn ReplySender>,
}
