use std::sync::Arc;
use std::time::Duration;

use crate::content::Catalog;
use crate::dom::bindings::Binding;

/// Shared, read-only context handed to the orchestrator at construction.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub catalog: Arc<Catalog>,
    pub bindings: &'static [Binding],
    /// Delay between the fade-out and the content swap. Also published to
    /// the stylesheet so both sides use the same duration.
    pub transition: Duration,
}
