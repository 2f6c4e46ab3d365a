// Locale state, flat translations and the toggle indicator.
// The switch orchestrator is the only caller that mutates any of them.

pub mod applier;
pub mod store;
pub mod toggle;
