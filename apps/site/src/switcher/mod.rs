// Switch orchestrator and the single-threaded event loop that drives it.

pub mod event_loop;
pub mod orchestrator;

pub use event_loop::{run, UiEvent};
pub use orchestrator::SwitchOrchestrator;
