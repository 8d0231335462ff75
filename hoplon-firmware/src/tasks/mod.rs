//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod control;
pub mod panel;

pub use control::control_task;
pub use panel::panel_task;
