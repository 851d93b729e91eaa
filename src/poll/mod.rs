//! Polling: the refresh timers and the request orchestrator.
//!
//! - [`scheduler`]: four fixed-interval timers ([`Refresh`], [`Scheduler`])
//! - [`orchestrator`]: window computation, request dispatch and completion
//!   handling ([`Orchestrator`], [`Completion`], [`apply_completion`])

pub mod orchestrator;
pub mod scheduler;

pub use orchestrator::{apply_completion, Completion, Orchestrator};
pub use scheduler::{Refresh, Scheduler};
