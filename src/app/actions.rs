//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never touches Zellij or the
//! worker directly; it returns a list of [`Action`]s and the plugin runtime
//! executes them in order.
//!
//! # Example
//!
//! ```
//! use jobfinder::app::Action;
//! use jobfinder::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_jobs())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a request to the background worker that owns the backend.
    ///
    /// Every backend interaction (job loads, submissions, vacancy posts,
    /// preference writes) goes through this action.
    PostToWorker(WorkerMessage),
}
