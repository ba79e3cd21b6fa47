//! Authentication actions.
//!
//! Actions are **values**, not execution. The state machine returns them
//! alongside the new snapshot, and the controller interprets them: writing
//! storage, surfacing notifications, scheduling or cancelling timers. The
//! machine itself never performs I/O.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Severity attached to a [`AuthAction::Log`] action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Developer-level detail.
    Debug,
    /// Normal lifecycle progress.
    Info,
    /// Recoverable anomaly (e.g. a rejected transition).
    Warn,
    /// A failure the user will see.
    Error,
}

impl LogLevel {
    /// Level name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Side effect requested by a transition, executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthAction {
    /// Persist the session (token and address) to extension storage.
    SaveSession,

    /// Remove any persisted session from extension storage.
    ClearSession,

    /// Tell the UI that authentication completed.
    NotifyConnected,

    /// Tell the UI that the session ended.
    NotifyDisconnected,

    /// Surface an error to the user.
    NotifyError {
        /// Message to display, taken verbatim from the triggering event.
        error: String,
    },

    /// Write an audit log entry.
    Log {
        /// Log line.
        message: String,
        /// Severity.
        level: LogLevel,
    },

    /// Schedule a timeout; on expiry the controller must feed
    /// [`AuthEvent::Timeout`](crate::AuthEvent::Timeout) back in.
    StartTimeout {
        /// How long to wait before firing.
        duration: Duration,
    },

    /// Cancel the currently scheduled timeout, if any.
    CancelTimeout,
}
