use serde::{Deserialize, Serialize};

use crate::Action;

/// The named pipe the daemon listens on.
pub const PIPE_NAME: &str = r"\\.\pipe\veil";

/// A request from the CLI to the daemon, sent as one JSON line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Restore every modified window and shut down.
    Stop,
    /// Report how many windows are currently modified.
    Status,
    /// Run an action against the foreground window.
    Action { action: Action },
}

/// The daemon's reply to a [`Command`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: ResponseStatus,
    /// Human-readable detail, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of modified windows, present on `Status` replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_windows: Option<usize>,
}

/// Outcome of a daemon command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
            modified_windows: None,
        }
    }

    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            modified_windows: None,
        }
    }

    /// A `Status` reply carrying the modified-window count.
    pub fn status(modified_windows: usize) -> Self {
        Self {
            modified_windows: Some(modified_windows),
            ..Self::ok()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}
