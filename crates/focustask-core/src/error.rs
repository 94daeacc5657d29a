//! Core error types for focustask-core.
//!
//! Session commands fail synchronously at the offending call; nothing is
//! retried. A completion whose target vanished from the store is not an
//! error -- it is reported as `counter_updated: false` on the completion
//! event.

use std::path::PathBuf;
use thiserror::Error;

use crate::session::SessionState;
use crate::task::TargetId;

/// Errors raised by session commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Attempt to bind or rebind a target while a session is active.
    #[error("cannot bind a target while the session is {state}")]
    InvalidBinding { state: SessionState },

    /// `start()` called with no bound target.
    #[error("no task or subtask is bound to the session")]
    NoTargetBound,

    /// The bound target does not resolve in the task store.
    #[error("{target} does not exist in the task store")]
    UnknownTarget { target: TargetId },

    /// The bound target already reached its required pomodoro count.
    #[error("{target} already has all required pomodoros completed")]
    TargetAlreadyComplete { target: TargetId },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A duration or interval failed validation.
    #[error("invalid configuration value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// Failed to load configuration from disk.
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration to disk.
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Core error type for focustask-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
