//! # Focustask Core Library
//!
//! Core business logic for Focustask, a hierarchical task list paired with
//! a Pomodoro-style work/break timer. The desktop and CLI frontends are
//! thin layers over this library.
//!
//! ## Architecture
//!
//! - **Session engine**: a tick-driven state machine that requires the
//!   caller to invoke `tick()` once per elapsed second -- it performs no
//!   timing of its own
//! - **Progress ledger**: completion bookkeeping (counter mutation and
//!   short/long break rotation)
//! - **Task store**: in-memory tasks and subtasks with whole-record updates
//! - **Config**: TOML-based durations and long-break interval
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: session state machine
//! - [`TaskStore`]: task and subtask records
//! - [`PomodoroConfig`]: duration settings
//! - [`Event`]: transition notifications for the presentation layer

pub mod config;
pub mod error;
pub mod events;
pub mod session;
pub mod task;

pub use config::PomodoroConfig;
pub use error::{ConfigError, CoreError, SessionError};
pub use events::Event;
pub use session::{
    CompletionOutcome, CueAction, ProgressLedger, SessionEngine, SessionMode, SessionState,
    Snapshot,
};
pub use task::{NewSubtask, NewTask, Priority, Subtask, TargetId, Task, TaskStore};
