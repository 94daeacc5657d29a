//! Session state machine.
//!
//! The engine is purely reactive -- it owns no threads and reads no
//! clocks. An external scheduler calls `tick()` once per elapsed second
//! while the session is running, which makes the machine testable without
//! real delays.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ... -> Idle
//! ```
//!
//! Mode (Work / ShortBreak / LongBreak) is orthogonal to the
//! Idle/Running/Paused status and persists across it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = SessionEngine::new(config);
//! engine.bind_target(TargetId::Task(id), &store)?;
//! engine.start(&store)?;
//! // Once per second:
//! engine.tick(&mut store); // Returns Some(Event) when the session completes
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PomodoroConfig;
use crate::error::SessionError;
use crate::events::Event;
use crate::task::{TargetId, TaskStore};

use super::progress::ProgressLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Paused,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Work,
    ShortBreak,
    LongBreak,
}

/// Read-only render model for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: SessionMode,
    pub state: SessionState,
    pub elapsed_secs: u32,
    pub duration_secs: u32,
    pub bound_target: Option<TargetId>,
    pub completed_work_count: u32,
    /// Whether the audible ticking cue should currently be playing.
    pub ticking: bool,
}

/// Core session engine.
///
/// Holds the current mode, elapsed-time counter, running status and the
/// identity of the task or subtask being timed. Completion bookkeeping is
/// delegated to the [`ProgressLedger`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEngine {
    config: PomodoroConfig,
    mode: SessionMode,
    state: SessionState,
    elapsed_secs: u32,
    /// Duration captured at the Idle -> Running edge. Config updates made
    /// while a session is underway apply from the next start.
    current_duration_secs: u32,
    bound_target: Option<TargetId>,
    ledger: ProgressLedger,
}

impl SessionEngine {
    /// Create an idle engine in Work mode with no bound target.
    pub fn new(config: PomodoroConfig) -> Self {
        let current_duration_secs = config.duration_for(SessionMode::Work);
        Self {
            config,
            mode: SessionMode::Work,
            state: SessionState::Idle,
            elapsed_secs: 0,
            current_duration_secs,
            bound_target: None,
            ledger: ProgressLedger::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn bound_target(&self) -> Option<TargetId> {
        self.bound_target
    }

    pub fn completed_work_count(&self) -> u32 {
        self.ledger.completed_work_count()
    }

    pub fn config(&self) -> &PomodoroConfig {
        &self.config
    }

    /// Duration the current session runs against. While Idle this tracks
    /// the latest config; once started it is frozen for the session.
    pub fn duration_secs(&self) -> u32 {
        match self.state {
            SessionState::Idle => self.config.duration_for(self.mode),
            _ => self.current_duration_secs,
        }
    }

    /// 0.0 .. 1.0 progress within the current session.
    pub fn progress(&self) -> f64 {
        let total = self.duration_secs();
        if total == 0 {
            return 0.0;
        }
        self.elapsed_secs as f64 / total as f64
    }

    /// Build a full state snapshot for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            state: self.state,
            elapsed_secs: self.elapsed_secs,
            duration_secs: self.duration_secs(),
            bound_target: self.bound_target,
            completed_work_count: self.ledger.completed_work_count(),
            ticking: self.state == SessionState::Running,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Bind the session to a task or subtask. Only allowed while Idle.
    pub fn bind_target(
        &mut self,
        target: TargetId,
        store: &TaskStore,
    ) -> Result<Event, SessionError> {
        if self.state != SessionState::Idle {
            return Err(SessionError::InvalidBinding { state: self.state });
        }
        if store.target_progress(target).is_none() {
            return Err(SessionError::UnknownTarget { target });
        }
        self.bound_target = Some(target);
        Ok(Event::TargetBound {
            target,
            at: Utc::now(),
        })
    }

    /// Start (Idle) or resume (Paused) the session.
    ///
    /// Returns `Ok(None)` when already running. For a Work session the
    /// bound target must still have pomodoros left; a fully-completed
    /// target is rejected with `TargetAlreadyComplete` and the session
    /// stays Idle.
    pub fn start(&mut self, store: &TaskStore) -> Result<Option<Event>, SessionError> {
        if self.state == SessionState::Running {
            return Ok(None);
        }
        let target = self.bound_target.ok_or(SessionError::NoTargetBound)?;
        let (completed, required) = store
            .target_progress(target)
            .ok_or(SessionError::UnknownTarget { target })?;
        if self.mode == SessionMode::Work && completed >= required {
            return Err(SessionError::TargetAlreadyComplete { target });
        }

        let resumed = self.state == SessionState::Paused;
        self.state = SessionState::Running;
        if resumed {
            return Ok(Some(Event::SessionResumed {
                mode: self.mode,
                elapsed_secs: self.elapsed_secs,
                at: Utc::now(),
            }));
        }
        // Fresh session: freeze the duration for its whole lifetime.
        self.current_duration_secs = self.config.duration_for(self.mode);
        self.elapsed_secs = 0;
        Ok(Some(Event::SessionStarted {
            mode: self.mode,
            target,
            duration_secs: self.current_duration_secs,
            at: Utc::now(),
        }))
    }

    /// Running -> Paused. No-op (None) when already Paused or Idle.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                Some(Event::SessionPaused {
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Running|Paused -> Idle. Discards elapsed time; mode and counters
    /// are untouched. No-op (None) when Idle.
    pub fn cancel(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Running | SessionState::Paused => {
                self.state = SessionState::Idle;
                self.elapsed_secs = 0;
                Some(Event::SessionCancelled {
                    mode: self.mode,
                    at: Utc::now(),
                })
            }
            SessionState::Idle => None,
        }
    }

    /// Advance the session by one second of wall-clock time.
    ///
    /// Only meaningful while Running. When elapsed time reaches the
    /// session duration, the completion settles in the same call: elapsed
    /// resets to 0, the session goes Idle, the ledger mutates the target's
    /// counter and picks the next mode. The timer never auto-continues
    /// into the next mode.
    pub fn tick(&mut self, store: &mut TaskStore) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        self.elapsed_secs += 1;
        if self.elapsed_secs < self.current_duration_secs {
            return None;
        }

        let completed_mode = self.mode;
        // Invariant: Running implies a bound target.
        let target = self.bound_target?;
        self.elapsed_secs = 0;
        self.state = SessionState::Idle;
        let outcome =
            self.ledger
                .apply_completion(completed_mode, target, &self.config, store);
        self.mode = outcome.next_mode;
        Some(Event::SessionCompleted {
            completed_mode,
            target,
            next_mode: outcome.next_mode,
            counter_updated: outcome.counter_updated,
            at: Utc::now(),
        })
    }

    /// Stage a new configuration. A session that is Running or Paused
    /// keeps the duration captured at its start.
    pub fn set_config(&mut self, config: PomodoroConfig) {
        self.config = config;
    }
}
