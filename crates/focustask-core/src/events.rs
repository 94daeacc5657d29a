//! Session transition events.
//!
//! Every state change produces an [`Event`]. The presentation layer renders
//! them; `SessionCompleted` is the completion notification contract for
//! user feedback ("Completed" banner and the like).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionMode;
use crate::task::TargetId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A task or subtask was bound to the idle session.
    TargetBound {
        target: TargetId,
        at: DateTime<Utc>,
    },
    SessionStarted {
        mode: SessionMode,
        target: TargetId,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        mode: SessionMode,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    /// The session was cancelled; elapsed time is discarded, mode and
    /// counters are untouched.
    SessionCancelled {
        mode: SessionMode,
        at: DateTime<Utc>,
    },
    /// The configured duration was reached. `counter_updated` is false for
    /// break completions and for work completions whose target vanished
    /// from the store mid-session.
    SessionCompleted {
        completed_mode: SessionMode,
        target: TargetId,
        next_mode: SessionMode,
        counter_updated: bool,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = Event::SessionCompleted {
            completed_mode: SessionMode::Work,
            target: TargetId::Task(1),
            next_mode: SessionMode::ShortBreak,
            counter_updated: true,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "session_completed");
        assert_eq!(json["completed_mode"], "work");
        assert_eq!(json["next_mode"], "short_break");
    }
}
