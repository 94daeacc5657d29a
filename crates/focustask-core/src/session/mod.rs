//! Session state machine and completion bookkeeping.

mod cue;
mod engine;
mod progress;

pub use cue::CueAction;
pub use engine::{SessionEngine, SessionMode, SessionState, Snapshot};
pub use progress::{CompletionOutcome, ProgressLedger};
