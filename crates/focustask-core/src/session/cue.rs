//! Ticking-cue effect contract.
//!
//! An audible ticking loop plays exactly while the session is Running. The
//! core never touches audio; boundary layers fold state edges into cue
//! actions and drive whatever playback they have. `Stop` also implies
//! rewinding the sound to its beginning.

use super::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueAction {
    /// Begin the looping ticking sound.
    Start,
    /// Stop the sound and rewind it.
    Stop,
}

impl CueAction {
    /// Cue action for a state edge, if the edge crosses Running.
    pub fn for_transition(before: SessionState, after: SessionState) -> Option<CueAction> {
        let was_running = before == SessionState::Running;
        let is_running = after == SessionState::Running;
        match (was_running, is_running) {
            (false, true) => Some(CueAction::Start),
            (true, false) => Some(CueAction::Stop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_starts_on_entering_running() {
        assert_eq!(
            CueAction::for_transition(SessionState::Idle, SessionState::Running),
            Some(CueAction::Start)
        );
        assert_eq!(
            CueAction::for_transition(SessionState::Paused, SessionState::Running),
            Some(CueAction::Start)
        );
    }

    #[test]
    fn cue_stops_on_leaving_running_for_any_reason() {
        assert_eq!(
            CueAction::for_transition(SessionState::Running, SessionState::Paused),
            Some(CueAction::Stop)
        );
        assert_eq!(
            CueAction::for_transition(SessionState::Running, SessionState::Idle),
            Some(CueAction::Stop)
        );
    }

    #[test]
    fn no_cue_without_a_running_edge() {
        assert_eq!(
            CueAction::for_transition(SessionState::Idle, SessionState::Paused),
            None
        );
        assert_eq!(
            CueAction::for_transition(SessionState::Running, SessionState::Running),
            None
        );
        assert_eq!(
            CueAction::for_transition(SessionState::Idle, SessionState::Idle),
            None
        );
    }
}
