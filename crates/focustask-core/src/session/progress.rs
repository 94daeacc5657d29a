//! Completion bookkeeping.
//!
//! The ledger reacts to a finished session: it bumps the bound record's
//! counter through the store and decides which mode comes next. Long-break
//! rotation is global -- the interval check runs against the ledger's own
//! work count, independent of which task produced the completion.

use serde::{Deserialize, Serialize};

use crate::config::PomodoroConfig;
use crate::task::{TargetId, TaskStore};

use super::SessionMode;

/// What a completion did and where the session goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub next_mode: SessionMode,
    /// False for break completions, and for work completions whose target
    /// was deleted from the store before the counter could be bumped.
    pub counter_updated: bool,
}

/// Running count of completed work sessions, driving break rotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressLedger {
    completed_work_count: u32,
}

impl ProgressLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed_work_count(&self) -> u32 {
        self.completed_work_count
    }

    /// Settle a completion event.
    ///
    /// Work: increment exactly one counter (the bound subtask's, else the
    /// bound task's), advance the work count, and rotate into a long break
    /// every `long_break_interval`-th completion. A stale target is skipped
    /// silently; the mode still advances.
    ///
    /// Breaks: no mutation, next mode is always Work.
    pub fn apply_completion(
        &mut self,
        completed_mode: SessionMode,
        target: TargetId,
        config: &PomodoroConfig,
        store: &mut TaskStore,
    ) -> CompletionOutcome {
        match completed_mode {
            SessionMode::Work => {
                let counter_updated = bump_counter(store, target);
                self.completed_work_count += 1;
                let interval = config.long_break_interval.max(1);
                let next_mode = if self.completed_work_count % interval == 0 {
                    SessionMode::LongBreak
                } else {
                    SessionMode::ShortBreak
                };
                CompletionOutcome {
                    next_mode,
                    counter_updated,
                }
            }
            SessionMode::ShortBreak | SessionMode::LongBreak => CompletionOutcome {
                next_mode: SessionMode::Work,
                counter_updated: false,
            },
        }
    }
}

/// Whole-record update through the store. Returns false when the target no
/// longer exists (deleted mid-session).
fn bump_counter(store: &mut TaskStore, target: TargetId) -> bool {
    match target {
        TargetId::Task(id) => match store.find_task(id) {
            Some(task) => {
                let mut updated = task.clone();
                updated.pomodoros_completed += 1;
                store.update_task(updated)
            }
            None => false,
        },
        TargetId::Subtask(id) => match store.find_subtask(id) {
            Some(subtask) => {
                let mut updated = subtask.clone();
                updated.pomodoros_completed += 1;
                store.update_subtask(updated)
            }
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{NewSubtask, NewTask};

    fn config_with_interval(interval: u32) -> PomodoroConfig {
        PomodoroConfig {
            long_break_interval: interval,
            ..PomodoroConfig::default()
        }
    }

    fn seed_task(store: &mut TaskStore, required: u32) -> u64 {
        store.create_task(NewTask {
            title: "task".into(),
            pomodoros_required: required,
            ..NewTask::default()
        })
    }

    #[test]
    fn rotation_law_interval_four() {
        let mut store = TaskStore::new();
        let id = seed_task(&mut store, 100);
        let config = config_with_interval(4);
        let mut ledger = ProgressLedger::new();

        let expected = [
            SessionMode::ShortBreak,
            SessionMode::ShortBreak,
            SessionMode::ShortBreak,
            SessionMode::LongBreak,
            SessionMode::ShortBreak,
            SessionMode::ShortBreak,
            SessionMode::ShortBreak,
            SessionMode::LongBreak,
        ];
        for (i, want) in expected.iter().enumerate() {
            let outcome = ledger.apply_completion(
                SessionMode::Work,
                TargetId::Task(id),
                &config,
                &mut store,
            );
            assert_eq!(outcome.next_mode, *want, "completion #{}", i + 1);
        }
        assert_eq!(ledger.completed_work_count(), 8);
    }

    #[test]
    fn rotation_is_global_across_tasks() {
        let mut store = TaskStore::new();
        let a = seed_task(&mut store, 10);
        let b = seed_task(&mut store, 10);
        let config = config_with_interval(2);
        let mut ledger = ProgressLedger::new();

        let first =
            ledger.apply_completion(SessionMode::Work, TargetId::Task(a), &config, &mut store);
        assert_eq!(first.next_mode, SessionMode::ShortBreak);
        // Second completion comes from a different task; the interval
        // still counts it.
        let second =
            ledger.apply_completion(SessionMode::Work, TargetId::Task(b), &config, &mut store);
        assert_eq!(second.next_mode, SessionMode::LongBreak);
    }

    #[test]
    fn work_completion_on_subtask_leaves_parent_counter() {
        let mut store = TaskStore::new();
        let task_id = seed_task(&mut store, 5);
        let sub_id = store
            .create_subtask(
                task_id,
                NewSubtask {
                    title: "sub".into(),
                    pomodoros_required: 3,
                    ..NewSubtask::default()
                },
            )
            .unwrap();
        let config = config_with_interval(4);
        let mut ledger = ProgressLedger::new();

        let outcome = ledger.apply_completion(
            SessionMode::Work,
            TargetId::Subtask(sub_id),
            &config,
            &mut store,
        );
        assert!(outcome.counter_updated);
        assert_eq!(store.find_subtask(sub_id).unwrap().pomodoros_completed, 1);
        assert_eq!(store.find_task(task_id).unwrap().pomodoros_completed, 0);
    }

    #[test]
    fn break_completion_mutates_nothing() {
        let mut store = TaskStore::new();
        let id = seed_task(&mut store, 5);
        let config = config_with_interval(4);
        let mut ledger = ProgressLedger::new();

        for mode in [SessionMode::ShortBreak, SessionMode::LongBreak] {
            let outcome =
                ledger.apply_completion(mode, TargetId::Task(id), &config, &mut store);
            assert_eq!(outcome.next_mode, SessionMode::Work);
            assert!(!outcome.counter_updated);
        }
        assert_eq!(store.find_task(id).unwrap().pomodoros_completed, 0);
        assert_eq!(ledger.completed_work_count(), 0);
    }

    #[test]
    fn stale_target_skips_mutation_but_advances_mode() {
        let mut store = TaskStore::new();
        let id = seed_task(&mut store, 5);
        store.delete_task(id);
        let config = config_with_interval(4);
        let mut ledger = ProgressLedger::new();

        let outcome =
            ledger.apply_completion(SessionMode::Work, TargetId::Task(id), &config, &mut store);
        assert!(!outcome.counter_updated);
        assert_eq!(outcome.next_mode, SessionMode::ShortBreak);
        assert_eq!(ledger.completed_work_count(), 1);
    }
}
