//! Scripted session runner.
//!
//! Builds an in-memory task, binds it to the session engine and plays the
//! external tick scheduler: one `tick()` per wall-clock second while the
//! session runs. Events are printed as pretty JSON; the ticking-cue
//! contract is surfaced as stderr lines in place of real audio.

use clap::Args;
use std::time::Duration;

use focustask_core::{
    CueAction, Event, NewSubtask, NewTask, PomodoroConfig, SessionEngine, SessionMode,
    SessionState, TargetId, TaskStore,
};

#[derive(Args)]
pub struct RunArgs {
    /// Task title
    pub title: String,
    /// Pomodoros required for the task
    #[arg(long, default_value = "1")]
    pub pomodoros: u32,
    /// Optional subtask title; when set, the session is bound to the
    /// subtask instead of the task
    #[arg(long)]
    pub subtask: Option<String>,
    /// Pomodoros required for the subtask
    #[arg(long, default_value = "1")]
    pub subtask_pomodoros: u32,
    /// Tick without sleeping (for scripted runs)
    #[arg(long)]
    pub turbo: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = PomodoroConfig::load_or_default();
    config.validate()?;

    let mut store = TaskStore::new();
    let task_id = store.create_task(NewTask {
        title: args.title,
        pomodoros_required: args.pomodoros,
        ..NewTask::default()
    });
    let target = match args.subtask {
        Some(title) => {
            let sub_id = store
                .create_subtask(
                    task_id,
                    NewSubtask {
                        title,
                        pomodoros_required: args.subtask_pomodoros,
                        ..NewSubtask::default()
                    },
                )
                .ok_or("failed to create subtask")?;
            TargetId::Subtask(sub_id)
        }
        None => TargetId::Task(task_id),
    };

    let mut engine = SessionEngine::new(config);
    print_event(&engine.bind_target(target, &store)?)?;

    let mut sessions_completed = 0u32;
    loop {
        let before = engine.state();
        match engine.start(&store) {
            Ok(Some(event)) => print_event(&event)?,
            Ok(None) => {}
            Err(e) if sessions_completed == 0 => return Err(e.into()),
            Err(e) => {
                // Target exhausted between sessions: we are done.
                eprintln!("{e}");
                break;
            }
        }
        print_cue(before, engine.state());

        // Tick scheduler: at most one tick per elapsed second.
        let completed_mode = loop {
            if !args.turbo {
                std::thread::sleep(Duration::from_secs(1));
            }
            let before = engine.state();
            if let Some(event) = engine.tick(&mut store) {
                print_cue(before, engine.state());
                let mode = match &event {
                    Event::SessionCompleted { completed_mode, .. } => *completed_mode,
                    _ => unreachable!("tick only emits completions"),
                };
                print_event(&event)?;
                break mode;
            }
        };

        sessions_completed += 1;
        if completed_mode == SessionMode::Work {
            let done = store
                .target_progress(target)
                .map(|(completed, required)| completed >= required)
                .unwrap_or(true);
            if done {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
                break;
            }
        }
    }
    Ok(())
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

fn print_cue(before: SessionState, after: SessionState) {
    match CueAction::for_transition(before, after) {
        Some(CueAction::Start) => eprintln!("[cue] ticking starts"),
        Some(CueAction::Stop) => eprintln!("[cue] ticking stops"),
        None => {}
    }
}
