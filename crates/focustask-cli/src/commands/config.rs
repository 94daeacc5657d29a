use clap::Subcommand;
use focustask_core::PomodoroConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as JSON
    Show,
    /// Update one or more settings as a group
    Set {
        /// Work session duration in seconds
        #[arg(long)]
        work: Option<u32>,
        /// Short break duration in seconds
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break duration in seconds
        #[arg(long)]
        long_break: Option<u32>,
        /// Completed work sessions between long breaks
        #[arg(long)]
        interval: Option<u32>,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = PomodoroConfig::load_or_default();
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Set {
            work,
            short_break,
            long_break,
            interval,
        } => {
            let mut config = PomodoroConfig::load_or_default();
            if let Some(v) = work {
                config.work_duration_secs = v;
            }
            if let Some(v) = short_break {
                config.short_break_secs = v;
            }
            if let Some(v) = long_break {
                config.long_break_secs = v;
            }
            if let Some(v) = interval {
                config.long_break_interval = v;
            }
            config.validate()?;
            config.save()?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = PomodoroConfig::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
