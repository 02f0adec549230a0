use clap::Subcommand;
use codedaily_core::machine::Action;
use codedaily_core::session::format_clock;
use codedaily_core::upgrades;

use super::common;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a focus sprint for a task
    Start {
        /// What you are working on
        task: String,
        /// Sprint length in seconds (600, 1500 or 3600)
        #[arg(long)]
        duration: Option<u64>,
    },
    /// Pause or resume the running sprint
    Toggle,
    /// Abandon the running sprint (no credits awarded)
    Cancel,
    /// Pick the sprint length for the next start
    Select {
        /// Duration in seconds (600, 1500 or 3600)
        seconds: u64,
    },
    /// Poll the clock and print the current timer state as JSON
    Status,
}

fn ensure_selectable(credits: u64, seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    if upgrades::is_duration_unlocked(credits, seconds) {
        return Ok(());
    }
    let known = upgrades::duration_options(credits)
        .iter()
        .any(|opt| opt.seconds == seconds);
    if known {
        Err(format!(
            "{} is locked: {} more credits needed for Deep Focus",
            format_clock(seconds),
            upgrades::credits_to_deep_focus(credits)
        )
        .into())
    } else {
        Err(format!("unknown duration {seconds}s (pick 600, 1500 or 3600)").into())
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::load_app()?;

    let events = match action {
        TimerAction::Start { task, duration } => {
            let mut events = Vec::new();
            if let Some(seconds) = duration {
                ensure_selectable(app.session().credits, seconds)?;
                events.extend(app.dispatch(Action::SelectDuration { seconds })?);
            }
            let started = app.dispatch(Action::StartTask { name: task })?;
            if started.is_empty() {
                return Err("task name must not be empty".into());
            }
            events.extend(started);
            events
        }
        TimerAction::Toggle => app.dispatch(Action::TogglePause)?,
        TimerAction::Cancel => app.dispatch(Action::CancelSprint)?,
        TimerAction::Select { seconds } => {
            ensure_selectable(app.session().credits, seconds)?;
            app.dispatch(Action::SelectDuration { seconds })?
        }
        TimerAction::Status => app.poll(common::now_ms())?,
    };

    common::print_events_and_snapshot(&events, &app)?;
    common::save_app(&app)?;
    Ok(())
}
