use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roadmap::{Level, Track};
use crate::session::View;

/// Every state change in the system produces an Event.
/// The rendering surface consumes them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    LoggedIn {
        username: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
    ViewChanged {
        view: View,
        at: DateTime<Utc>,
    },
    DurationSelected {
        seconds: u64,
        at: DateTime<Utc>,
    },
    SprintStarted {
        task_name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Display-only update, one per elapsed second of a running sprint.
    Tick {
        remaining_secs: u64,
        fraction: f64,
        at: DateTime<Utc>,
    },
    SprintCancelled {
        task_name: String,
        at: DateTime<Utc>,
    },
    SprintCompleted {
        task_name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    RewardCollected {
        awarded: u64,
        total_credits: u64,
        at: DateTime<Utc>,
    },
    RoadmapGenerated {
        track: Track,
        level: Level,
        weeks: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        view: View,
        username: String,
        credits: u64,
        task_name: String,
        remaining_secs: u64,
        total_secs: u64,
        progress_pct: f64,
        timer_active: bool,
        at: DateTime<Utc>,
    },
}
