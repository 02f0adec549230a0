//! Session state and the view model handed to renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::events::Event;
use crate::roadmap::{Level, Track, WeekBlock};
use crate::storage::store::{self, ProfileStore};
use crate::storage::Config;
use crate::timer::CountdownTimer;

/// Credits awarded for one completed sprint. Fixed contract, not config.
pub const REWARD_CREDITS: u64 = 10;

/// The single active screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Onboarding,
    Hub,
    Input,
    Timer,
    Completed,
    /// The upgrades screen.
    Roadmap,
    AiRoadmap,
}

impl View {
    /// Parse a view by its wire name (`"hub"`, `"aiRoadmap"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "onboarding" => Some(View::Onboarding),
            "hub" => Some(View::Hub),
            "input" => Some(View::Input),
            "timer" => Some(View::Timer),
            "completed" => Some(View::Completed),
            "roadmap" => Some(View::Roadmap),
            "aiRoadmap" => Some(View::AiRoadmap),
            _ => None,
        }
    }
}

/// Parameters and output of the last roadmap generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapState {
    /// None until the user generates a plan.
    pub track: Option<Track>,
    pub level: Option<Level>,
    pub weeks: u32,
    pub plan: Vec<WeekBlock>,
}

impl RoadmapState {
    fn with_default_weeks(weeks: u32) -> Self {
        Self {
            track: None,
            level: None,
            weeks,
            plan: Vec::new(),
        }
    }
}

/// The whole application state.
///
/// Username and credits are mirrored from the profile store; everything else
/// is ephemeral and resets to defaults when a session is loaded fresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub view: View,
    pub username: String,
    pub credits: u64,
    pub task_name: String,
    pub duration_secs: u64,
    pub selected_duration_secs: u64,
    pub time_left_secs: u64,
    pub timer: CountdownTimer,
    /// When the running sprint was started, for history records.
    #[serde(default)]
    pub sprint_started_at: Option<DateTime<Utc>>,
    pub roadmap: RoadmapState,
}

impl Session {
    /// A fresh session with nothing persisted: onboarding required.
    pub fn new() -> Self {
        let config = Config::default();
        Self::with_profile(None, 0, &config)
    }

    /// Build a session from the persisted username/credits. Everything
    /// else resets to defaults on load.
    pub fn load(store: &dyn ProfileStore, config: &Config) -> Result<Self, StoreError> {
        let username = store::load_username(store)?;
        let credits = store::load_credits(store)?;
        Ok(Self::with_profile(username, credits, config))
    }

    fn with_profile(username: Option<String>, credits: u64, config: &Config) -> Self {
        let view = if username.is_some() {
            View::Hub
        } else {
            View::Onboarding
        };
        let default_duration = config.timer.default_duration_secs;
        Self {
            view,
            username: username.unwrap_or_default(),
            credits,
            task_name: String::new(),
            duration_secs: default_duration,
            selected_duration_secs: default_duration,
            time_left_secs: default_duration,
            timer: CountdownTimer::new(),
            sprint_started_at: None,
            roadmap: RoadmapState::with_default_weeks(config.roadmap.default_weeks),
        }
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.is_running()
    }

    /// 0.0 .. 100.0 completion of the current sprint.
    pub fn progress_pct(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        (self.duration_secs - self.time_left_secs) as f64 / self.duration_secs as f64 * 100.0
    }

    /// Build a full state snapshot event for the rendering surface.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            view: self.view,
            username: self.username.clone(),
            credits: self.credits,
            task_name: self.task_name.clone(),
            remaining_secs: self.time_left_secs,
            total_secs: self.duration_secs,
            progress_pct: self.progress_pct(),
            timer_active: self.is_timer_active(),
            at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as `MM:SS` for timer displays.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
