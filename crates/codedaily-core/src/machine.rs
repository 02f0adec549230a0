//! Application state machine.
//!
//! Reducer-style: an [`Action`] is dispatched against the owned [`Session`]
//! with the profile store injected, and every dispatch returns the events it
//! produced. The rendering surface is re-invoked by the caller after each
//! dispatch.
//!
//! Invalid input (empty trimmed names) is a no-op that keeps the current
//! view; there is no fatal path in dispatch. Any transition away from the
//! timer view stops the countdown, so a stale tick can never mutate a
//! session that has moved on.

use chrono::Utc;

use crate::error::Result;
use crate::events::Event;
use crate::roadmap::{self, Level, Track};
use crate::session::{Session, View, REWARD_CREDITS};
use crate::storage::store::{self, ProfileStore, USERNAME_KEY};

/// Fallback roadmap length when the weeks input is absent or unparsable.
pub const DEFAULT_WEEKS: u32 = 8;

/// Every user-facing trigger the core accepts from the UI layer.
#[derive(Debug, Clone)]
pub enum Action {
    SubmitLogin { name: String },
    Logout,
    Navigate { view: View },
    SelectDuration { seconds: u64 },
    StartTask { name: String },
    TogglePause,
    CancelSprint,
    CollectReward,
    GenerateRoadmap {
        track: String,
        level: String,
        weeks_raw: Option<String>,
    },
}

/// The state machine: a session plus the store its scalars persist to.
pub struct App<S: ProfileStore> {
    session: Session,
    store: S,
}

impl<S: ProfileStore> App<S> {
    pub fn new(session: Session, store: S) -> Self {
        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear down into the session and store.
    pub fn into_parts(self) -> (Session, S) {
        (self.session, self.store)
    }

    /// Apply one action. Returns the events produced; an empty vec means
    /// the input failed validation and nothing changed.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        match action {
            Action::SubmitLogin { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Ok(events);
                }
                self.store.set(USERNAME_KEY, name)?;
                self.session.username = name.to_string();
                events.push(Event::LoggedIn {
                    username: name.to_string(),
                    at: Utc::now(),
                });
                self.set_view(View::Hub, &mut events);
            }

            Action::Logout => {
                self.store.remove(USERNAME_KEY)?;
                self.session.username.clear();
                events.push(Event::LoggedOut { at: Utc::now() });
                self.set_view(View::Onboarding, &mut events);
            }

            Action::Navigate { view } => {
                self.set_view(view, &mut events);
            }

            Action::SelectDuration { seconds } => {
                self.session.selected_duration_secs = seconds;
                events.push(Event::DurationSelected {
                    seconds,
                    at: Utc::now(),
                });
            }

            Action::StartTask { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Ok(events);
                }
                let duration = self.session.selected_duration_secs;
                self.session.task_name = name.to_string();
                self.session.duration_secs = duration;
                self.session.time_left_secs = duration;
                self.session.sprint_started_at = Some(Utc::now());
                self.session.timer.start(duration, now_ms());
                events.push(Event::SprintStarted {
                    task_name: name.to_string(),
                    duration_secs: duration,
                    at: Utc::now(),
                });
                self.set_view(View::Timer, &mut events);
            }

            Action::TogglePause => {
                if self.session.view != View::Timer {
                    return Ok(events);
                }
                if self.session.timer.is_running() {
                    self.session.timer.pause();
                    events.push(Event::TimerPaused {
                        remaining_secs: self.session.time_left_secs,
                        at: Utc::now(),
                    });
                } else {
                    self.session.timer.resume(now_ms());
                    events.push(Event::TimerResumed {
                        remaining_secs: self.session.time_left_secs,
                        at: Utc::now(),
                    });
                }
            }

            Action::CancelSprint => {
                if self.session.view != View::Timer {
                    return Ok(events);
                }
                self.session.timer.stop();
                let task = std::mem::take(&mut self.session.task_name);
                self.session.sprint_started_at = None;
                events.push(Event::SprintCancelled {
                    task_name: task,
                    at: Utc::now(),
                });
                self.set_view(View::Hub, &mut events);
            }

            Action::CollectReward => {
                if self.session.view != View::Completed {
                    return Ok(events);
                }
                self.session.credits += REWARD_CREDITS;
                store::save_credits(&mut self.store, self.session.credits)?;
                self.session.task_name.clear();
                events.push(Event::RewardCollected {
                    awarded: REWARD_CREDITS,
                    total_credits: self.session.credits,
                    at: Utc::now(),
                });
                self.set_view(View::Hub, &mut events);
            }

            Action::GenerateRoadmap {
                track,
                level,
                weeks_raw,
            } => {
                let weeks = weeks_raw
                    .as_deref()
                    .and_then(|w| w.trim().parse::<u32>().ok())
                    .unwrap_or(DEFAULT_WEEKS);
                let track = Track::from_str_lossy(&track);
                let level = Level::from_str_lossy(&level);
                let plan = roadmap::generate(track, level, weeks)?;
                self.session.roadmap.track = Some(track);
                self.session.roadmap.level = Some(level);
                self.session.roadmap.weeks = weeks;
                self.session.roadmap.plan = plan;
                events.push(Event::RoadmapGenerated {
                    track,
                    level,
                    weeks,
                    at: Utc::now(),
                });
                self.set_view(View::AiRoadmap, &mut events);
            }
        }
        Ok(events)
    }

    /// Drive the countdown from the wall clock. Emits one `Tick` per
    /// elapsed second; expiry moves the session to the completed view.
    pub fn poll(&mut self, now_ms: u64) -> Result<Vec<Event>> {
        if self.session.view != View::Timer {
            return Ok(Vec::new());
        }
        let ticks = self.session.timer.poll(now_ms);
        Ok(self.apply_ticks(&ticks))
    }

    /// Apply exactly one logical second, for deterministic callers.
    pub fn tick(&mut self) -> Result<Vec<Event>> {
        if self.session.view != View::Timer {
            return Ok(Vec::new());
        }
        let ticks: Vec<_> = self.session.timer.tick().into_iter().collect();
        Ok(self.apply_ticks(&ticks))
    }

    fn apply_ticks(&mut self, ticks: &[crate::timer::TimerTick]) -> Vec<Event> {
        let mut events = Vec::new();
        for tick in ticks {
            self.session.time_left_secs = tick.remaining_secs;
            events.push(Event::Tick {
                remaining_secs: tick.remaining_secs,
                fraction: tick.fraction,
                at: Utc::now(),
            });
            if tick.expired {
                events.push(Event::SprintCompleted {
                    task_name: self.session.task_name.clone(),
                    duration_secs: self.session.duration_secs,
                    at: Utc::now(),
                });
                self.set_view(View::Completed, &mut events);
                break;
            }
        }
        events
    }

    fn set_view(&mut self, view: View, events: &mut Vec<Event>) {
        if self.session.view == View::Timer && view != View::Timer {
            // No orphaned tick loops once the session moves on.
            self.session.timer.stop();
        }
        if self.session.view != view {
            self.session.view = view;
            events.push(Event::ViewChanged {
                view,
                at: Utc::now(),
            });
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
