//! Countdown timer engine.
//!
//! The engine is a wall-clock-based countdown. It does not use internal
//! threads - the caller is responsible for calling `poll()` (or `tick()`,
//! for logical one-second steps) periodically.
//!
//! The contract is one tick per elapsed second. `poll()` consumes whole
//! seconds since the last anchor and carries the sub-second remainder
//! forward, so no drift accumulates across polls and pausing preserves the
//! remaining seconds exactly.
//!
//! Each `start()` or `stop()` bumps `run_id`, which acts as the
//! cancellation token for the run: once the session leaves the timer view
//! the old run can never apply another tick.

use serde::{Deserialize, Serialize};

/// One second of countdown progress, as reported by `poll`/`tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerTick {
    /// Seconds left after this tick.
    pub remaining_secs: u64,
    /// Completion fraction, 0.0 .. 1.0.
    pub fraction: f64,
    /// True for the final tick of a run.
    pub expired: bool,
}

/// Core countdown engine.
///
/// Operates on wall-clock deltas -- no internal thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    duration_secs: u64,
    remaining_secs: u64,
    running: bool,
    /// Timestamp (ms since epoch) anchoring the next whole second.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
    /// Incremented on every start/stop; stale polls carry a dead run id.
    #[serde(default)]
    run_id: u64,
}

impl CountdownTimer {
    /// Create an idle timer with nothing scheduled.
    pub fn new() -> Self {
        Self {
            duration_secs: 0,
            remaining_secs: 0,
            running: false,
            last_tick_epoch_ms: None,
            run_id: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// 0.0 .. 1.0 completion of the current countdown.
    pub fn fraction(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        (self.duration_secs - self.remaining_secs) as f64 / self.duration_secs as f64
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh countdown, superseding any previous run.
    pub fn start(&mut self, duration_secs: u64, now_ms: u64) {
        self.run_id += 1;
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.running = true;
        self.last_tick_epoch_ms = Some(now_ms);
    }

    /// Stop ticking without losing the remaining seconds.
    pub fn pause(&mut self) {
        self.running = false;
        self.last_tick_epoch_ms = None;
    }

    /// Continue from the current remaining seconds with a fresh anchor.
    pub fn resume(&mut self, now_ms: u64) {
        if self.remaining_secs == 0 {
            return;
        }
        self.running = true;
        self.last_tick_epoch_ms = Some(now_ms);
    }

    /// Kill the run entirely. Any poll against the old run is now a no-op.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick_epoch_ms = None;
        self.run_id += 1;
    }

    // ── Ticking ──────────────────────────────────────────────────────

    /// Consume whole elapsed seconds since the anchor, one tick each.
    ///
    /// Returns every second of progress made, in order; the last entry of
    /// a finished run has `expired == true` and the timer is left stopped.
    pub fn poll(&mut self, now_ms: u64) -> Vec<TimerTick> {
        let mut ticks = Vec::new();
        if !self.running {
            return ticks;
        }
        let Some(anchor) = self.last_tick_epoch_ms else {
            return ticks;
        };
        let whole_secs = now_ms.saturating_sub(anchor) / 1000;
        if whole_secs == 0 {
            return ticks;
        }
        // Carry the sub-second remainder in the anchor.
        self.last_tick_epoch_ms = Some(anchor + whole_secs * 1000);
        for _ in 0..whole_secs {
            match self.step() {
                Some(tick) => ticks.push(tick),
                None => break,
            }
        }
        ticks
    }

    /// Apply exactly one logical second. Used by callers that drive the
    /// timer deterministically instead of from the wall clock.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !self.running {
            return None;
        }
        if let Some(anchor) = self.last_tick_epoch_ms {
            self.last_tick_epoch_ms = Some(anchor + 1000);
        }
        self.step()
    }

    fn step(&mut self) -> Option<TimerTick> {
        if !self.running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        let expired = self.remaining_secs == 0;
        if expired {
            self.running = false;
            self.last_tick_epoch_ms = None;
        }
        Some(TimerTick {
            remaining_secs: self.remaining_secs,
            fraction: self.fraction(),
            expired,
        })
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sets_remaining_to_duration() {
        let mut t = CountdownTimer::new();
        t.start(600, 0);
        assert!(t.is_running());
        assert_eq!(t.duration_secs(), 600);
        assert_eq!(t.remaining_secs(), 600);
    }

    #[test]
    fn poll_ticks_once_per_elapsed_second() {
        let mut t = CountdownTimer::new();
        t.start(10, 0);
        let ticks = t.poll(3_000);
        assert_eq!(ticks.len(), 3);
        assert_eq!(t.remaining_secs(), 7);
        assert_eq!(ticks[2].remaining_secs, 7);
    }

    #[test]
    fn poll_carries_subsecond_remainder() {
        let mut t = CountdownTimer::new();
        t.start(10, 0);
        assert_eq!(t.poll(1_700).len(), 1);
        // 300ms short of the next tick; 1_900 still is.
        assert_eq!(t.poll(1_900).len(), 0);
        assert_eq!(t.poll(2_000).len(), 1);
        assert_eq!(t.remaining_secs(), 8);
    }

    #[test]
    fn final_tick_is_marked_expired() {
        let mut t = CountdownTimer::new();
        t.start(2, 0);
        let ticks = t.poll(5_000);
        assert_eq!(ticks.len(), 2);
        assert!(ticks[1].expired);
        assert!(!t.is_running());
        assert_eq!(t.remaining_secs(), 0);
    }

    #[test]
    fn pause_preserves_remaining_exactly() {
        let mut t = CountdownTimer::new();
        t.start(10, 0);
        t.poll(4_500);
        assert_eq!(t.remaining_secs(), 6);
        t.pause();
        assert_eq!(t.remaining_secs(), 6);
        // A poll while paused does nothing.
        assert!(t.poll(60_000).is_empty());
        t.resume(60_000);
        assert_eq!(t.poll(61_000).len(), 1);
        assert_eq!(t.remaining_secs(), 5);
    }

    #[test]
    fn stop_invalidates_the_run() {
        let mut t = CountdownTimer::new();
        t.start(10, 0);
        let run = t.run_id();
        t.stop();
        assert_ne!(t.run_id(), run);
        assert!(t.poll(10_000).is_empty());
    }

    #[test]
    fn start_supersedes_previous_run() {
        let mut t = CountdownTimer::new();
        t.start(10, 0);
        let first = t.run_id();
        t.start(20, 5_000);
        assert_ne!(t.run_id(), first);
        assert_eq!(t.remaining_secs(), 20);
        let ticks = t.poll(6_000);
        assert_eq!(ticks.len(), 1);
        assert_eq!(t.remaining_secs(), 19);
    }

    #[test]
    fn fraction_tracks_progress() {
        let mut t = CountdownTimer::new();
        t.start(4, 0);
        let ticks = t.poll(1_000);
        assert!((ticks[0].fraction - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn logical_tick_decrements_once() {
        let mut t = CountdownTimer::new();
        t.start(3, 0);
        assert_eq!(t.tick().unwrap().remaining_secs, 2);
        assert_eq!(t.tick().unwrap().remaining_secs, 1);
        let last = t.tick().unwrap();
        assert!(last.expired);
        assert!(t.tick().is_none());
    }
}
