//! Property tests for the roadmap generator and the timer invariant.

use codedaily_core::roadmap::{self, Level, Track};
use codedaily_core::timer::CountdownTimer;
use proptest::prelude::*;

fn any_track() -> impl Strategy<Value = Track> {
    prop_oneof![
        Just(Track::Frontend),
        Just(Track::Backend),
        Just(Track::Dsa),
    ]
}

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Beginner),
        Just(Level::Intermediate),
        Just(Level::Advanced),
    ]
}

proptest! {
    #[test]
    fn plan_length_equals_weeks(track in any_track(), level in any_level(), weeks in 1u32..=64) {
        let plan = roadmap::generate(track, level, weeks).unwrap();
        prop_assert_eq!(plan.len(), weeks as usize);
    }

    #[test]
    fn weeks_are_numbered_in_order(track in any_track(), level in any_level(), weeks in 1u32..=64) {
        let plan = roadmap::generate(track, level, weeks).unwrap();
        for (i, block) in plan.iter().enumerate() {
            prop_assert_eq!(block.week, i as u32 + 1);
        }
    }

    #[test]
    fn every_week_has_three_bullets(track in any_track(), level in any_level(), weeks in 1u32..=64) {
        let plan = roadmap::generate(track, level, weeks).unwrap();
        prop_assert!(plan.iter().all(|b| b.bullets.len() == 3));
    }

    #[test]
    fn generation_is_deterministic(track in any_track(), level in any_level(), weeks in 1u32..=32) {
        let a = roadmap::generate(track, level, weeks).unwrap();
        let b = roadmap::generate(track, level, weeks).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_tracks_always_mean_frontend(junk in "[a-z]{0,12}", weeks in 1u32..=16) {
        prop_assume!(junk != "backend" && junk != "dsa");
        let plan = roadmap::generate(Track::from_str_lossy(&junk), Level::Beginner, weeks).unwrap();
        let reference = roadmap::generate(Track::Frontend, Level::Beginner, weeks).unwrap();
        prop_assert_eq!(plan, reference);
    }

    #[test]
    fn countdown_loses_exactly_one_second_per_tick(duration in 1u64..=600) {
        let mut t = CountdownTimer::new();
        t.start(duration, 0);
        for k in 1..=duration {
            let tick = t.tick().unwrap();
            prop_assert_eq!(tick.remaining_secs, duration - k);
        }
        prop_assert!(!t.is_running());
        prop_assert!(t.tick().is_none());
    }

    #[test]
    fn poll_never_overshoots(duration in 1u64..=120, elapsed_ms in 0u64..=300_000) {
        let mut t = CountdownTimer::new();
        t.start(duration, 0);
        let ticks = t.poll(elapsed_ms);
        prop_assert!(ticks.len() as u64 <= duration);
        prop_assert_eq!(
            t.remaining_secs(),
            duration.saturating_sub(elapsed_ms / 1000)
        );
    }
}
