use chrono::{Duration, Utc};
use codedaily_core::machine::Action;
use codedaily_core::session::View;
use codedaily_core::Event;

use super::common;

pub fn login(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::load_app()?;
    let events = app.dispatch(Action::SubmitLogin {
        name: name.to_string(),
    })?;
    if events.is_empty() {
        return Err("name must not be empty".into());
    }
    common::print_events_and_snapshot(&events, &app)?;
    common::save_app(&app)?;
    Ok(())
}

pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::load_app()?;
    let events = app.dispatch(Action::Logout)?;
    common::print_events_and_snapshot(&events, &app)?;
    common::save_app(&app)?;
    Ok(())
}

/// Switch the session to another view by its wire name.
pub fn goto(view: &str) -> Result<(), Box<dyn std::error::Error>> {
    let view = View::from_name(view)
        .ok_or_else(|| format!("unknown view: {view} (try hub, input, roadmap, aiRoadmap)"))?;
    let mut app = common::load_app()?;
    let events = app.dispatch(Action::Navigate { view })?;
    common::print_events_and_snapshot(&events, &app)?;
    common::save_app(&app)?;
    Ok(())
}

/// Collect the +10 credit reward and record the sprint to history.
pub fn collect() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::load_app()?;

    // Capture sprint details before dispatch clears them.
    let task_name = app.session().task_name.clone();
    let duration_secs = app.session().duration_secs;
    let started_at = app.session().sprint_started_at;

    let events = app.dispatch(Action::CollectReward)?;
    if events
        .iter()
        .any(|e| matches!(e, Event::RewardCollected { .. }))
    {
        let completed_at = Utc::now();
        let started_at = started_at
            .unwrap_or_else(|| completed_at - Duration::seconds(duration_secs as i64));
        app.store()
            .record_sprint(&task_name, duration_secs, started_at, completed_at)?;
    } else {
        println!("nothing to collect: no completed sprint waiting");
    }
    common::print_events_and_snapshot(&events, &app)?;
    common::save_app(&app)?;
    Ok(())
}
