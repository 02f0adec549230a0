//! Shared plumbing for CLI commands.
//!
//! Each invocation loads the persisted session from the kv store,
//! dispatches, prints events, and persists the session back -- the same
//! load/act/save cycle the core's state machine expects from any caller.

use codedaily_core::machine::App;
use codedaily_core::session::Session;
use codedaily_core::storage::{Config, Database};
use codedaily_core::Event;

const SESSION_KEY: &str = "session";

pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Load the persisted session (or build a fresh one from the profile
/// scalars) and wrap it with the database as its store.
pub fn load_app() -> Result<App<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    let persisted = db
        .kv_get(SESSION_KEY)?
        .and_then(|json| serde_json::from_str::<Session>(&json).ok());
    let session = match persisted {
        Some(session) => session,
        None => Session::load(&db, &config)?,
    };

    Ok(App::new(session, db))
}

/// Persist the session for the next invocation.
pub fn save_app(app: &App<Database>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(app.session())?;
    app.store().kv_set(SESSION_KEY, &json)?;
    Ok(())
}

/// Print events as JSON lines, then the snapshot pretty-printed.
pub fn print_events_and_snapshot(
    events: &[Event],
    app: &App<Database>,
) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        println!("{}", serde_json::to_string(event)?);
    }
    println!("{}", serde_json::to_string_pretty(&app.session().snapshot())?);
    Ok(())
}
