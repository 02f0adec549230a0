mod config;
pub mod database;
pub mod store;

pub use config::Config;
pub use database::{Database, SprintRecord, Stats};
pub use store::{MemoryStore, ProfileStore};

use std::path::PathBuf;

/// Returns `~/.config/codedaily[-dev]/` based on CODEDAILY_ENV.
///
/// Set CODEDAILY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CODEDAILY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("codedaily-dev")
    } else {
        base_dir.join("codedaily")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
