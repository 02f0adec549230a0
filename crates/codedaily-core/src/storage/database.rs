//! SQLite-based storage.
//!
//! Provides persistent storage for:
//! - Profile scalars (username, credits) via a kv table
//! - Completed sprint history and statistics

use chrono::{DateTime, Utc};
use indoc::indoc;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StoreError;
use crate::storage::store::ProfileStore;

/// One completed focus sprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintRecord {
    pub id: String,
    pub task_name: String,
    pub duration_secs: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total_sprints: u64,
    pub total_focus_min: u64,
    pub today_sprints: u64,
    pub today_focus_min: u64,
}

/// SQLite database for profile scalars and sprint history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/codedaily/codedaily.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("codedaily.db");
        let conn = Connection::open(path)?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(indoc! {"
            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sprints (
                id            TEXT PRIMARY KEY,
                task_name     TEXT NOT NULL,
                duration_secs INTEGER NOT NULL,
                started_at    TEXT NOT NULL,
                completed_at  TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sprints_completed_at ON sprints(completed_at);
        "})?;
        Ok(())
    }

    /// Record a completed sprint. Returns the new record's id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_sprint(
        &self,
        task_name: &str,
        duration_secs: u64,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<String, rusqlite::Error> {
        let id = uuid::Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO sprints (id, task_name, duration_secs, started_at, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                task_name,
                duration_secs,
                started_at.to_rfc3339(),
                completed_at.to_rfc3339(),
            ],
        )?;
        Ok(id)
    }

    /// Most recently completed sprints, newest first.
    pub fn recent_sprints(&self, limit: u32) -> Result<Vec<SprintRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, task_name, duration_secs, started_at, completed_at
             FROM sprints ORDER BY completed_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, task_name, duration_secs, started, completed) = row?;
            records.push(SprintRecord {
                id,
                task_name,
                duration_secs,
                started_at: parse_ts(&started),
                completed_at: parse_ts(&completed),
            });
        }
        Ok(records)
    }

    pub fn stats_all(&self) -> Result<Stats, rusqlite::Error> {
        let (count, secs) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_secs), 0) FROM sprints",
            [],
            |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)),
        )?;

        let mut stats = Stats {
            total_sprints: count,
            total_focus_min: secs / 60,
            ..Stats::default()
        };

        let today = Utc::now().format("%Y-%m-%d").to_string();
        let (count, secs) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_secs), 0)
             FROM sprints WHERE completed_at >= ?1",
            params![format!("{today}T00:00:00+00:00")],
            |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)),
        )?;
        stats.today_sprints = count;
        stats.today_focus_min = secs / 60;
        Ok(stats)
    }

    pub fn stats_today(&self) -> Result<Stats, rusqlite::Error> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let (count, secs) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_secs), 0)
             FROM sprints WHERE completed_at >= ?1",
            params![format!("{today}T00:00:00+00:00")],
            |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)),
        )?;
        Ok(Stats {
            total_sprints: count,
            total_focus_min: secs / 60,
            today_sprints: count,
            today_focus_min: secs / 60,
        })
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key from the kv store.
    pub fn kv_remove(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

fn parse_ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

impl ProfileStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.kv_get(key).map_err(Into::into)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.kv_set(key, value).map_err(Into::into)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.kv_remove(key).map_err(Into::into)
    }
}
