//! # Code Daily Core Library
//!
//! Core business logic for Code Daily, a credit-gamified focus timer with a
//! rule-based weekly roadmap generator. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary; any
//! richer rendering surface is a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **State Machine**: A reducer-style dispatcher over the owned session;
//!   every user action returns the events it produced
//! - **Timer Engine**: A wall-clock-based countdown that requires the caller
//!   to periodically invoke `poll()` for progress updates
//! - **Roadmap Generator**: A pure template-filling function over fixed
//!   topic tables
//! - **Storage**: SQLite-backed profile scalars and sprint history behind a
//!   small key-value port, plus TOML-based configuration
//!
//! ## Key Components
//!
//! - [`App`]: The state machine
//! - [`CountdownTimer`]: Caller-driven countdown engine
//! - [`Database`]: Profile and sprint-history persistence
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod machine;
pub mod roadmap;
pub mod session;
pub mod storage;
pub mod timer;
pub mod upgrades;

pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use machine::{Action, App};
pub use roadmap::{Level, Track, WeekBlock};
pub use session::{format_clock, Session, View, REWARD_CREDITS};
pub use storage::{Config, Database, MemoryStore, ProfileStore};
pub use timer::{CountdownTimer, TimerTick};
