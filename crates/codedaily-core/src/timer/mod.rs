mod engine;

pub use engine::{CountdownTimer, TimerTick};
