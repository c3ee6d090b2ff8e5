//! Simulated time and one-shot timers.
//!
//! The battle never sleeps. It schedules the opponent's action and the turn
//! handback on a `Scheduler`, and the caller moves a `ManualClock` forward to
//! let them fire.

pub mod clock;
pub mod timer;

pub use clock::{ManualClock, Tick};
pub use timer::{Fired, Scheduler, TimerId};
