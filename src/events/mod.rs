//! Battle event log.

pub mod event;

pub use event::{BattleEvent, EventLog, EventRecord};
