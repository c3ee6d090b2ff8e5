//! The battle: state machine, timers and presentation wiring.
//!
//! ## Key Types
//!
//! - `Battle`: one battle between the player and a scripted opponent
//! - `BattleBuilder`: configures and constructs a `Battle`

pub mod builder;
pub mod simulation;

pub use builder::BattleBuilder;
pub use simulation::Battle;
