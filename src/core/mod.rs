//! Core battle types: sides, state, commands, RNG, configuration, errors.
//!
//! This module holds the plain data the simulation runs on. Behaviour lives
//! in `rules` (resolution math) and `battle` (the state machine).

pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::BattleConfig;
pub use action::{Command, CommandRecord};
pub use state::{BattleState, Combatant, Phase};
pub use error::{BattleError, Result};
