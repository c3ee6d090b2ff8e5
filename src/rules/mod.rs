//! Battle rules.
//!
//! - `combat`: shield-then-health damage absorption
//! - `engine`: applying cards and intents, battle results
//! - `opponent`: the opponent's intent and the `OpponentScript` seam

pub mod combat;
pub mod engine;
pub mod opponent;

pub use combat::{apply_attack, gain_shield, AttackOutcome};
pub use engine::{resolve_card, resolve_intent, GameResult, Resolution};
pub use opponent::{CoinFlipOpponent, Intent, OpponentScript};
