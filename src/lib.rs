//! # card-battler
//!
//! A turn-based card battle between a player and a scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The battle pushes everything it wants shown through a
//!    `Presenter` and never owns a UI.
//!
//! 2. **Deterministic**: All randomness comes from one seeded `GameRng`, and
//!    time only moves when the caller advances the clock. A seed plus the
//!    command history replays a battle exactly.
//!
//! 3. **Safe Requests**: Every player request returns a `Result`. An `Err`
//!    leaves the battle untouched, except that a draw from an empty deck
//!    refills it from the discard pile before a `HandFull` rejection.
//!
//! ## Turn Flow
//!
//! The player draws and plays cards, then ends the turn. The opponent acts on
//! its pre-committed intent after a delay, and after a second delay the turn
//! comes back to the player with one card drawn and a new intent chosen. The
//! battle ends when either side's health reaches zero.
//!
//! ## Modules
//!
//! - `core`: Sides, state, commands, RNG, configuration, errors
//! - `cards`: Card definitions, registry, and pools
//! - `zones`: Deck, hand and discard pile
//! - `rules`: Combat math, card and intent resolution, opponent scripts
//! - `schedule`: Simulated clock and one-shot timers
//! - `presentation`: Presenter trait, status view, hand bindings
//! - `events`: Event log
//! - `battle`: The battle state machine and its builder

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod schedule;
pub mod presentation;
pub mod events;
pub mod battle;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState,
    BattleConfig,
    Command, CommandRecord,
    BattleState, Combatant, Phase,
    BattleError, Result,
};

pub use crate::cards::{CardDefinition, CardId, CardKind, CardPool, CardRegistry};

pub use crate::zones::{CardPiles, Pile};

pub use crate::rules::{
    apply_attack, gain_shield, AttackOutcome,
    resolve_card, resolve_intent, GameResult, Resolution,
    CoinFlipOpponent, Intent, OpponentScript,
};

pub use crate::schedule::{ManualClock, Scheduler, Tick, TimerId};

pub use crate::presentation::{
    HandBindings, VisualId, StatusView,
    NullPresenter, Presenter, PresenterCall, RecordingPresenter,
};

pub use crate::events::{BattleEvent, EventLog, EventRecord};

pub use crate::battle::{Battle, BattleBuilder};
