//! Battle state: combatants, piles, phase and intent.
//!
//! ## Phase
//!
//! ```text
//! PlayerTurn --end turn--> OpponentTurnPending --timer--> OpponentTurnResolving
//!     ^                                                        |
//!     +-------------------------timer--------------------------+
//!
//! PlayerTurn --opponent health <= 0--> OpponentDefeated
//! OpponentTurnResolving --player health <= 0--> PlayerDefeated
//! ```
//!
//! ## BattleState
//!
//! The owned aggregate of everything that changes during a battle. The
//! `Battle` simulation is the only writer.

use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};
use crate::rules::{GameResult, Intent};
use crate::zones::CardPiles;

/// Where the battle is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The player may draw, play and end the turn.
    PlayerTurn,
    /// The player ended the turn; the opponent acts when its timer fires.
    OpponentTurnPending,
    /// The opponent has acted; the turn returns when the handback timer fires.
    OpponentTurnResolving,
    /// Player health reached zero. Terminal.
    PlayerDefeated,
    /// Opponent health reached zero. Terminal.
    OpponentDefeated,
}

impl Phase {
    /// Whose turn the phase belongs to.
    #[must_use]
    pub const fn active_side(self) -> Side {
        match self {
            Phase::PlayerTurn | Phase::OpponentDefeated => Side::Player,
            Phase::OpponentTurnPending | Phase::OpponentTurnResolving | Phase::PlayerDefeated => {
                Side::Opponent
            }
        }
    }

    /// Is this a terminal phase?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::PlayerDefeated | Phase::OpponentDefeated)
    }

    /// The result of a terminal phase.
    #[must_use]
    pub const fn result(self) -> Option<GameResult> {
        match self {
            Phase::OpponentDefeated => Some(GameResult::Victory),
            Phase::PlayerDefeated => Some(GameResult::Defeat),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::PlayerTurn => "player turn",
            Phase::OpponentTurnPending => "opponent turn (pending)",
            Phase::OpponentTurnResolving => "opponent turn (resolving)",
            Phase::PlayerDefeated => "player defeated",
            Phase::OpponentDefeated => "opponent defeated",
        };
        f.write_str(label)
    }
}

/// Health and shield of one side.
///
/// Health has no floor; it is checked for death right after each change.
/// Shield is clamped to zero whenever damage overflows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    pub health: i32,
    pub shield: i32,
}

impl Combatant {
    /// A fresh combatant with no shield.
    #[must_use]
    pub const fn new(health: i32) -> Self {
        Self { health, shield: 0 }
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Complete mutable state of one battle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleState {
    /// Health and shield per side.
    pub combatants: SideMap<Combatant>,

    /// The player's deck, hand and discard pile.
    pub piles: CardPiles,

    /// Current phase.
    pub phase: Phase,

    /// The opponent's committed action for its next turn.
    pub intent: Intent,

    /// Turn number (starts at 1, increments on each handback).
    pub turn_number: u32,

    /// Command sequence within the current turn.
    pub sequence: u32,
}

impl BattleState {
    /// Create a state at the start of the first player turn.
    #[must_use]
    pub fn new(starting_health: i32, piles: CardPiles, intent: Intent) -> Self {
        Self {
            combatants: SideMap::with_value(Combatant::new(starting_health)),
            piles,
            phase: Phase::PlayerTurn,
            intent,
            turn_number: 1,
            sequence: 0,
        }
    }

    /// Get a side's combatant.
    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side]
    }

    /// Get a side's combatant mutably.
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side]
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Advance to the next player turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.sequence = 0;
        self.phase = Phase::PlayerTurn;
    }

    /// Get and increment the command sequence.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }
}
