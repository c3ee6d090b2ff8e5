//! Card and intent resolution.
//!
//! `resolve_card` applies a played card, `resolve_intent` applies the
//! opponent's action. Neither decides whose turn it is; the battle state
//! machine owns that.

use serde::{Deserialize, Serialize};

use super::combat::{apply_attack, gain_shield, AttackOutcome};
use super::opponent::Intent;
use crate::cards::{CardDefinition, CardKind};
use crate::core::side::{Side, SideMap};
use crate::core::state::Combatant;

/// Result of a finished battle, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The opponent was defeated.
    Victory,
    /// The player was defeated.
    Defeat,
}

impl GameResult {
    /// The side that won.
    #[must_use]
    pub const fn winner(self) -> Side {
        match self {
            GameResult::Victory => Side::Player,
            GameResult::Defeat => Side::Opponent,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Victory => write!(f, "victory"),
            GameResult::Defeat => write!(f, "defeat"),
        }
    }
}

/// What a single resolution did to the combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// `target` was hit.
    Damage { target: Side, outcome: AttackOutcome },
    /// `side` gained shield.
    Shield { side: Side, amount: i32 },
}

/// Apply a card played by the player.
pub fn resolve_card(combatants: &mut SideMap<Combatant>, card: &CardDefinition) -> Resolution {
    match card.kind {
        CardKind::Attack => {
            let outcome = apply_attack(&mut combatants[Side::Opponent], card.value);
            Resolution::Damage {
                target: Side::Opponent,
                outcome,
            }
        }
        CardKind::Shield => {
            gain_shield(&mut combatants[Side::Player], card.value);
            Resolution::Shield {
                side: Side::Player,
                amount: card.value,
            }
        }
    }
}

/// Apply the opponent's intent with a rolled `amount`.
pub fn resolve_intent(
    combatants: &mut SideMap<Combatant>,
    intent: Intent,
    amount: i32,
) -> Resolution {
    match intent {
        Intent::Attack => {
            let outcome = apply_attack(&mut combatants[Side::Player], amount);
            Resolution::Damage {
                target: Side::Player,
                outcome,
            }
        }
        Intent::Shield => {
            gain_shield(&mut combatants[Side::Opponent], amount);
            Resolution::Shield {
                side: Side::Opponent,
                amount,
            }
        }
    }
}
