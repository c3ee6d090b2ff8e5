//! The scripted opponent.
//!
//! The opponent commits to an `Intent` at the start of each player turn and
//! acts on it when its timer fires. `OpponentScript` is the seam: the stock
//! `CoinFlipOpponent` picks uniformly between attacking and shielding and
//! rolls the amount uniformly from the configured range.

use serde::{Deserialize, Serialize};

use crate::core::config::BattleConfig;
use crate::core::rng::GameRng;

/// The opponent's pre-committed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Roll damage and hit the player.
    Attack,
    /// Roll an amount and add it to the opponent's shield.
    Shield,
}

impl Intent {
    pub const ALL: [Intent; 2] = [Intent::Attack, Intent::Shield];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Attack => write!(f, "Attack"),
            Intent::Shield => write!(f, "Shield"),
        }
    }
}

/// Decides what the opponent does.
///
/// Implementations draw all randomness from the battle's `GameRng` so a seed
/// reproduces a whole battle.
pub trait OpponentScript {
    /// Choose the intent for the opponent's next turn.
    fn choose_intent(&mut self, rng: &mut GameRng) -> Intent;

    /// Roll the damage or shield amount for `intent`.
    fn roll(&mut self, intent: Intent, config: &BattleConfig, rng: &mut GameRng) -> i32;
}

/// Uniform intent, uniform roll in `[opponent_roll_min, opponent_roll_max]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinFlipOpponent;

impl OpponentScript for CoinFlipOpponent {
    fn choose_intent(&mut self, rng: &mut GameRng) -> Intent {
        rng.choose(&Intent::ALL).copied().unwrap_or(Intent::Attack)
    }

    fn roll(&mut self, _intent: Intent, config: &BattleConfig, rng: &mut GameRng) -> i32 {
        rng.gen_inclusive(config.opponent_roll_min, config.opponent_roll_max)
    }
}
