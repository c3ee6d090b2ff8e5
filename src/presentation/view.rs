//! Status view pushed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::side::Side;
use crate::core::state::{BattleState, Phase};
use crate::rules::Intent;

/// Everything the status panel shows.
///
/// `intent` is `None` while it is hidden, which is whenever it is not the
/// opponent's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub player_health: i32,
    pub player_shield: i32,
    pub opponent_health: i32,
    pub opponent_shield: i32,
    pub intent: Option<Intent>,
    pub active_side: Side,
    pub phase: Phase,
    /// Draw and end-turn affordances are enabled.
    pub actions_enabled: bool,
}

impl StatusView {
    /// Build the view for a state.
    #[must_use]
    pub fn from_state(state: &BattleState) -> Self {
        let player = state.combatant(Side::Player);
        let opponent = state.combatant(Side::Opponent);
        let active_side = state.phase.active_side();

        Self {
            player_health: player.health,
            player_shield: player.shield,
            opponent_health: opponent.health,
            opponent_shield: opponent.shield,
            intent: (active_side == Side::Opponent).then_some(state.intent),
            active_side,
            phase: state.phase,
            actions_enabled: state.is_player_turn(),
        }
    }

    #[must_use]
    pub fn player_text(&self) -> String {
        format!(
            "Player Health: {} (Shield: {})",
            self.player_health, self.player_shield
        )
    }

    #[must_use]
    pub fn opponent_text(&self) -> String {
        format!(
            "Opponent Health: {} (Shield: {})",
            self.opponent_health, self.opponent_shield
        )
    }

    #[must_use]
    pub fn intent_text(&self) -> String {
        match self.intent {
            Some(intent) => format!("Opponent Intent: {}", intent),
            None => "Opponent Intent: ?".to_string(),
        }
    }

    #[must_use]
    pub fn turn_text(&self) -> &'static str {
        match self.active_side {
            Side::Player => "Player's Turn",
            Side::Opponent => "Opponent's Turn",
        }
    }
}
