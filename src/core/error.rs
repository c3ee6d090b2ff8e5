//! Battle errors.
//!
//! Rejected requests (out of turn, card not in hand, full hand, empty piles,
//! finished battle) leave the battle untouched. `HandFull` is the exception:
//! an empty deck is refilled from the discard pile before the hand is
//! checked, and that refill stays. Callers that only care about the safe
//! no-op behaviour can drop the `Err` and carry on.

use thiserror::Error;

use crate::cards::CardId;
use crate::presentation::VisualId;
use crate::rules::GameResult;

pub type Result<T> = std::result::Result<T, BattleError>;

#[derive(Debug, Error)]
pub enum BattleError {
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("hand is full ({capacity} cards)")]
    HandFull { capacity: usize },

    #[error("deck and discard pile are both empty")]
    DeckEmpty,

    #[error("battle is over: {0}")]
    GameOver(GameResult),

    #[error("{0} is not bound to a card in hand")]
    UnknownVisual(VisualId),

    #[error("invalid battle config: {0}")]
    InvalidConfig(String),

    #[error("{id} has non-positive value {value}")]
    InvalidCardValue { id: CardId, value: i32 },

    #[error("{0} is already registered")]
    DuplicateCard(CardId),

    #[error("{0} is not in the card registry")]
    UnknownCard(CardId),

    #[error("card pool is empty")]
    EmptyPool,

    #[error("malformed card pool")]
    PoolFormat(#[from] serde_json::Error),
}

impl BattleError {
    /// Whether this error rejected a gameplay request (as opposed to a
    /// construction failure).
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BattleError::NotPlayerTurn
                | BattleError::CardNotInHand(_)
                | BattleError::HandFull { .. }
                | BattleError::DeckEmpty
                | BattleError::GameOver(_)
                | BattleError::UnknownVisual(_)
        )
    }
}
