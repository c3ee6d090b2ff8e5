//! Player commands and their history.
//!
//! A `Command` is one request from the presentation layer. Accepted commands
//! are stored as `CommandRecord`s so a battle can be replayed from its seed.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::schedule::Tick;

/// A request the presentation layer can make of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Draw one card from the deck.
    DrawCard,
    /// Play a card from the hand.
    PlayCard(CardId),
    /// Hand the turn to the opponent.
    EndTurn,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::DrawCard => write!(f, "draw"),
            Command::PlayCard(card) => write!(f, "play {}", card),
            Command::EndTurn => write!(f, "end turn"),
        }
    }
}

/// An accepted command with the time and turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command that was applied.
    pub command: Command,

    /// Turn number when the command was applied.
    pub turn: u32,

    /// Clock reading when the command was applied.
    pub at: Tick,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, turn: u32, at: Tick, sequence: u32) -> Self {
        Self {
            command,
            turn,
            at,
            sequence,
        }
    }
}
