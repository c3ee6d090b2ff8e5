//! Battle events.
//!
//! Events describe what happened, in order, for logs and replays. They carry
//! no behaviour; the battle appends them as it changes state.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::rules::{GameResult, Intent, Resolution};
use crate::schedule::Tick;

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// The deck was shuffled.
    DeckShuffled { cards: usize },

    /// An empty deck was refilled from the discard pile.
    DeckRecycled { cards: usize },

    /// A card moved from the deck to the hand.
    CardDrawn { card: CardId },

    /// The player played a card.
    CardPlayed { card: CardId, resolution: Resolution },

    /// The opponent committed to an intent.
    IntentChosen { intent: Intent },

    /// The player ended their turn.
    TurnEnded { turn: u32 },

    /// The opponent acted on its intent.
    OpponentActed {
        intent: Intent,
        amount: i32,
        resolution: Resolution,
    },

    /// The turn returned to the player.
    TurnStarted { turn: u32 },

    /// The battle reached a terminal phase.
    BattleEnded { result: GameResult },

    /// The battle was reset to a fresh state.
    BattleReset,
}

/// An event with when it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub at: Tick,
    pub turn: u32,
    pub event: BattleEvent,
}

/// Append-only event history.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at: Tick, turn: u32, event: BattleEvent) {
        self.records.push(EventRecord { at, turn, event });
    }

    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Events only, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &BattleEvent> {
        self.records.iter().map(|r| &r.event)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
