//! Card pools: the multiset of cards a battle's deck is built from.
//!
//! A pool pairs a `CardRegistry` with an ordered list of `CardId` references.
//! Pools can be assembled in code or loaded from JSON:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Strike", "kind": "Attack", "value": 3, "copies": 5 },
//!   { "id": 2, "name": "Guard", "kind": "Shield", "value": 4, "art": "guard.png" }
//! ]
//! ```
//!
//! `copies` defaults to 1.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardKind};
use super::registry::CardRegistry;
use crate::core::error::{BattleError, Result};

/// One JSON pool entry: a definition plus how many copies go in the deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PoolEntry {
    #[serde(flatten)]
    card: CardDefinition,
    #[serde(default = "default_copies")]
    copies: usize,
}

fn default_copies() -> usize {
    1
}

/// Card definitions plus the deck list built from them.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    registry: CardRegistry,
    cards: Vec<CardId>,
}

impl CardPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ten-card starter pool: five `Attack 3` and five `Shield 4`.
    #[must_use]
    pub fn starter() -> Self {
        let strike = CardDefinition::new(CardId::new(1), "Strike", CardKind::Attack, 3);
        let guard = CardDefinition::new(CardId::new(2), "Guard", CardKind::Shield, 4);

        let mut cards = vec![strike.id; 5];
        cards.extend([guard.id; 5]);
        Self {
            registry: CardRegistry::from_definitions([strike, guard]),
            cards,
        }
    }

    /// Register a definition (if new) and add `copies` references to it.
    ///
    /// Re-adding an identical definition only adds copies. A different
    /// definition under an existing ID is rejected.
    pub fn add(&mut self, card: CardDefinition, copies: usize) -> Result<CardId> {
        let id = card.id;
        match self.registry.get(id) {
            Some(existing) if *existing == card => {}
            Some(_) => return Err(BattleError::DuplicateCard(id)),
            None => self.registry.register(card)?,
        }
        self.cards.extend(std::iter::repeat(id).take(copies));
        Ok(id)
    }

    /// Add more references to an already registered definition.
    pub fn add_copies(&mut self, id: CardId, copies: usize) -> Result<()> {
        if !self.registry.contains(id) {
            return Err(BattleError::UnknownCard(id));
        }
        self.cards.extend(std::iter::repeat(id).take(copies));
        Ok(())
    }

    /// Load a pool from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PoolEntry> = serde_json::from_str(json)?;
        let mut pool = Self::new();
        for entry in entries {
            pool.add(entry.card, entry.copies)?;
        }
        if pool.is_empty() {
            return Err(BattleError::EmptyPool);
        }
        Ok(pool)
    }

    /// The registry of definitions.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The card references, in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of card references (not distinct definitions).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Split into registry and deck list.
    #[must_use]
    pub fn into_parts(self) -> (CardRegistry, Vec<CardId>) {
        (self.registry, self.cards)
    }
}
