//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a battle can reference.
//! Piles hold `CardId`s; the registry turns them back into definitions.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};
use crate::core::error::{BattleError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use card_battler::cards::{CardRegistry, CardDefinition, CardId, CardKind};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new(1), "Strike", CardKind::Attack, 3))
///     .unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from definitions known to be valid and distinct.
    /// A later definition replaces an earlier one with the same ID.
    pub(crate) fn from_definitions(cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        Self {
            cards: cards.into_iter().map(|card| (card.id, card)).collect(),
        }
    }

    /// Register a card definition.
    ///
    /// Fails on a duplicate ID or a non-positive value.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(BattleError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, failing with `UnknownCard`.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition> {
        self.get(id).ok_or(BattleError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.kind == kind)
    }
}
