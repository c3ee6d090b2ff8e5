//! Card definitions - static card data.
//!
//! A `CardDefinition` is a shared template: the same definition can sit in
//! the deck several times. Piles store `CardId`s, never copies of the
//! definition.

use serde::{Deserialize, Serialize};

use crate::core::error::{BattleError, Result};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Deals its value as damage to the opponent.
    Attack,
    /// Adds its value to the player's shield.
    Shield,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Attack => write!(f, "Attack"),
            CardKind::Shield => write!(f, "Shield"),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_battler::cards::{CardDefinition, CardId, CardKind};
///
/// let strike = CardDefinition::new(CardId::new(1), "Strike", CardKind::Attack, 3)
///     .with_art("cards/strike.png");
///
/// assert_eq!(strike.value, 3);
/// assert_eq!(strike.label(), "Attack\n3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Effect type.
    pub kind: CardKind,

    /// Damage dealt or shield gained. Always positive.
    pub value: i32,

    /// Opaque art reference, interpreted only by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind, value: i32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            value,
            art: None,
        }
    }

    /// Attach an art reference (builder pattern).
    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = Some(art.into());
        self
    }

    /// Text shown on the card face: kind on the first line, value on the second.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}\n{}", self.kind, self.value)
    }

    /// Reject definitions with a non-positive value.
    pub fn validate(&self) -> Result<()> {
        if self.value <= 0 {
            return Err(BattleError::InvalidCardValue {
                id: self.id,
                value: self.value,
            });
        }
        Ok(())
    }
}
