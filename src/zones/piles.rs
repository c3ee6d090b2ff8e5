//! Deck, hand and discard piles for the player.
//!
//! All three piles hold `CardId` references to shared definitions. Cards only
//! ever move between piles, so the multiset across deck, hand and discard is
//! constant outside of play resolution.
//!
//! - **Deck**: drawn from the front. Refilled from the discard pile (and
//!   reshuffled) the moment a draw finds it empty.
//! - **Hand**: bounded by `hand_capacity`.
//! - **Discard**: played cards, in play order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::error::{BattleError, Result};
use crate::core::rng::GameRng;

/// Which pile a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Deck,
    Hand,
    Discard,
}

/// The player's three card piles.
///
/// ## Usage
///
/// ```
/// use card_battler::cards::CardId;
/// use card_battler::core::GameRng;
/// use card_battler::zones::CardPiles;
///
/// let mut piles = CardPiles::new(vec![CardId::new(1), CardId::new(2)], 7);
/// let mut rng = GameRng::new(42);
///
/// let card = piles.draw(&mut rng).unwrap();
/// assert_eq!(piles.hand(), &[card]);
/// assert_eq!(piles.deck().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPiles {
    deck: Vec<CardId>,
    hand: SmallVec<[CardId; 7]>,
    discard: Vec<CardId>,
    hand_capacity: usize,
}

impl CardPiles {
    /// Create piles with every card in the deck, in the given order.
    #[must_use]
    pub fn new(deck: Vec<CardId>, hand_capacity: usize) -> Self {
        Self {
            deck,
            hand: SmallVec::new(),
            discard: Vec::new(),
            hand_capacity,
        }
    }

    /// Cards in the deck, front (next draw) first.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// Cards in hand, oldest first.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Cards in the discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[CardId] {
        &self.discard
    }

    #[must_use]
    pub fn hand_capacity(&self) -> usize {
        self.hand_capacity
    }

    #[must_use]
    pub fn is_hand_full(&self) -> bool {
        self.hand.len() >= self.hand_capacity
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: Pile) -> usize {
        match pile {
            Pile::Deck => self.deck.len(),
            Pile::Hand => self.hand.len(),
            Pile::Discard => self.discard.len(),
        }
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Check if the hand holds at least one copy of a card.
    #[must_use]
    pub fn hand_contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }

    /// If the deck is empty, move the discard pile into it and reshuffle.
    ///
    /// Returns the number of cards recycled.
    pub fn recycle_if_empty(&mut self, rng: &mut GameRng) -> usize {
        if !self.deck.is_empty() || self.discard.is_empty() {
            return 0;
        }
        let count = self.discard.len();
        self.deck.append(&mut self.discard);
        self.shuffle_deck(rng);
        count
    }

    /// Move the front deck card into the hand.
    ///
    /// Does not recycle; see `draw`.
    pub fn draw_front(&mut self) -> Result<CardId> {
        if self.deck.is_empty() {
            return Err(BattleError::DeckEmpty);
        }
        if self.is_hand_full() {
            return Err(BattleError::HandFull {
                capacity: self.hand_capacity,
            });
        }
        let card = self.deck.remove(0);
        self.hand.push(card);
        Ok(card)
    }

    /// Recycle the discard pile if the deck is empty, then draw.
    ///
    /// Recycling happens even when the hand turns out to be full; an `Err`
    /// means no card entered the hand.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<CardId> {
        self.recycle_if_empty(rng);
        self.draw_front()
    }

    /// Remove the first copy of `card` from the hand.
    pub fn take_from_hand(&mut self, card: CardId) -> Result<CardId> {
        let idx = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(BattleError::CardNotInHand(card))?;
        Ok(self.hand.remove(idx))
    }

    /// Put a resolved card on top of the discard pile.
    pub fn discard_card(&mut self, card: CardId) {
        self.discard.push(card);
    }
}
