//! Click bindings between hand visuals and cards.
//!
//! Every card visual the presentation layer creates gets a fresh `VisualId`.
//! Clicking a visual reports that ID back; the binding turns it into the
//! `CardId` to play. Refreshing the hand releases every binding before the
//! visuals are destroyed, so a click on a stale visual resolves to nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Handle for one card visual in the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VisualId(pub u64);

impl std::fmt::Display for VisualId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Visual({})", self.0)
    }
}

/// Live visual-to-card bindings.
///
/// IDs are never reused, even across `release_all`.
#[derive(Clone, Debug, Default)]
pub struct HandBindings {
    bound: FxHashMap<VisualId, CardId>,
    order: Vec<VisualId>,
    next_id: u64,
}

impl HandBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new visual to `card`.
    pub fn bind(&mut self, card: CardId) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        self.bound.insert(id, card);
        self.order.push(id);
        id
    }

    /// The card a live visual is bound to.
    #[must_use]
    pub fn resolve(&self, visual: VisualId) -> Option<CardId> {
        self.bound.get(&visual).copied()
    }

    /// Release every binding, returning the visuals in creation order.
    pub fn release_all(&mut self) -> Vec<VisualId> {
        self.bound.clear();
        std::mem::take(&mut self.order)
    }

    /// Live bindings in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (VisualId, CardId)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.bound.get(id).map(|&card| (*id, card)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
