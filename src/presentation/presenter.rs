//! The presentation boundary.
//!
//! A battle pushes status updates and hand changes through `Presenter`. It
//! never waits on a return value. `NullPresenter` discards everything and
//! `RecordingPresenter` keeps a log, which is what tests and headless runs
//! use.

use crate::cards::{CardDefinition, CardId};

use super::bindings::VisualId;
use super::view::StatusView;

/// Receiver for everything a battle wants shown.
pub trait Presenter {
    /// Show the status panel and enable/disable draw and end-turn.
    fn render_status(&mut self, status: &StatusView);

    /// Create a clickable visual for a card in hand.
    fn spawn_card_visual(&mut self, visual: VisualId, card: &CardDefinition);

    /// Destroy hand visuals. Their bindings are already released.
    fn destroy_card_visuals(&mut self, visuals: &[VisualId]);
}

/// Presenter that ignores every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_status(&mut self, _status: &StatusView) {}

    fn spawn_card_visual(&mut self, _visual: VisualId, _card: &CardDefinition) {}

    fn destroy_card_visuals(&mut self, _visuals: &[VisualId]) {}
}

/// One call made on a `RecordingPresenter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterCall {
    Status(StatusView),
    Spawn { visual: VisualId, card: CardId },
    Destroy(Vec<VisualId>),
}

/// Presenter that records calls and tracks which visuals are alive.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
    live: Vec<(VisualId, CardId)>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Visuals spawned and not yet destroyed, in spawn order.
    #[must_use]
    pub fn live_visuals(&self) -> &[(VisualId, CardId)] {
        &self.live
    }

    /// The most recent status render.
    #[must_use]
    pub fn last_status(&self) -> Option<&StatusView> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Status(status) => Some(status),
            _ => None,
        })
    }

    /// Number of status renders.
    #[must_use]
    pub fn status_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PresenterCall::Status(_)))
            .count()
    }

    /// Forget recorded calls; live visuals are kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn render_status(&mut self, status: &StatusView) {
        self.calls.push(PresenterCall::Status(status.clone()));
    }

    fn spawn_card_visual(&mut self, visual: VisualId, card: &CardDefinition) {
        self.calls.push(PresenterCall::Spawn {
            visual,
            card: card.id,
        });
        self.live.push((visual, card.id));
    }

    fn destroy_card_visuals(&mut self, visuals: &[VisualId]) {
        self.calls.push(PresenterCall::Destroy(visuals.to_vec()));
        self.live.retain(|(id, _)| !visuals.contains(id));
    }
}
