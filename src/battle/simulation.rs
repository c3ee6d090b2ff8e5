//! The battle state machine.
//!
//! `Battle` owns the state, RNG, clock and timers of one battle and drives a
//! `Presenter`. Player requests (`draw_card`, `play_card`, `click_card`,
//! `end_player_turn`) run synchronously. The opponent's action and the turn
//! handback run from timers when the caller moves time forward with
//! `advance`, `advance_to` or `run_until_idle`.
//!
//! Every request either applies fully or returns an `Err` without touching
//! the state. The one exception is a draw that finds the deck empty: the
//! discard pile is shuffled back in before the hand-capacity check, so a
//! `HandFull` rejection can still leave the piles reshuffled. Once a side is
//! defeated every request returns `BattleError::GameOver`.
//!
//! At most one turn timer is pending at a time. Its `TimerId` is kept as a
//! cancellation token, and `reset` or a terminal transition cancels it.

use tracing::{debug, info, trace};

use crate::cards::{CardId, CardPool, CardRegistry};
use crate::core::action::{Command, CommandRecord};
use crate::core::config::BattleConfig;
use crate::core::error::{BattleError, Result};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::side::Side;
use crate::core::state::{BattleState, Phase};
use crate::events::{BattleEvent, EventLog};
use crate::presentation::{HandBindings, NullPresenter, Presenter, StatusView, VisualId};
use crate::rules::{resolve_card, resolve_intent, CoinFlipOpponent, GameResult, Intent, OpponentScript, Resolution};
use crate::schedule::{Fired, ManualClock, Scheduler, Tick, TimerId};
use crate::zones::CardPiles;

/// Timer payloads. `epoch` and `turn` pin a timer to the battle and turn
/// that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scheduled {
    ResolveOpponent { epoch: u32, turn: u32 },
    HandBack { epoch: u32, turn: u32 },
}

/// One battle between the player and a scripted opponent.
pub struct Battle<P = NullPresenter, O = CoinFlipOpponent> {
    config: BattleConfig,
    registry: CardRegistry,
    pool: Vec<CardId>,
    state: BattleState,
    rng: GameRng,
    clock: ManualClock,
    scheduler: Scheduler<Scheduled>,
    bindings: HandBindings,
    presenter: P,
    opponent: O,
    turn_timer: Option<TimerId>,
    history: Vec<CommandRecord>,
    events: EventLog,
    epoch: u32,
}

impl<P: Presenter, O: OpponentScript> Battle<P, O> {
    /// Create a battle and run initialization: shuffle, opening hand,
    /// first intent, first status render.
    pub fn new(config: BattleConfig, pool: CardPool, presenter: P, opponent: O) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, pool, presenter, opponent, rng)
    }

    /// Like `new`, but draws from `rng` instead of seeding from the config.
    pub fn with_rng(
        config: BattleConfig,
        pool: CardPool,
        presenter: P,
        opponent: O,
        rng: GameRng,
    ) -> Result<Self> {
        config.validate()?;
        if pool.is_empty() {
            return Err(BattleError::EmptyPool);
        }
        let (registry, cards) = pool.into_parts();
        let placeholder = BattleState::new(
            config.starting_health,
            CardPiles::new(Vec::new(), config.hand_capacity),
            Intent::Attack,
        );

        let mut battle = Self {
            config,
            registry,
            pool: cards,
            state: placeholder,
            rng,
            clock: ManualClock::new(),
            scheduler: Scheduler::new(),
            bindings: HandBindings::new(),
            presenter,
            opponent,
            turn_timer: None,
            history: Vec::new(),
            events: EventLog::new(),
            epoch: 0,
        };
        battle.initialize();
        Ok(battle)
    }

    fn initialize(&mut self) {
        let mut piles = CardPiles::new(self.pool.clone(), self.config.hand_capacity);
        piles.shuffle_deck(&mut self.rng);
        self.state = BattleState::new(self.config.starting_health, piles, Intent::Attack);
        self.record(BattleEvent::DeckShuffled {
            cards: self.pool.len(),
        });

        for _ in 0..self.config.opening_hand {
            if let Err(err) = self.draw_internal() {
                debug!(error = %err, "opening hand draw skipped");
            }
        }

        self.choose_intent();
        self.render_status();
        debug!(
            cards = self.pool.len(),
            hand = self.state.piles.hand().len(),
            intent = %self.state.intent,
            "battle initialized"
        );
    }

    // === Player requests ===

    /// Draw one card. Player turn only.
    pub fn draw_card(&mut self) -> Result<CardId> {
        let command = Command::DrawCard;
        self.ensure_player_turn().map_err(|e| reject(command, e))?;
        let card = self.draw_internal().map_err(|e| reject(command, e))?;
        self.record_command(command);
        Ok(card)
    }

    /// Play the first copy of `card` in hand. Player turn only.
    pub fn play_card(&mut self, card: CardId) -> Result<Resolution> {
        let command = Command::PlayCard(card);
        self.ensure_player_turn().map_err(|e| reject(command, e))?;
        if !self.state.piles.hand_contains(card) {
            return Err(reject(command, BattleError::CardNotInHand(card)));
        }
        let definition = self
            .registry
            .lookup(card)
            .map_err(|e| reject(command, e))?
            .clone();

        self.state.piles.take_from_hand(card)?;
        let resolution = resolve_card(&mut self.state.combatants, &definition);
        self.state.piles.discard_card(card);

        self.record_command(command);
        self.record(BattleEvent::CardPlayed { card, resolution });
        debug!(%card, kind = %definition.kind, value = definition.value, "card played");

        self.render_status();
        self.refresh_hand();

        if self.state.combatant(Side::Opponent).is_dead() {
            self.finish(GameResult::Victory);
        }
        Ok(resolution)
    }

    /// Play the card bound to a hand visual.
    pub fn click_card(&mut self, visual: VisualId) -> Result<Resolution> {
        let card = self
            .bindings
            .resolve(visual)
            .ok_or(BattleError::UnknownVisual(visual))
            .map_err(|e| {
                debug!(%visual, "click on unbound visual ignored");
                e
            })?;
        self.play_card(card)
    }

    /// End the player's turn and schedule the opponent's action.
    pub fn end_player_turn(&mut self) -> Result<()> {
        let command = Command::EndTurn;
        self.ensure_player_turn().map_err(|e| reject(command, e))?;

        self.state.phase = Phase::OpponentTurnPending;
        self.record_command(command);
        self.record(BattleEvent::TurnEnded {
            turn: self.state.turn_number,
        });
        self.render_status();

        let deadline = self.clock.now() + self.config.opponent_delay;
        self.schedule_turn_timer(
            deadline,
            Scheduled::ResolveOpponent {
                epoch: self.epoch,
                turn: self.state.turn_number,
            },
        );
        debug!(turn = self.state.turn_number, %deadline, "player turn ended");
        Ok(())
    }

    /// Dispatch a `Command`. Used for replays.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::DrawCard => self.draw_card().map(|_| ()),
            Command::PlayCard(card) => self.play_card(card).map(|_| ()),
            Command::EndTurn => self.end_player_turn(),
        }
    }

    /// Cancel the pending turn timer and start over with a fresh shuffle.
    ///
    /// The RNG stream continues, so a reset battle deals a different hand.
    /// Command history starts empty again; the event log keeps the whole
    /// session with a `BattleReset` marker between battles.
    pub fn reset(&mut self) {
        let cancelled = self.cancel_turn_timer();
        self.epoch += 1;
        self.history.clear();

        let stale = self.bindings.release_all();
        self.presenter.destroy_card_visuals(&stale);

        self.record(BattleEvent::BattleReset);
        debug!(cancelled, epoch = self.epoch, "battle reset");
        self.initialize();
    }

    // === Time ===

    /// Move time forward by `ticks`, firing due timers. Returns how many fired.
    pub fn advance(&mut self, ticks: u64) -> usize {
        let target = self.clock.now() + ticks;
        self.advance_to(target)
    }

    /// Move time forward to `target`, firing due timers in deadline order.
    pub fn advance_to(&mut self, target: Tick) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.scheduler.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock.advance_to(deadline);
            if let Some(timer) = self.scheduler.pop_due(deadline) {
                self.fire(timer);
                fired += 1;
            }
        }
        self.clock.advance_to(target);
        fired
    }

    /// Fire timers until none are pending. Returns how many fired.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.scheduler.next_deadline() {
            fired += self.advance_to(deadline);
        }
        fired
    }

    fn fire(&mut self, timer: Fired<Scheduled>) {
        if self.turn_timer == Some(timer.id) {
            self.turn_timer = None;
        }
        match timer.payload {
            Scheduled::ResolveOpponent { epoch, turn } => {
                if self.is_current(epoch, turn, Phase::OpponentTurnPending) {
                    self.resolve_opponent();
                } else {
                    trace!(timer = %timer.id, "stale opponent timer discarded");
                }
            }
            Scheduled::HandBack { epoch, turn } => {
                if self.is_current(epoch, turn, Phase::OpponentTurnResolving) {
                    self.hand_back();
                } else {
                    trace!(timer = %timer.id, "stale handback timer discarded");
                }
            }
        }
    }

    fn is_current(&self, epoch: u32, turn: u32, phase: Phase) -> bool {
        epoch == self.epoch && turn == self.state.turn_number && self.state.phase == phase
    }

    fn resolve_opponent(&mut self) {
        self.state.phase = Phase::OpponentTurnResolving;

        let intent = self.state.intent;
        let amount = self.opponent.roll(intent, &self.config, &mut self.rng);
        let resolution = resolve_intent(&mut self.state.combatants, intent, amount);
        self.record(BattleEvent::OpponentActed {
            intent,
            amount,
            resolution,
        });
        debug!(%intent, amount, "opponent acted");
        self.render_status();

        if self.state.combatant(Side::Player).is_dead() {
            self.finish(GameResult::Defeat);
            return;
        }

        let deadline = self.clock.now() + self.config.handback_delay;
        self.schedule_turn_timer(
            deadline,
            Scheduled::HandBack {
                epoch: self.epoch,
                turn: self.state.turn_number,
            },
        );
    }

    fn hand_back(&mut self) {
        self.state.advance_turn();
        self.record(BattleEvent::TurnStarted {
            turn: self.state.turn_number,
        });

        if let Err(err) = self.draw_internal() {
            debug!(error = %err, "turn start draw skipped");
        }
        self.choose_intent();
        self.render_status();
        debug!(turn = self.state.turn_number, "turn handed back to player");
    }

    // === Internals ===

    fn ensure_player_turn(&self) -> Result<()> {
        if let Some(result) = self.state.phase.result() {
            return Err(BattleError::GameOver(result));
        }
        if !self.state.is_player_turn() {
            return Err(BattleError::NotPlayerTurn);
        }
        Ok(())
    }

    fn draw_internal(&mut self) -> Result<CardId> {
        let recycled = self.state.piles.recycle_if_empty(&mut self.rng);
        if recycled > 0 {
            self.record(BattleEvent::DeckRecycled { cards: recycled });
            debug!(cards = recycled, "discard pile shuffled back into deck");
        }

        let card = self.state.piles.draw_front()?;
        self.record(BattleEvent::CardDrawn { card });
        self.spawn_visual(card);
        self.render_status();
        Ok(card)
    }

    fn choose_intent(&mut self) {
        self.state.intent = self.opponent.choose_intent(&mut self.rng);
        self.record(BattleEvent::IntentChosen {
            intent: self.state.intent,
        });
    }

    fn finish(&mut self, result: GameResult) {
        self.state.phase = match result {
            GameResult::Victory => Phase::OpponentDefeated,
            GameResult::Defeat => Phase::PlayerDefeated,
        };
        self.cancel_turn_timer();
        self.record(BattleEvent::BattleEnded { result });
        match result {
            GameResult::Victory => info!("Victory: Opponent has been defeated!"),
            GameResult::Defeat => info!("Game Over: Player has died!"),
        }
        self.render_status();
    }

    fn schedule_turn_timer(&mut self, deadline: Tick, payload: Scheduled) {
        self.cancel_turn_timer();
        self.turn_timer = Some(self.scheduler.schedule(deadline, payload));
    }

    /// Cancel the pending turn timer, if any. Returns whether one was pending.
    fn cancel_turn_timer(&mut self) -> bool {
        match self.turn_timer.take() {
            Some(id) => self.scheduler.cancel(id).is_some(),
            None => false,
        }
    }

    fn spawn_visual(&mut self, card: CardId) {
        let visual = self.bindings.bind(card);
        if let Some(definition) = self.registry.get(card) {
            self.presenter.spawn_card_visual(visual, definition);
        }
    }

    fn refresh_hand(&mut self) {
        let stale = self.bindings.release_all();
        self.presenter.destroy_card_visuals(&stale);
        for card in self.state.piles.hand().to_vec() {
            self.spawn_visual(card);
        }
    }

    fn render_status(&mut self) {
        let view = StatusView::from_state(&self.state);
        self.presenter.render_status(&view);
    }

    fn record(&mut self, event: BattleEvent) {
        self.events
            .push(self.clock.now(), self.state.turn_number, event);
    }

    fn record_command(&mut self, command: Command) {
        let sequence = self.state.next_sequence();
        self.history.push(CommandRecord::new(
            command,
            self.state.turn_number,
            self.clock.now(),
            sequence,
        ));
    }
}

impl<P, O> Battle<P, O> {
    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.state.is_player_turn()
    }

    /// The result, once the battle is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.phase.result()
    }

    #[must_use]
    pub fn status_view(&self) -> StatusView {
        StatusView::from_state(&self.state)
    }

    /// Cards in hand, oldest first.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        self.state.piles.hand()
    }

    /// Live hand visuals and the cards they play.
    pub fn hand_visuals(&self) -> impl Iterator<Item = (VisualId, CardId)> + '_ {
        self.bindings.iter()
    }

    /// Accepted player commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Token of the pending opponent or handback timer.
    #[must_use]
    pub fn turn_timer(&self) -> Option<TimerId> {
        self.turn_timer
    }

    /// Whether the timer behind `id` has yet to fire or be cancelled.
    #[must_use]
    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.scheduler.is_pending(id)
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

fn reject(command: Command, err: BattleError) -> BattleError {
    debug!(%command, error = %err, "request rejected");
    err
}
