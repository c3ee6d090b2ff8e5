//! Builder for `Battle`.

use crate::cards::CardPool;
use crate::core::config::BattleConfig;
use crate::core::rng::GameRng;
use crate::core::error::Result;
use crate::presentation::{NullPresenter, Presenter};
use crate::rules::{CoinFlipOpponent, OpponentScript};

use super::simulation::Battle;

/// Builder for creating a `Battle`.
///
/// Defaults to the starter pool, the default config, a `NullPresenter` and a
/// `CoinFlipOpponent`.
pub struct BattleBuilder<P = NullPresenter, O = CoinFlipOpponent> {
    config: BattleConfig,
    pool: Option<CardPool>,
    rng: Option<GameRng>,
    presenter: P,
    opponent: O,
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self {
            config: BattleConfig::default(),
            pool: None,
            rng: None,
            presenter: NullPresenter,
            opponent: CoinFlipOpponent,
        }
    }
}

impl BattleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Presenter, O: OpponentScript> BattleBuilder<P, O> {
    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn pool(mut self, pool: CardPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Use an existing RNG, e.g. one restored from a `GameRngState`.
    #[must_use]
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    #[must_use]
    pub fn presenter<Q: Presenter>(self, presenter: Q) -> BattleBuilder<Q, O> {
        BattleBuilder {
            config: self.config,
            pool: self.pool,
            rng: self.rng,
            presenter,
            opponent: self.opponent,
        }
    }

    #[must_use]
    pub fn opponent<R: OpponentScript>(self, opponent: R) -> BattleBuilder<P, R> {
        BattleBuilder {
            config: self.config,
            pool: self.pool,
            rng: self.rng,
            presenter: self.presenter,
            opponent,
        }
    }

    /// Validate the config and pool, then build and initialize the battle.
    pub fn build(self) -> Result<Battle<P, O>> {
        let pool = self.pool.unwrap_or_else(CardPool::starter);
        match self.rng {
            Some(rng) => Battle::with_rng(self.config, pool, self.presenter, self.opponent, rng),
            None => Battle::new(self.config, pool, self.presenter, self.opponent),
        }
    }
}
