//! Battle configuration.
//!
//! `BattleConfig` fixes the numbers the rules run on: starting health, hand
//! limits, the opponent's roll range, timer delays and the RNG seed. Every
//! field has a default, so partial JSON configs deserialize cleanly.

use serde::{Deserialize, Serialize};

use super::error::{BattleError, Result};

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Health both sides start with.
    pub starting_health: i32,

    /// Maximum cards in the player's hand.
    pub hand_capacity: usize,

    /// Cards drawn during initialization.
    pub opening_hand: usize,

    /// Lowest opponent attack/shield roll (inclusive).
    pub opponent_roll_min: i32,

    /// Highest opponent attack/shield roll (inclusive).
    pub opponent_roll_max: i32,

    /// Ticks between the player ending their turn and the opponent acting.
    pub opponent_delay: u64,

    /// Ticks between the opponent acting and the turn returning to the player.
    pub handback_delay: u64,

    /// Seed for shuffles, intent choice and opponent rolls.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            hand_capacity: 7,
            opening_hand: 5,
            opponent_roll_min: 3,
            opponent_roll_max: 6,
            opponent_delay: 1,
            handback_delay: 1,
            seed: 0,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting health for both sides.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, size: usize) -> Self {
        self.opening_hand = size;
        self
    }

    /// Set the opponent's inclusive roll range.
    #[must_use]
    pub fn with_opponent_rolls(mut self, min: i32, max: i32) -> Self {
        self.opponent_roll_min = min;
        self.opponent_roll_max = max;
        self
    }

    /// Set both timer delays.
    #[must_use]
    pub fn with_delays(mut self, opponent: u64, handback: u64) -> Self {
        self.opponent_delay = opponent;
        self.handback_delay = handback;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BattleError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.starting_health <= 0 {
            return Err(BattleError::InvalidConfig(format!(
                "starting_health must be positive, got {}",
                self.starting_health
            )));
        }
        if self.hand_capacity == 0 {
            return Err(BattleError::InvalidConfig(
                "hand_capacity must be at least 1".to_string(),
            ));
        }
        if self.opening_hand > self.hand_capacity {
            return Err(BattleError::InvalidConfig(format!(
                "opening_hand {} exceeds hand_capacity {}",
                self.opening_hand, self.hand_capacity
            )));
        }
        if self.opponent_roll_min < 0 || self.opponent_roll_min > self.opponent_roll_max {
            return Err(BattleError::InvalidConfig(format!(
                "opponent roll range {}..={} is invalid",
                self.opponent_roll_min, self.opponent_roll_max
            )));
        }
        Ok(())
    }
}
