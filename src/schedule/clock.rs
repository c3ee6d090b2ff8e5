//! Simulated monotonic time.

use serde::{Deserialize, Serialize};

/// Discrete time unit. One tick is one scheduled delay at default settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;

    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A clock that only moves when told to.
///
/// Time never runs backwards: `advance_to` an earlier tick is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualClock {
    now: Tick,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Move forward by `ticks` and return the new time.
    pub fn advance(&mut self, ticks: u64) -> Tick {
        self.now = self.now + ticks;
        self.now
    }

    /// Move forward to `tick` if it is later than now.
    pub fn advance_to(&mut self, tick: Tick) -> Tick {
        if tick > self.now {
            self.now = tick;
        }
        self.now
    }
}
