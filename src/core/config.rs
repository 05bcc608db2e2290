//! Match configuration.
//!
//! Tunable constants live here instead of being scattered through the
//! engine. Defaults reproduce the standard game; a test harness can dial
//! them (small pools, low health) to force edge cases quickly.

use serde::{Deserialize, Serialize};

/// Minimum cost of any card in the deck. A drafter whose remaining points
/// fall below the cheapest card they could still buy is no longer an
/// eligible drafter.
pub const MIN_CARD_COST: u32 = 2;

/// Configuration for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting (and maximum) player health.
    pub starting_health: i32,

    /// The draft pool is refilled up to this size at each draft phase entry.
    pub draft_pool_size: usize,

    /// Enable suit synergies during battle: 2+ Hearts heal their
    /// controller each round, 3+ Clubs damage the opposing battlefield.
    /// Off by default - an optional rules extension.
    pub suit_synergies: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 20,
            draft_pool_size: 5,
            suit_synergies: false,
        }
    }
}

impl GameConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting health.
    #[must_use]
    pub fn starting_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        self.starting_health = health;
        self
    }

    /// Set draft pool capacity.
    #[must_use]
    pub fn draft_pool_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Draft pool must hold at least one card");
        self.draft_pool_size = size;
        self
    }

    /// Enable or disable suit synergies.
    #[must_use]
    pub fn suit_synergies(mut self, enabled: bool) -> Self {
        self.suit_synergies = enabled;
        self
    }
}
