//! Session configuration.
//!
//! The player count drives the rest of the setup rules:
//!
//! | Players | Days | Starting dollars |
//! |---------|------|------------------|
//! | 2-3     | 3    | 0                |
//! | 4       | 4    | 0                |
//! | 5       | 4    | 1                |
//! | 6       | 4    | 2                |
//! | 7-8     | 4    | 3                |

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a session accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a session accepts.
pub const MAX_PLAYERS: usize = 8;

/// Player names, in turn order.
pub const PLAYER_COLORS: [&str; MAX_PLAYERS] = [
    "blue", "cyan", "green", "orange", "pink", "red", "violet", "yellow",
];

/// Complete session configuration.
///
/// ```
/// use rust_deadwood::core::SessionConfig;
///
/// let config = SessionConfig::new(5).unwrap().with_seed(7);
/// assert_eq!(config.total_days(), 4);
/// assert_eq!(config.starting_dollars(), 1);
/// assert!(SessionConfig::new(9).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of players (2-8).
    pub player_count: usize,

    /// Derived from `player_count`.
    total_days: u32,

    /// Derived from `player_count`.
    starting_dollars: u32,

    /// Seed for the session's dice.
    pub seed: u64,
}

impl SessionConfig {
    /// Create the configuration for a player count.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPlayerCount` outside 2-8.
    pub fn new(player_count: usize) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(ConfigError::InvalidPlayerCount(player_count));
        }

        Ok(Self {
            player_count,
            total_days: days_for(player_count),
            starting_dollars: starting_dollars_for(player_count),
            seed: 0,
        })
    }

    /// Rebuild the configuration from its player count and seed, discarding
    /// any other field values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPlayerCount` outside 2-8.
    pub fn revalidated(&self) -> Result<Self, ConfigError> {
        Ok(Self::new(self.player_count)?.with_seed(self.seed))
    }

    /// Days played before the game ends.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Dollars each player starts with.
    #[must_use]
    pub fn starting_dollars(&self) -> u32 {
        self.starting_dollars
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Names of the players, in turn order.
    pub fn player_names(&self) -> impl Iterator<Item = &'static str> {
        PLAYER_COLORS.iter().copied().take(self.player_count)
    }
}

fn days_for(player_count: usize) -> u32 {
    if player_count <= 3 {
        3
    } else {
        4
    }
}

fn starting_dollars_for(player_count: usize) -> u32 {
    match player_count {
        0..=4 => 0,
        5 => 1,
        6 => 2,
        _ => 3,
    }
}
