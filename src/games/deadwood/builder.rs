//! Builder for sessions on the standard board.

use crate::core::{ConfigError, Dice, SessionConfig};
use crate::data::{BoardData, CardData};
use crate::rules::Session;

/// The standard board, as JSON.
pub const BOARD_JSON: &str = include_str!("board.json");

/// The starter deck, as JSON.
pub const CARDS_JSON: &str = include_str!("cards.json");

/// Parse the standard board.
///
/// # Errors
///
/// Only if the embedded JSON is malformed.
pub fn standard_board() -> Result<BoardData, ConfigError> {
    BoardData::from_json(BOARD_JSON)
}

/// Parse the starter deck.
///
/// # Errors
///
/// Only if the embedded JSON is malformed.
pub fn standard_deck() -> Result<Vec<CardData>, ConfigError> {
    CardData::deck_from_json(CARDS_JSON)
}

/// Builder for a session on the standard board.
///
/// ```
/// use rust_deadwood::games::deadwood::DeadwoodBuilder;
///
/// let session = DeadwoodBuilder::new().player_count(4).seed(42).build().unwrap();
/// assert_eq!(session.total_days(), 4);
/// assert_eq!(session.board().sets().len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct DeadwoodBuilder {
    player_count: usize,
    seed: u64,
}

impl Default for DeadwoodBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: 0,
        }
    }
}

impl DeadwoodBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players. Checked in `build`.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn config(&self) -> Result<SessionConfig, ConfigError> {
        Ok(SessionConfig::new(self.player_count)?.with_seed(self.seed))
    }

    /// Build a session with seeded dice.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPlayerCount` outside 2-8.
    pub fn build(self) -> Result<Session, ConfigError> {
        Session::setup(self.config()?, &standard_board()?, &standard_deck()?)
    }

    /// Build a session with injected dice. The seed is ignored.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPlayerCount` outside 2-8.
    pub fn build_with_dice<D: Dice>(self, dice: D) -> Result<Session<D>, ConfigError> {
        Session::with_dice(self.config()?, &standard_board()?, &standard_deck()?, dice)
    }
}
