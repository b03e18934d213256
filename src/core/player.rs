//! Player identification, per-player storage and the player model.
//!
//! ## PlayerId
//!
//! Type-safe player identifier for the 2-8 players a session supports.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! Resources (rank, dollars, credits), position on the board, the role being
//! worked and the per-turn flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::CommandError;
use crate::board::LocationId;
use crate::cards::RoleId;

/// Lowest rank a player can hold. Every player starts here.
pub const MIN_RANK: u8 = 1;

/// Highest rank a player can buy.
pub const MAX_RANK: u8 = 6;

/// Player identifier.
///
/// Player indices are 0-based and follow turn order: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_deadwood::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player, in turn order.
///
/// ## Example
///
/// ```
/// use rust_deadwood::core::{PlayerId, PlayerMap};
///
/// let mut dollars: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
///
/// dollars[PlayerId::new(1)] += 3;
/// assert_eq!(dollars[PlayerId::new(1)], 3);
/// assert_eq!(dollars[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// The two currencies a player holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Primary currency: paid for extra roles and wrap bonuses.
    Dollar,
    /// Secondary currency: paid for starring roles.
    Credit,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Dollar => write!(f, "dollar"),
            Currency::Credit => write!(f, "credit"),
        }
    }
}

impl FromStr for Currency {
    type Err = CommandError;

    /// Accepts `dollar`/`credit`, singular or plural, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dollar" | "dollars" | "$" => Ok(Currency::Dollar),
            "credit" | "credits" | "cr" => Ok(Currency::Credit),
            _ => Err(CommandError::UnknownCurrency(s.to_string())),
        }
    }
}

/// What a player has done so far this turn.
///
/// Plain data; reset at the start of each of the player's turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    pub moved: bool,
    pub took_role: bool,
    pub acted: bool,
    pub rehearsed: bool,
}

impl TurnFlags {
    /// Clear every flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name (the player's colour).
    pub name: String,
    rank: u8,
    /// Primary currency balance.
    pub dollars: u32,
    /// Secondary currency balance.
    pub credits: u32,
    /// Where the player stands.
    pub location: LocationId,
    role: Option<RoleId>,
    rehearsal_bonus: u8,
    /// Per-turn action flags.
    pub turn: TurnFlags,
}

impl Player {
    /// Create a rank-1 player with the given starting dollars.
    pub fn new(name: impl Into<String>, dollars: u32, location: LocationId) -> Self {
        Self {
            name: name.into(),
            rank: MIN_RANK,
            dollars,
            credits: 0,
            location,
            role: None,
            rehearsal_bonus: 0,
            turn: TurnFlags::default(),
        }
    }

    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// The role currently being worked, if any.
    #[must_use]
    pub fn role(&self) -> Option<RoleId> {
        self.role
    }

    #[must_use]
    pub fn rehearsal_bonus(&self) -> u8 {
        self.rehearsal_bonus
    }

    /// True while the player occupies a role.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.role.is_some()
    }

    /// Final score: dollars + credits + rank.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.dollars + self.credits + u32::from(self.rank)
    }

    /// Balance held in a currency.
    #[must_use]
    pub fn balance(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Dollar => self.dollars,
            Currency::Credit => self.credits,
        }
    }

    /// Add to a balance.
    pub fn earn(&mut self, currency: Currency, amount: u32) {
        match currency {
            Currency::Dollar => self.dollars += amount,
            Currency::Credit => self.credits += amount,
        }
    }

    /// Deduct from a balance. Callers check affordability first.
    pub fn pay(&mut self, currency: Currency, amount: u32) {
        match currency {
            Currency::Dollar => self.dollars -= amount,
            Currency::Credit => self.credits -= amount,
        }
    }

    /// Raise the rank. Rank never goes down.
    pub fn promote(&mut self, level: u8) {
        debug_assert!(level > self.rank && level <= MAX_RANK);
        self.rank = self.rank.max(level.min(MAX_RANK));
    }

    /// Change the role reference. The rehearsal bonus always starts over.
    pub(crate) fn set_role(&mut self, role: Option<RoleId>) {
        self.role = role;
        self.rehearsal_bonus = 0;
    }

    pub(crate) fn add_rehearsal(&mut self) {
        self.rehearsal_bonus += 1;
    }

    pub(crate) fn clear_rehearsal(&mut self) {
        self.rehearsal_bonus = 0;
    }
}
