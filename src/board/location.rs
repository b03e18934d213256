//! Locations on the board.
//!
//! A location is one of three kinds, each carrying only what it needs:
//! - `Rest`: where players start every day. No state.
//! - `Set`: a filming location with shot counters, extra roles and the
//!   day's scene card.
//! - `Office`: sells rank upgrades.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, RoleId};
use crate::core::Currency;

/// Index of a location on the `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u16);

impl LocationId {
    /// Create a new location ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One shot counter on a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Take {
    /// Ordinal label, starting at 1.
    pub number: u8,
    active: bool,
}

impl Take {
    /// Create an active take.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            active: true,
        }
    }

    /// True while the counter is still on the board.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// A rank upgrade sold at the office.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    /// Rank bought (2-6).
    pub level: u8,
    pub currency: Currency,
    pub cost: u32,
}

impl std::fmt::Display for Upgrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.cost == 1 { "" } else { "s" };
        write!(f, "Rank {}: {} {}{}", self.level, self.cost, self.currency, plural)
    }
}

/// Shooting state of a set.
///
/// The takes and extras are fixed for the whole game. The card changes each
/// day. A set is wrapped when it has no card or no active takes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetState {
    takes: Vec<Take>,
    extras: SmallVec<[RoleId; 4]>,
    card: Option<CardId>,
}

impl SetState {
    /// Create a set with `take_count` shot counters numbered from 1.
    pub fn new(take_count: u8, extras: impl IntoIterator<Item = RoleId>) -> Self {
        Self {
            takes: (1..=take_count).map(Take::new).collect(),
            extras: extras.into_iter().collect(),
            card: None,
        }
    }

    /// The scene card dealt here today.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        self.card
    }

    /// Extra roles, in board order.
    #[must_use]
    pub fn extras(&self) -> &[RoleId] {
        &self.extras
    }

    #[must_use]
    pub fn takes(&self) -> &[Take] {
        &self.takes
    }

    /// How many shot counters remain.
    #[must_use]
    pub fn active_takes(&self) -> usize {
        self.takes.iter().filter(|t| t.active).count()
    }

    /// True once the scene is done for the day, or when no card was dealt.
    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.card.is_none() || self.active_takes() == 0
    }

    /// Place the day's card and put every shot counter back.
    pub(crate) fn deal(&mut self, card: CardId) {
        self.card = Some(card);
        self.restore_takes();
    }

    /// Clear the card and put every shot counter back.
    pub(crate) fn reset_for_day(&mut self) {
        self.card = None;
        self.restore_takes();
    }

    /// Remove one shot counter, lowest active number first.
    ///
    /// Returns the number removed, or `None` if none were left.
    pub(crate) fn remove_take(&mut self) -> Option<u8> {
        let take = self
            .takes
            .iter_mut()
            .filter(|t| t.active)
            .min_by_key(|t| t.number)?;
        take.active = false;
        Some(take.number)
    }

    fn restore_takes(&mut self) {
        for take in &mut self.takes {
            take.active = true;
        }
    }
}

/// What kind of location this is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    /// Starting point of each day.
    Rest,
    /// Filming location.
    Set(SetState),
    /// Sells rank upgrades.
    Office(Vec<Upgrade>),
}

/// A node of the board graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    neighbors: SmallVec<[LocationId; 6]>,
    pub kind: LocationKind,
}

impl Location {
    /// Create a location with no neighbors yet.
    pub fn new(name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            neighbors: SmallVec::new(),
            kind,
        }
    }

    /// Adjacent locations.
    #[must_use]
    pub fn neighbors(&self) -> &[LocationId] {
        &self.neighbors
    }

    /// Add an edge from this location. Duplicates are ignored.
    pub(crate) fn add_neighbor(&mut self, other: LocationId) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }

    #[must_use]
    pub fn is_rest(&self) -> bool {
        matches!(self.kind, LocationKind::Rest)
    }

    #[must_use]
    pub fn is_office(&self) -> bool {
        matches!(self.kind, LocationKind::Office(_))
    }

    /// Shooting state, if this is a set.
    #[must_use]
    pub fn as_set(&self) -> Option<&SetState> {
        match &self.kind {
            LocationKind::Set(set) => Some(set),
            _ => None,
        }
    }

    pub(crate) fn as_set_mut(&mut self) -> Option<&mut SetState> {
        match &mut self.kind {
            LocationKind::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Upgrades on sale, if this is the office.
    #[must_use]
    pub fn upgrades(&self) -> Option<&[Upgrade]> {
        match &self.kind {
            LocationKind::Office(upgrades) => Some(upgrades),
            _ => None,
        }
    }

    /// The upgrade to `level` paid in `currency`, if sold here.
    #[must_use]
    pub fn find_upgrade(&self, level: u8, currency: Currency) -> Option<&Upgrade> {
        self.upgrades()?
            .iter()
            .find(|u| u.level == level && u.currency == currency)
    }
}
