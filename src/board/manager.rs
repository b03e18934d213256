//! The board: every location, indexed by id and by name.
//!
//! The topology is fixed once the board is built. Only the shooting state
//! inside sets changes during play.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

use super::location::{Location, LocationId, SetState};
use crate::cards::CardId;
use crate::core::ConfigError;

/// All locations and their adjacency.
///
/// ## Usage
///
/// ```
/// use rust_deadwood::board::{Board, Location, LocationKind, SetState};
///
/// let board = Board::build(vec![
///     (Location::new("Trailer", LocationKind::Rest), vec!["Saloon"]),
///     (Location::new("Saloon", LocationKind::Set(SetState::new(2, []))), vec!["Office"]),
///     (Location::new("Office", LocationKind::Office(vec![])), vec![]),
/// ])
/// .unwrap();
///
/// let saloon = board.find("saloon").unwrap();
/// assert!(board.is_adjacent(board.rest(), saloon));
/// assert!(board.is_adjacent(saloon, board.rest()));
/// assert_eq!(board.sets(), &[saloon]);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    locations: Vec<Location>,

    /// Lowercased name -> id
    by_name: FxHashMap<String, LocationId>,

    /// Sets in board order. The daily deal follows this order.
    sets: Vec<LocationId>,

    rest: LocationId,
    office: LocationId,
}

impl Board {
    /// Build a board from locations and the names of their neighbors.
    ///
    /// Every listed edge is added in both directions.
    ///
    /// # Errors
    ///
    /// Fails when names repeat or are unknown, when there is not exactly one
    /// rest location and one office, when there are no sets or a set has no
    /// takes, or when some location cannot be reached.
    pub fn build<S: AsRef<str>>(
        entries: Vec<(Location, Vec<S>)>,
    ) -> Result<Self, ConfigError> {
        let mut by_name = FxHashMap::default();
        for (i, (location, _)) in entries.iter().enumerate() {
            let key = name_key(&location.name);
            if by_name.insert(key, LocationId::new(i as u16)).is_some() {
                return Err(ConfigError::DuplicateLocation(location.name.clone()));
            }
        }

        let mut edges = Vec::new();
        for (i, (location, neighbors)) in entries.iter().enumerate() {
            let from = LocationId::new(i as u16);
            for neighbor in neighbors {
                let neighbor = neighbor.as_ref();
                let to = by_name.get(&name_key(neighbor)).copied().ok_or_else(|| {
                    ConfigError::UnknownNeighbor {
                        location: location.name.clone(),
                        neighbor: neighbor.to_string(),
                    }
                })?;
                if to == from {
                    return Err(ConfigError::SelfNeighbor(location.name.clone()));
                }
                edges.push((from, to));
            }
        }

        let mut locations: Vec<Location> = entries.into_iter().map(|(l, _)| l).collect();
        for (from, to) in edges {
            locations[from.index()].add_neighbor(to);
            locations[to.index()].add_neighbor(from);
        }

        let rests = ids_where(&locations, Location::is_rest);
        if rests.len() != 1 {
            return Err(ConfigError::RestCount(rests.len()));
        }
        let offices = ids_where(&locations, Location::is_office);
        if offices.len() != 1 {
            return Err(ConfigError::OfficeCount(offices.len()));
        }
        let sets = ids_where(&locations, |l| l.as_set().is_some());
        if sets.is_empty() {
            return Err(ConfigError::NoSets);
        }
        for &id in &sets {
            let location = &locations[id.index()];
            if location.as_set().is_some_and(|s| s.takes().is_empty()) {
                return Err(ConfigError::NoTakes(location.name.clone()));
            }
        }

        let board = Self {
            locations,
            by_name,
            sets,
            rest: rests[0],
            office: offices[0],
        };
        board.check_connected()?;
        Ok(board)
    }

    fn check_connected(&self) -> Result<(), ConfigError> {
        let mut seen = vec![false; self.locations.len()];
        let mut queue = VecDeque::from([self.rest]);
        seen[self.rest.index()] = true;

        while let Some(id) = queue.pop_front() {
            for &next in self.get(id).neighbors() {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        match seen.iter().position(|&s| !s) {
            Some(i) => Err(ConfigError::Disconnected(self.locations[i].name.clone())),
            None => Ok(()),
        }
    }

    /// Get a location.
    ///
    /// # Panics
    ///
    /// When `id` does not belong to this board.
    #[must_use]
    pub fn get(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    /// Find a location by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(&name_key(name)).copied()
    }

    /// Display name of a location.
    #[must_use]
    pub fn name(&self, id: LocationId) -> &str {
        &self.get(id).name
    }

    /// True if an edge joins `a` and `b`.
    #[must_use]
    pub fn is_adjacent(&self, a: LocationId, b: LocationId) -> bool {
        self.get(a).neighbors().contains(&b)
    }

    /// The neighbor of `from` called `name`, ignoring case.
    #[must_use]
    pub fn neighbor_named(&self, from: LocationId, name: &str) -> Option<LocationId> {
        self.find(name).filter(|&to| self.is_adjacent(from, to))
    }

    /// Sets, in board order.
    #[must_use]
    pub fn sets(&self) -> &[LocationId] {
        &self.sets
    }

    /// Where every day starts.
    #[must_use]
    pub fn rest(&self) -> LocationId {
        self.rest
    }

    /// Where ranks are sold.
    #[must_use]
    pub fn office(&self) -> LocationId {
        self.office
    }

    /// Shooting state of a location, if it is a set.
    #[must_use]
    pub fn set(&self, id: LocationId) -> Option<&SetState> {
        self.get(id).as_set()
    }

    pub(crate) fn set_mut(&mut self, id: LocationId) -> Option<&mut SetState> {
        self.locations[id.index()].as_set_mut()
    }

    /// Number of sets still shooting: a card is dealt and takes remain.
    #[must_use]
    pub fn active_set_count(&self) -> usize {
        self.sets
            .iter()
            .filter_map(|&id| self.set(id))
            .filter(|s| !s.is_wrapped())
            .count()
    }

    /// Clear every set's card and restore its takes.
    pub(crate) fn reset_all_sets(&mut self) {
        for i in 0..self.sets.len() {
            let id = self.sets[i];
            if let Some(set) = self.set_mut(id) {
                set.reset_for_day();
            }
        }
    }

    /// Deal cards to sets in board order. Returns how many were dealt.
    pub(crate) fn deal(&mut self, cards: &[CardId]) -> usize {
        let sets = self.sets.clone();
        let mut dealt = 0;
        for (id, &card) in sets.into_iter().zip(cards) {
            if let Some(set) = self.set_mut(id) {
                set.deal(card);
                dealt += 1;
            }
        }
        dealt
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over (LocationId, &Location) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId::new(i as u16), l))
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn ids_where(locations: &[Location], pred: impl Fn(&Location) -> bool) -> Vec<LocationId> {
    locations
        .iter()
        .enumerate()
        .filter(|(_, l)| pred(l))
        .map(|(i, _)| LocationId::new(i as u16))
        .collect()
}
