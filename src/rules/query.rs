//! Read-only views of a session.
//!
//! Snapshots are owned copies, safe to hold across later commands.

use serde::{Deserialize, Serialize};

use super::engine::{Phase, Session};
use crate::board::{Board, LocationId, Upgrade};
use crate::cards::{CardRegistry, RoleId, RoleKind, RoleTable};
use crate::core::{CommandRecord, Currency, Player, PlayerId, PlayerMap, Rejection, SessionConfig, TurnFlags};

/// A role as seen by a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleView {
    pub id: RoleId,
    pub name: String,
    pub line: String,
    pub level: u8,
    pub kind: RoleKind,
}

/// Everything about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub rank: u8,
    pub dollars: u32,
    pub credits: u32,
    pub location: LocationId,
    pub location_name: String,
    pub role: Option<RoleView>,
    pub rehearsal_bonus: u8,
    pub turn: TurnFlags,
}

/// One line of the board summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub status: LocationStatus,
    /// Name of the role being worked.
    pub role: Option<String>,
    pub active: bool,
}

impl std::fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.active { "*" } else { " " };
        write!(f, "{marker} {} in {}", self.name, self.status)?;
        if let Some(role) = &self.role {
            write!(f, ", working {role}")?;
        }
        Ok(())
    }
}

/// What is happening at a location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationStatus {
    Rest { name: String },
    Office { name: String },
    Shooting {
        name: String,
        card: String,
        scene: u32,
        takes_left: usize,
    },
    /// A set whose scene is done, or that got no card today.
    Wrapped { name: String },
}

impl std::fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationStatus::Rest { name } | LocationStatus::Office { name } => write!(f, "{name}"),
            LocationStatus::Shooting {
                name, card, scene, ..
            } => write!(f, "{name} shooting {card} scene {scene}"),
            LocationStatus::Wrapped { name } => write!(f, "{name} (wrapped)"),
        }
    }
}

/// A free role at a location, with whether the active player can take it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleListing {
    pub role: RoleView,
    pub rank_ok: bool,
}

/// An upgrade above the active player's rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeListing {
    pub level: u8,
    pub currency: Currency,
    pub cost: u32,
    pub affordable: bool,
}

/// Final tally for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub player: PlayerId,
    pub name: String,
    pub dollars: u32,
    pub credits: u32,
    pub rank: u8,
    pub total: u32,
}

impl<D> Session<D> {
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_id(&self) -> PlayerId {
        self.active
    }

    /// Current day, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.config.total_days()
    }

    /// Session-wide turn counter.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Every command issued so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<CommandRecord> {
        &self.history
    }

    /// Snapshot of the active player.
    #[must_use]
    pub fn active_player(&self) -> PlayerSnapshot {
        self.player(self.active)
    }

    /// Snapshot of any player.
    ///
    /// # Panics
    ///
    /// When `id` is not a player in this session.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> PlayerSnapshot {
        let player = &self.players[id];
        PlayerSnapshot {
            id,
            name: player.name.clone(),
            rank: player.rank(),
            dollars: player.dollars,
            credits: player.credits,
            location: player.location,
            location_name: self.board.name(player.location).to_string(),
            role: player.role().map(|r| self.role_view(r)),
            rehearsal_bonus: player.rehearsal_bonus(),
            turn: player.turn,
        }
    }

    /// Where a player is and what they are doing.
    ///
    /// # Panics
    ///
    /// When `id` is not a player in this session.
    #[must_use]
    pub fn where_is(&self, id: PlayerId) -> PlayerSummary {
        let player = &self.players[id];
        PlayerSummary {
            id,
            name: player.name.clone(),
            status: self.location_status(player.location),
            role: player.role().map(|r| self.roles.get(r).name.clone()),
            active: id == self.active,
        }
    }

    /// `where_is` for every player, in turn order.
    #[must_use]
    pub fn board_summary(&self) -> Vec<PlayerSummary> {
        self.players.player_ids().map(|id| self.where_is(id)).collect()
    }

    /// What is happening at a location.
    ///
    /// # Panics
    ///
    /// When `id` is not a location on this session's board.
    #[must_use]
    pub fn location_status(&self, id: LocationId) -> LocationStatus {
        let location = self.board.get(id);
        let name = location.name.clone();
        if location.is_rest() {
            return LocationStatus::Rest { name };
        }
        if location.is_office() {
            return LocationStatus::Office { name };
        }
        match location.as_set() {
            Some(set) if !set.is_wrapped() => match set.card() {
                Some(card) => {
                    let card = self.cards.get(card);
                    LocationStatus::Shooting {
                        name,
                        card: card.title.clone(),
                        scene: card.scene_number,
                        takes_left: set.active_takes(),
                    }
                }
                None => LocationStatus::Wrapped { name },
            },
            _ => LocationStatus::Wrapped { name },
        }
    }

    /// Names of the locations adjacent to `id`.
    ///
    /// # Panics
    ///
    /// When `id` is not a location on this session's board.
    #[must_use]
    pub fn neighbors(&self, id: LocationId) -> Vec<&str> {
        self.board
            .get(id)
            .neighbors()
            .iter()
            .map(|&n| self.board.name(n))
            .collect()
    }

    /// Free roles at a location: extras first, then the card's starring
    /// roles. Empty unless the scene there is shooting.
    ///
    /// # Panics
    ///
    /// When `id` is not a location on this session's board.
    #[must_use]
    pub fn available_roles(&self, id: LocationId) -> Vec<RoleListing> {
        let rank = self.players[self.active].rank();
        self.roles_at(id)
            .into_iter()
            .filter(|&r| self.roles.get(r).is_available())
            .map(|r| {
                let role = self.role_view(r);
                RoleListing {
                    rank_ok: role.level <= rank,
                    role,
                }
            })
            .collect()
    }

    /// Offers above the active player's rank, in office order.
    ///
    /// # Errors
    ///
    /// `Rejection::NotAtOffice` unless the active player is at the office.
    pub fn available_upgrades(&self) -> Result<Vec<UpgradeListing>, Rejection> {
        let player = &self.players[self.active];
        let office = self.board.office();
        if player.location != office {
            return Err(Rejection::NotAtOffice);
        }
        let offers: &[Upgrade] = self.board.get(office).upgrades().unwrap_or_default();
        Ok(offers
            .iter()
            .filter(|u| u.level > player.rank())
            .map(|u| UpgradeListing {
                level: u.level,
                currency: u.currency,
                cost: u.cost,
                affordable: player.balance(u.currency) >= u.cost,
            })
            .collect())
    }

    /// Final scores, highest first. `None` until the game is over.
    #[must_use]
    pub fn final_scores(&self) -> Option<Vec<ScoreLine>> {
        self.is_game_over().then(|| self.score_table())
    }

    /// The winner. `None` until the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_game_over() {
            self.leader()
        } else {
            None
        }
    }

    /// Every player's score, highest first. Ties keep turn order.
    pub(super) fn score_table(&self) -> Vec<ScoreLine> {
        let mut lines: Vec<ScoreLine> = self
            .players
            .iter()
            .map(|(id, p)| ScoreLine {
                player: id,
                name: p.name.clone(),
                dollars: p.dollars,
                credits: p.credits,
                rank: p.rank(),
                total: p.score(),
            })
            .collect();
        lines.sort_by(|a, b| b.total.cmp(&a.total));
        lines
    }

    /// Highest score, first in turn order on ties.
    pub(super) fn leader(&self) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, u32)> = None;
        for (id, player) in self.players.iter() {
            let score = player.score();
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Every role at a location while its scene is shooting.
    pub(super) fn roles_at(&self, id: LocationId) -> Vec<RoleId> {
        let Some(set) = self.board.set(id) else {
            return Vec::new();
        };
        if set.is_wrapped() {
            return Vec::new();
        }
        let mut roles: Vec<RoleId> = set.extras().to_vec();
        if let Some(card) = set.card() {
            roles.extend(self.cards.get(card).roles.iter().copied());
        }
        roles
    }

    fn role_view(&self, id: RoleId) -> RoleView {
        let role = self.roles.get(id);
        RoleView {
            id,
            name: role.name.clone(),
            line: role.line.clone(),
            level: role.level,
            kind: role.kind,
        }
    }
}
