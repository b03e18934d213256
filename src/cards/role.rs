//! Roles and the role arena.
//!
//! Every role in the game, starring or extra, lives in one `RoleTable` and is
//! addressed by `RoleId`. Cards and sets hold ids, players hold an
//! `Option<RoleId>`, and the role holds `Option<PlayerId>` back. The session
//! keeps the two sides in step: `occupant == Some(p)` exactly when player `p`
//! references the role.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Index of a role in the `RoleTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(pub u32);

impl RoleId {
    /// Create a new role ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position in the table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a role comes from, which decides how acting it pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// Printed on a scene card. Pays credits.
    Starring,
    /// Attached to a set for the whole game. Pays dollars.
    Extra,
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleKind::Starring => write!(f, "starring"),
            RoleKind::Extra => write!(f, "extra"),
        }
    }
}

/// A role a player can work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    /// Minimum rank required (1-6).
    pub level: u8,
    /// The character's line.
    pub line: String,
    pub kind: RoleKind,
    /// Player working the role, if any.
    pub occupant: Option<PlayerId>,
}

impl Role {
    pub fn new(name: impl Into<String>, level: u8, line: impl Into<String>, kind: RoleKind) -> Self {
        Self {
            name: name.into(),
            level,
            line: line.into(),
            kind,
            occupant: None,
        }
    }

    /// True when nobody works the role.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    /// Case-insensitive name match.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (level {}) [{}]", self.name, self.level, self.kind)
    }
}

/// Arena owning every role in a session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleTable {
    roles: Vec<Role>,
}

impl RoleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role and return its id.
    pub fn insert(&mut self, role: Role) -> RoleId {
        let id = RoleId(self.roles.len() as u32);
        self.roles.push(role);
        id
    }

    /// Look up a role.
    ///
    /// Ids only come from `insert` on this table, so lookups cannot miss.
    #[must_use]
    pub fn get(&self, id: RoleId) -> &Role {
        &self.roles[id.index()]
    }

    /// Put a player on a role. The role must be free.
    pub(crate) fn occupy(&mut self, id: RoleId, player: PlayerId) {
        let role = &mut self.roles[id.index()];
        debug_assert!(role.occupant.is_none(), "role {} already occupied", role.name);
        role.occupant = Some(player);
    }

    /// Free a role, returning who was on it.
    pub(crate) fn vacate(&mut self, id: RoleId) -> Option<PlayerId> {
        self.roles[id.index()].occupant.take()
    }

    /// Number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Iterate over (RoleId, &Role) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (RoleId, &Role)> {
        self.roles
            .iter()
            .enumerate()
            .map(|(i, r)| (RoleId(i as u32), r))
    }
}
