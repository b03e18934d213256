//! Serde schema of the static game data.
//!
//! Board:
//!
//! ```json
//! { "locations": [
//!     { "type": "plain", "name": "Trailer", "neighbors": ["Main Street"] },
//!     { "type": "shooting", "name": "Main Street", "neighbors": ["Trailer"],
//!       "takes": 3,
//!       "parts": [{ "name": "Railroad Worker", "level": 1, "line": "I'm a steel-drivin' man!" }] },
//!     { "type": "office", "name": "Casting Office", "neighbors": ["Main Street"],
//!       "upgrades": [{ "level": 2, "currency": "dollar", "cost": 4 }] }
//! ] }
//! ```
//!
//! Cards are a JSON array of `CardData`.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Currency};

/// The whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    pub locations: Vec<LocationData>,
}

impl BoardData {
    /// Parse a board from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` when the text does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One node of the board, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationData {
    /// The rest location.
    Plain {
        name: String,
        #[serde(default)]
        neighbors: Vec<String>,
    },
    /// A filming location.
    Shooting {
        name: String,
        #[serde(default)]
        neighbors: Vec<String>,
        /// Number of shot counters.
        takes: u8,
        /// Extra roles.
        #[serde(default)]
        parts: Vec<RoleData>,
    },
    /// The casting office.
    Office {
        name: String,
        #[serde(default)]
        neighbors: Vec<String>,
        #[serde(default)]
        upgrades: Vec<UpgradeData>,
    },
}

impl LocationData {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            LocationData::Plain { name, .. }
            | LocationData::Shooting { name, .. }
            | LocationData::Office { name, .. } => name,
        }
    }

    #[must_use]
    pub fn neighbors(&self) -> &[String] {
        match self {
            LocationData::Plain { neighbors, .. }
            | LocationData::Shooting { neighbors, .. }
            | LocationData::Office { neighbors, .. } => neighbors,
        }
    }
}

/// A role as printed on a card or beside a set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleData {
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub line: String,
}

/// A rank upgrade offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeData {
    pub level: u8,
    pub currency: Currency,
    pub cost: u32,
}

/// A scene card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub name: String,
    pub budget: u8,
    pub scene: u32,
    #[serde(default)]
    pub description: String,
    /// Starring roles, in printed order.
    #[serde(default)]
    pub parts: Vec<RoleData>,
}

impl CardData {
    /// Parse a deck (JSON array of cards).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` when the text does not match the schema.
    pub fn deck_from_json(json: &str) -> Result<Vec<Self>, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
