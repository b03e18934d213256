//! Scene cards.
//!
//! A `SceneCard` is static data: title, budget, scene number, flavour text
//! and its starring roles. Cards are never mutated during play; who works a
//! starring role is tracked in the `RoleTable`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::role::RoleId;

/// Index of a card in the `CardRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position in the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A scene card.
///
/// ## Example
///
/// ```
/// use rust_deadwood::cards::{CardId, RoleId, SceneCard};
///
/// let card = SceneCard::new(CardId::new(0), "Evil Wears a Hat", 4, 7)
///     .with_description("Calhoun is separated from the group.")
///     .with_role(RoleId::new(0));
///
/// assert_eq!(card.budget, 4);
/// assert_eq!(card.roles.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneCard {
    /// Registry index.
    pub id: CardId,

    /// Film title.
    pub title: String,

    /// Difficulty of acting the scene, and the number of dice rolled when it wraps.
    pub budget: u8,

    /// Scene number printed on the card.
    pub scene_number: u32,

    /// Flavour text.
    pub description: String,

    /// Starring roles, in printed order.
    pub roles: SmallVec<[RoleId; 3]>,
}

impl SceneCard {
    /// Create a card with no roles.
    pub fn new(id: CardId, title: impl Into<String>, budget: u8, scene_number: u32) -> Self {
        Self {
            id,
            title: title.into(),
            budget,
            scene_number,
            description: String::new(),
            roles: SmallVec::new(),
        }
    }

    /// Set the flavour text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a starring role.
    #[must_use]
    pub fn with_role(mut self, role: RoleId) -> Self {
        self.roles.push(role);
        self
    }
}

impl std::fmt::Display for SceneCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (scene {}, budget {})",
            self.title, self.scene_number, self.budget
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(id.index(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_card_builder() {
        let card = SceneCard::new(CardId::new(1), "Law and the Old West", 2, 20)
            .with_description("A stranger rides into town.")
            .with_role(RoleId::new(4))
            .with_role(RoleId::new(5));

        assert_eq!(card.title, "Law and the Old West");
        assert_eq!(card.roles.as_slice(), &[RoleId::new(4), RoleId::new(5)]);
        assert_eq!(card.to_string(), "Law and the Old West (scene 20, budget 2)");
    }
}
