//! Card registry for scene card lookup.
//!
//! The `CardRegistry` stores every scene card of the deck. Cards are
//! registered once at setup and addressed by `CardId`; the daily deal works
//! on a shuffled list of ids, never on the cards themselves.

use super::definition::{CardId, SceneCard};

/// Registry of scene cards.
///
/// ## Example
///
/// ```
/// use rust_deadwood::cards::{CardRegistry, SceneCard};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.register_with(|id| SceneCard::new(id, "Ghost Town", 3, 12));
///
/// assert_eq!(registry.get(id).title, "Ghost Town");
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<SceneCard>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card built from its assigned ID.
    pub fn register_with(&mut self, build: impl FnOnce(CardId) -> SceneCard) -> CardId {
        let id = CardId::new(self.cards.len() as u16);
        let card = build(id);
        debug_assert_eq!(card.id, id);
        self.cards.push(card);
        id
    }

    /// Get a card by ID.
    ///
    /// IDs are only handed out by this registry, so lookups cannot miss.
    #[must_use]
    pub fn get(&self, id: CardId) -> &SceneCard {
        &self.cards[id.index()]
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All card IDs, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len() as u16).map(CardId::new)
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &SceneCard> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = CardRegistry::new();
        let a = registry.register_with(|id| SceneCard::new(id, "A", 2, 1));
        let b = registry.register_with(|id| SceneCard::new(id, "B", 3, 2));

        assert_eq!(a, CardId::new(0));
        assert_eq!(b, CardId::new(1));
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_iter() {
        let mut registry = CardRegistry::new();
        for budget in 1..=5 {
            registry.register_with(|id| SceneCard::new(id, format!("Budget {budget}"), budget, 1));
        }

        let total: u32 = registry.iter().map(|c| u32::from(c.budget)).sum();
        assert_eq!(total, 15);
        assert!(!registry.is_empty());
    }
}
