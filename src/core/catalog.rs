//! Card catalog for record lookup.
//!
//! The `CardCatalog` owns every `Card` record in the cube. Boosters and
//! pools hold `CardId`s; rendering and partner-table resolution go
//! through the catalog.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};

/// Registry of card records.
///
/// ## Example
///
/// ```
/// use cube_draft::core::{Card, CardCatalog, CardId};
///
/// let mut catalog = CardCatalog::new();
/// let id = catalog.register_auto("Lightning Bolt");
///
/// assert_eq!(catalog.get_expect(id).name, "Lightning Bolt");
/// assert_eq!(catalog.find_by_name("Lightning Bolt"), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card record.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        self.register(Card::new(id, name));
        id
    }

    /// Get a card record by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card record by ID, panicking if not found.
    ///
    /// Use when the ID is known valid (e.g. taken from a booster the
    /// catalog itself populated).
    #[must_use]
    pub fn get_expect(&self, id: CardId) -> &Card {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("Card {:?} not in catalog", id))
    }

    /// Find a card by exact name.
    ///
    /// Returns the first match; cube lists hold singletons so names are
    /// unique in practice.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<CardId> {
        self.cards
            .values()
            .find(|card| card.name == name)
            .map(|card| card.id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card IDs.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.keys().copied()
    }

    /// Iterate over all card records.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}
