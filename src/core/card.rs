//! Card records - static card data.
//!
//! A `Card` holds the immutable properties of one cube entry: its name,
//! external reference ids, and display metadata. Boosters and drafter
//! pools never copy `Card` values - they hold `CardId`s and resolve them
//! through the [`CardCatalog`](super::CardCatalog) when rendering.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable card record.
///
/// Created once when the cube list is imported, owned by the catalog,
/// referenced by id everywhere else.
///
/// ## Example
///
/// ```
/// use cube_draft::core::{Card, CardId};
///
/// let krav = Card::new(CardId::new(1), "Krav, the Unredeemed")
///     .with_type_line("Legendary Creature — Demon")
///     .with_scryfall_id("e3286b2c-b65a-46cb-a12a-0cdd811d5b61");
///
/// assert_eq!(krav.name, "Krav, the Unredeemed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Card name (for display and partner-table resolution).
    pub name: String,

    /// External catalog reference (Scryfall id). Empty if unresolved.
    pub scryfall_id: String,

    /// Type line, e.g. "Legendary Creature — Demon".
    pub type_line: String,

    /// Free-form category tags from the cube list.
    pub tags: Vec<String>,

    /// Card image reference, if resolved.
    pub image_url: Option<String>,
}

impl Card {
    /// Create a new card with the given id and name.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            scryfall_id: String::new(),
            type_line: String::new(),
            tags: Vec::new(),
            image_url: None,
        }
    }

    /// Set the external reference id (builder pattern).
    #[must_use]
    pub fn with_scryfall_id(mut self, scryfall_id: impl Into<String>) -> Self {
        self.scryfall_id = scryfall_id.into();
        self
    }

    /// Set the type line (builder pattern).
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    /// Add a category tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check if the card carries a given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
