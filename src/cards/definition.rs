//! Card definitions - static card data.
//!
//! A card is an identifier, its printed text, and an effect descriptor.
//! The effect is data, not code: `rules::dealer` interprets it against the
//! game state.

use serde::{Deserialize, Serialize};

use crate::board::CellCategory;

/// Identifier of a card within its deck, `0..deck_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

/// The two draw piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => write!(f, "Chance"),
            DeckKind::CommunityChest => write!(f, "Community Chest"),
        }
    }
}

/// What drawing a card does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Bank pays the player (positive) or the player pays the bank (negative).
    BankSettlement(i64),

    /// Leave jail for the start cell. No effect outside jail.
    GetOutOfJail,

    /// Move forward to a cell, collecting the Go salary if Go is reached or passed.
    AdvanceTo(usize),

    /// Move by a signed number of cells, wrapping around the board. No salary.
    MoveRelative(i32),

    /// Move forward to the next cell of a category.
    AdvanceToNearest(CellCategory),

    /// Go directly to jail.
    GoToJail,

    /// Pay every other player (positive) or collect from each (negative).
    PayEachPlayer(i64),

    /// Printed on the card but not part of the modeled ruleset.
    Unmodeled,
}

/// Static card definition.
///
/// ```
/// use board_sim::cards::{Card, CardEffect, CardId};
///
/// let card = Card::new(CardId::new(6), "Bank pays you dividend of $50", CardEffect::BankSettlement(50));
/// assert_eq!(card.effect, CardEffect::BankSettlement(50));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position of the card in its deck's catalogue.
    pub id: CardId,

    /// Printed text.
    pub text: String,

    /// Effect applied when drawn.
    pub effect: CardEffect,
}

impl Card {
    /// Create a card.
    pub fn new(id: CardId, text: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            id,
            text: text.into(),
            effect,
        }
    }
}
