//! Board catalogue: read-only lookup of cells and cards.
//!
//! The turn engine never hardcodes names, prices, rents, taxes or card
//! contents. It asks a `Board` for them. `StandardBoard` supplies the
//! classic 40-cell layout and its two 16-card decks.

mod standard;

pub use standard::StandardBoard;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardTable, DeckKind};

/// Category of a board cell. Selects the handler run on landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellCategory {
    /// The "Go To Jail" corner.
    Jail,
    Tax,
    Street,
    RailRoad,
    Utility,
    Chance,
    CommunityChest,
    /// Go, Just Visiting, Free Parking: nothing happens.
    None,
}

impl CellCategory {
    /// True for cells that can be bought and charge rent.
    #[must_use]
    pub fn is_purchasable(self) -> bool {
        matches!(self, CellCategory::Street | CellCategory::RailRoad | CellCategory::Utility)
    }
}

/// Rent tiers, lowest first.
pub type RentTable = SmallVec<[i64; 6]>;

/// Static data for one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub name: String,
    pub category: CellCategory,
    /// Purchase price; 0 for cells that cannot be bought.
    pub price: i64,
    /// Rent tiers; empty for cells that cannot be bought.
    pub rent: RentTable,
    /// Tax charged on landing; 0 except on tax cells.
    pub tax: i64,
}

impl Cell {
    /// A cell with no price, rent or tax.
    pub fn plain(name: impl Into<String>, category: CellCategory) -> Self {
        Self {
            name: name.into(),
            category,
            price: 0,
            rent: RentTable::new(),
            tax: 0,
        }
    }

    /// A purchasable cell.
    pub fn property(name: impl Into<String>, category: CellCategory, price: i64, rent: &[i64]) -> Self {
        Self {
            price,
            rent: rent.iter().copied().collect(),
            ..Self::plain(name, category)
        }
    }

    /// A tax cell.
    pub fn tax(name: impl Into<String>, amount: i64) -> Self {
        Self {
            tax: amount,
            ..Self::plain(name, CellCategory::Tax)
        }
    }
}

/// Read-only board lookup service.
///
/// Implementors provide the cell list and the two card tables; every
/// per-field lookup has a default built on those.
pub trait Board {
    /// All cells, indexed by board position.
    fn cells(&self) -> &[Cell];

    /// Card definitions for a deck.
    fn cards(&self, deck: DeckKind) -> &CardTable;

    /// Number of real cells.
    fn total_cells(&self) -> usize {
        self.cells().len()
    }

    /// Static data for a cell.
    fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells().get(index)
    }

    /// Category of a cell. Off-board indices (including the jail marker)
    /// are `CellCategory::None`.
    fn category(&self, index: usize) -> CellCategory {
        self.cell(index).map_or(CellCategory::None, |c| c.category)
    }

    /// Name of a cell.
    fn name(&self, index: usize) -> &str {
        self.cell(index).map_or("In Jail", |c| c.name.as_str())
    }

    /// Purchase price of a cell.
    fn price(&self, index: usize) -> i64 {
        self.cell(index).map_or(0, |c| c.price)
    }

    /// Rent tiers of a cell.
    fn rent(&self, index: usize) -> &[i64] {
        self.cell(index).map(|c| c.rent.as_slice()).unwrap_or(&[])
    }

    /// Tax charged on a cell.
    fn tax(&self, index: usize) -> i64 {
        self.cell(index).map_or(0, |c| c.tax)
    }

    /// A card from a deck.
    fn card(&self, deck: DeckKind, id: CardId) -> Option<&Card> {
        self.cards(deck).get(id)
    }

    /// Number of cards in a deck.
    fn deck_size(&self, deck: DeckKind) -> usize {
        self.cards(deck).len()
    }

    /// First cell of `category` strictly after `from`, wrapping around.
    fn next_of_category(&self, from: usize, category: CellCategory) -> Option<usize> {
        let total = self.total_cells();
        (1..=total)
            .map(|step| (from + step) % total)
            .find(|&index| self.category(index) == category)
    }
}
