//! Card system.
//!
//! - `definition`: `CardId`, `Card`, and the `CardEffect` descriptor
//! - `table`: per-deck lookup of definitions by ID
//! - `deck`: the rotating draw pile

mod definition;
mod table;
mod deck;

pub use definition::{Card, CardEffect, CardId, DeckKind};
pub use table::CardTable;
pub use deck::CardDeck;
