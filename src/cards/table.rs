//! Card table for definition lookup.
//!
//! One `CardTable` per deck maps each `CardId` to its definition. Deck
//! order lives separately in `CardDeck`; the table never changes during a
//! run.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardEffect, CardId};

/// Lookup of card definitions by ID.
///
/// ```
/// use board_sim::cards::{CardEffect, CardTable, CardId};
///
/// let mut table = CardTable::new();
/// table.push("Go Back 3 Spaces", CardEffect::MoveRelative(-3));
///
/// let card = table.get(CardId::new(0)).unwrap();
/// assert_eq!(card.effect, CardEffect::MoveRelative(-3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardTable {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Register a card under the next free ID and return that ID.
    pub fn push(&mut self, text: impl Into<String>, effect: CardEffect) -> CardId {
        let id = CardId::new(self.next_id);
        self.register(Card::new(id, text, effect));
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards whose effect is not modeled.
    pub fn unmodeled(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .values()
            .filter(|c| c.effect == CardEffect::Unmodeled)
    }
}

impl FromIterator<(&'static str, CardEffect)> for CardTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, CardEffect)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (text, effect) in iter {
            table.push(text, effect);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut table = CardTable::new();

        let a = table.push("A", CardEffect::BankSettlement(10));
        let b = table.push("B", CardEffect::GetOutOfJail);

        assert_eq!(a, CardId::new(0));
        assert_eq!(b, CardId::new(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_register_explicit_then_push() {
        let mut table = CardTable::new();
        table.register(Card::new(CardId::new(4), "Four", CardEffect::Unmodeled));

        let next = table.push("Five", CardEffect::Unmodeled);
        assert_eq!(next, CardId::new(5));
        assert_eq!(table.unmodeled().count(), 2);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut table = CardTable::new();
        table.register(Card::new(CardId::new(1), "A", CardEffect::Unmodeled));
        table.register(Card::new(CardId::new(1), "B", CardEffect::Unmodeled));
    }

    #[test]
    fn test_lookup_missing() {
        let table: CardTable = [("Only", CardEffect::GoToJail)].into_iter().collect();

        assert!(table.get(CardId::new(0)).is_some());
        assert!(table.get(CardId::new(1)).is_none());
    }
}
