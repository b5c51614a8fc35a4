//! Rotating draw pile.
//!
//! A deck is shuffled once when the run starts. After that, each draw
//! takes the front card and puts it straight back at the bottom, so the
//! order only ever rotates: over `len()` draws every card comes up exactly
//! once, and the cycle then repeats in the same order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::GameRng;

/// Cyclic, order-preserving draw pile.
///
/// ```
/// use board_sim::cards::{CardDeck, CardId};
///
/// let mut deck = CardDeck::from_order(vec![CardId::new(2), CardId::new(0), CardId::new(1)]);
/// assert_eq!(deck.draw(), Some(CardId::new(2)));
/// assert_eq!(deck.draw(), Some(CardId::new(0)));
/// assert_eq!(deck.draw(), Some(CardId::new(1)));
/// assert_eq!(deck.draw(), Some(CardId::new(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeck {
    order: VecDeque<CardId>,
}

impl CardDeck {
    /// A deck holding `0..size` in a permutation drawn from `rng`.
    #[must_use]
    pub fn shuffled(size: usize, rng: &mut GameRng) -> Self {
        let mut ids: Vec<CardId> = (0..size as u32).map(CardId::new).collect();
        rng.shuffle(&mut ids);
        Self::from_order(ids)
    }

    /// A deck in exactly the given order, front first.
    #[must_use]
    pub fn from_order(order: Vec<CardId>) -> Self {
        Self {
            order: order.into(),
        }
    }

    /// Take the front card and requeue it at the back.
    ///
    /// Returns `None` only for an empty deck.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.order.pop_front()?;
        self.order.push_back(card);
        Some(card)
    }

    /// The card the next draw will return.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.order.front().copied()
    }

    /// Current order, front first.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = GameRng::new(42);
        let deck = CardDeck::shuffled(16, &mut rng);

        let mut ids: Vec<_> = deck.iter().map(CardId::raw).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = CardDeck::shuffled(16, &mut GameRng::new(7));
        let b = CardDeck::shuffled(16, &mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_rotates() {
        let mut deck = CardDeck::from_order((0..4).map(CardId::new).collect());

        assert_eq!(deck.draw(), Some(CardId::new(0)));
        assert_eq!(deck.peek(), Some(CardId::new(1)));
        assert_eq!(
            deck.iter().collect::<Vec<_>>(),
            vec![CardId::new(1), CardId::new(2), CardId::new(3), CardId::new(0)]
        );
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_full_cycle_restores_order() {
        let mut deck = CardDeck::shuffled(16, &mut GameRng::new(3));
        let before: Vec<_> = deck.iter().collect();

        let drawn: Vec<_> = (0..16).filter_map(|_| deck.draw()).collect();

        assert_eq!(drawn, before);
        assert_eq!(deck.iter().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = CardDeck::from_order(vec![]);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
