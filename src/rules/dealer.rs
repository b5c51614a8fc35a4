//! Card drawing and effect resolution.
//!
//! The dealer owns the two rotating decks. Drawing takes the front card,
//! requeues it at the back, looks the card up on the board, and applies
//! its effect to the drawing player.
//!
//! Positional effects end the turn on the destination cell; the
//! destination's own handler is not run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::cards::{CardDeck, CardEffect, CardId, DeckKind};
use crate::core::{GameConfig, GameRng, GameState, PlayerId, SimResult};

/// What applying a card did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOutcome {
    pub deck: DeckKind,
    pub card: Option<CardId>,
    /// Net cash change for the drawing player.
    pub cash_delta: i64,
    /// New position, if the card moved the player.
    pub moved_to: Option<usize>,
    /// False for unmodeled cards, unknown IDs and empty decks.
    pub modeled: bool,
}

impl CardOutcome {
    fn noop(deck: DeckKind, card: Option<CardId>) -> Self {
        Self {
            deck,
            card,
            cash_delta: 0,
            moved_to: None,
            modeled: false,
        }
    }
}

/// Owns the Chance and Community Chest rotations.
#[derive(Clone, Debug)]
pub struct CardDeckDealer {
    chance: CardDeck,
    community: CardDeck,
    go_cell: usize,
    go_salary: i64,
}

impl CardDeckDealer {
    /// Shuffle both decks once, from `config.deck_seed`.
    pub fn new<B: Board + ?Sized>(board: &B, config: &GameConfig) -> Self {
        let rng = GameRng::new(config.deck_seed);
        let chance = CardDeck::shuffled(board.deck_size(DeckKind::Chance), &mut rng.for_context("chance"));
        let community = CardDeck::shuffled(
            board.deck_size(DeckKind::CommunityChest),
            &mut rng.for_context("community"),
        );
        Self::with_decks(chance, community, config)
    }

    /// Use decks in a known order.
    #[must_use]
    pub fn with_decks(chance: CardDeck, community: CardDeck, config: &GameConfig) -> Self {
        Self {
            chance,
            community,
            go_cell: config.go_cell,
            go_salary: config.go_salary,
        }
    }

    /// Current order of a deck.
    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &CardDeck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community,
        }
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut CardDeck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community,
        }
    }

    /// Draw from `kind` and apply the card to `player`.
    pub fn draw_and_apply<B: Board + ?Sized>(
        &mut self,
        kind: DeckKind,
        board: &B,
        state: &mut GameState,
        player: PlayerId,
    ) -> SimResult<CardOutcome> {
        let Some(card_id) = self.deck_mut(kind).draw() else {
            debug!(deck = %kind, "deck is empty");
            return Ok(CardOutcome::noop(kind, None));
        };

        let Some(card) = board.card(kind, card_id) else {
            info!(deck = %kind, card = card_id.raw(), "card not modeled");
            return Ok(CardOutcome::noop(kind, Some(card_id)));
        };
        info!(%player, deck = %kind, card = card_id.raw(), text = %card.text, "drew card");

        let cash_before = state.cash(player);
        let position_before = state.position(player);
        let modeled = self.apply_effect(&card.effect, board, state, player)?;

        let position_after = state.position(player);
        Ok(CardOutcome {
            deck: kind,
            card: Some(card_id),
            cash_delta: state.cash(player) - cash_before,
            moved_to: (position_after != position_before).then_some(position_after),
            modeled,
        })
    }

    /// Apply one effect. Returns false when the effect is not modeled.
    pub fn apply_effect<B: Board + ?Sized>(
        &self,
        effect: &CardEffect,
        board: &B,
        state: &mut GameState,
        player: PlayerId,
    ) -> SimResult<bool> {
        match *effect {
            CardEffect::BankSettlement(amount) => {
                state.collect_from_bank(player, amount)?;
                info!(%player, amount, "settled with bank");
            }
            CardEffect::GetOutOfJail => {
                if state.is_in_jail(player) {
                    state.move_player(player, self.go_cell)?;
                    info!(%player, "moved out of jail");
                } else {
                    debug!(%player, "get out of jail card drawn outside jail");
                }
            }
            CardEffect::AdvanceTo(cell) => {
                self.advance(board, state, player, cell)?;
            }
            CardEffect::AdvanceToNearest(category) => {
                let from = state.position(player);
                match board.next_of_category(from, category) {
                    Some(cell) => self.advance(board, state, player, cell)?,
                    None => debug!(?category, "no cell of category on board"),
                }
            }
            CardEffect::MoveRelative(delta) => {
                let cells = state.total_cells() as i64;
                let from = state.position(player) as i64;
                let to = (from + i64::from(delta)).rem_euclid(cells) as usize;
                state.move_player(player, to)?;
                info!(%player, delta, to = board.name(to), "moved");
            }
            CardEffect::GoToJail => {
                state.send_to_jail(player)?;
                info!(%player, "sent to jail by card");
            }
            CardEffect::PayEachPlayer(amount) => {
                let others: Vec<PlayerId> = state.player_ids().filter(|&p| p != player).collect();
                for other in others {
                    state.transfer(player, other, amount)?;
                }
                info!(%player, amount, "settled with each player");
            }
            CardEffect::Unmodeled => {
                info!(%player, "card not modeled");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Move forward to `cell`, paying the Go salary if Go is reached or passed.
    fn advance<B: Board + ?Sized>(
        &self,
        board: &B,
        state: &mut GameState,
        player: PlayerId,
        cell: usize,
    ) -> SimResult<()> {
        let from = state.position(player);
        if passes_go(from, cell, self.go_cell, state.total_cells()) {
            state.collect_from_bank(player, self.go_salary)?;
            info!(%player, salary = self.go_salary, "passed go");
        }
        state.move_player(player, cell)?;
        info!(%player, to = board.name(cell), "advanced");
        Ok(())
    }
}

/// True when moving forward from `from` to `to` reaches or passes `go`.
#[must_use]
pub fn passes_go(from: usize, to: usize, go: usize, cells: usize) -> bool {
    if to == go {
        return true;
    }
    let steps = (to + cells - from % cells) % cells;
    let to_go = (go + cells - from % cells) % cells;
    to_go != 0 && to_go <= steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::StandardBoard;

    fn setup() -> (StandardBoard, GameState, GameConfig) {
        let config = GameConfig::default();
        let state = GameState::new(&config, 40).unwrap();
        (StandardBoard::new(), state, config)
    }

    fn dealer_with(chance: &[u32], config: &GameConfig) -> CardDeckDealer {
        let ids = |raw: &[u32]| raw.iter().copied().map(CardId::new).collect::<Vec<_>>();
        CardDeckDealer::with_decks(
            CardDeck::from_order(ids(chance)),
            CardDeck::from_order(ids(&[0, 1, 2])),
            config,
        )
    }

    #[test]
    fn test_passes_go() {
        assert!(passes_go(36, 5, 0, 40));
        assert!(passes_go(7, 0, 0, 40));
        assert!(!passes_go(7, 24, 0, 40));
        assert!(!passes_go(22, 39, 0, 40));
    }

    #[test]
    fn test_move_back_three() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[8], &config);
        let p0 = PlayerId::new(0);
        state.move_player(p0, 10).unwrap();
        let bank = state.bank_money;

        let outcome = dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();

        assert_eq!(state.position(p0), 7);
        assert_eq!(outcome.moved_to, Some(7));
        assert_eq!(state.bank_money, bank);
        assert!(outcome.modeled);
    }

    #[test]
    fn test_move_back_wraps() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[8], &config);
        let p0 = PlayerId::new(0);
        state.move_player(p0, 2).unwrap();

        dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();
        assert_eq!(state.position(p0), 39);
    }

    #[test]
    fn test_advance_to_go_pays_salary() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[0], &config);
        let p1 = PlayerId::new(1);
        state.move_player(p1, 36).unwrap();
        let total = state.total_money();

        let outcome = dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p1).unwrap();

        assert_eq!(state.position(p1), 0);
        assert_eq!(outcome.cash_delta, 200);
        assert_eq!(state.total_money(), total);
    }

    #[test]
    fn test_advance_to_nearest_railroad() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[4], &config);
        let p0 = PlayerId::new(0);
        state.move_player(p0, 36).unwrap();

        let outcome = dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();

        assert_eq!(state.position(p0), 5);
        assert_eq!(outcome.cash_delta, 200);
    }

    #[test]
    fn test_bank_settlement_both_directions() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[6, 11], &config);
        let p0 = PlayerId::new(0);
        state.move_player(p0, 7).unwrap();
        let bank = state.bank_money;

        dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();
        assert_eq!(state.cash(p0), 1550);
        assert_eq!(state.bank_money, bank - 50);

        dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();
        assert_eq!(state.cash(p0), 1535);
        assert_eq!(state.bank_money, bank - 35);
    }

    #[test]
    fn test_get_out_of_jail() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[7], &config);
        let p0 = PlayerId::new(0);

        state.move_player(p0, 22).unwrap();
        let outcome = dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();
        assert_eq!(state.position(p0), 22);
        assert_eq!(outcome.moved_to, None);

        state.send_to_jail(p0).unwrap();
        dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();
        assert_eq!(state.position(p0), 0);
    }

    #[test]
    fn test_pay_each_player() {
        let config = GameConfig::default().with_players(3);
        let mut state = GameState::new(&config, 40).unwrap();
        let board = StandardBoard::new();
        let mut dealer = dealer_with(&[14], &config);
        let p0 = PlayerId::new(0);

        dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();

        assert_eq!(state.cash(p0), 1400);
        assert_eq!(state.cash(PlayerId::new(1)), 1550);
        assert_eq!(state.cash(PlayerId::new(2)), 1550);
    }

    #[test]
    fn test_collect_from_each_player() {
        // Community Chest 6: "Grand Opera Night, collect $50 from every player".
        let config = GameConfig::default().with_players(4);
        let mut state = GameState::new(&config, 40).unwrap();
        let board = StandardBoard::new();
        let mut dealer = CardDeckDealer::with_decks(
            CardDeck::from_order(vec![CardId::new(0)]),
            CardDeck::from_order(vec![CardId::new(6)]),
            &config,
        );
        let p2 = PlayerId::new(2);
        state.move_player(p2, 17).unwrap();
        let bank = state.bank_money;

        let outcome = dealer
            .draw_and_apply(DeckKind::CommunityChest, &board, &mut state, p2)
            .unwrap();

        assert_eq!(outcome.cash_delta, 150);
        assert_eq!(state.cash(p2), 1650);
        for other in [0, 1, 3].map(PlayerId::new) {
            assert_eq!(state.cash(other), 1450);
        }
        assert_eq!(state.bank_money, bank);
        assert_eq!(state.position(p2), 17);
    }

    #[test]
    fn test_unmodeled_card_is_noop() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[10], &config);
        let p0 = PlayerId::new(0);
        state.move_player(p0, 7).unwrap();
        let before = state.clone();

        let outcome = dealer.draw_and_apply(DeckKind::Chance, &board, &mut state, p0).unwrap();

        assert!(!outcome.modeled);
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_card_id_is_noop() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[99], &config);
        let before = state.clone();

        let outcome = dealer
            .draw_and_apply(DeckKind::Chance, &board, &mut state, PlayerId::new(0))
            .unwrap();

        assert_eq!(outcome.card, Some(CardId::new(99)));
        assert!(!outcome.modeled);
        assert_eq!(state, before);
    }

    #[test]
    fn test_decks_rotate_independently() {
        let (board, mut state, config) = setup();
        let mut dealer = dealer_with(&[6, 11], &config);
        let p0 = PlayerId::new(0);

        dealer.draw_and_apply(DeckKind::CommunityChest, &board, &mut state, p0).unwrap();

        assert_eq!(dealer.deck(DeckKind::Chance).peek(), Some(CardId::new(6)));
        assert_eq!(dealer.deck(DeckKind::CommunityChest).peek(), Some(CardId::new(1)));
    }

    #[test]
    fn test_new_shuffles_full_decks() {
        let board = StandardBoard::new();
        let config = GameConfig::default();
        let dealer = CardDeckDealer::new(&board, &config);

        assert_eq!(dealer.deck(DeckKind::Chance).len(), 16);
        assert_eq!(dealer.deck(DeckKind::CommunityChest).len(), 16);
    }
}
