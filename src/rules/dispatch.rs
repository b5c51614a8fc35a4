//! Routing a landed cell to its handler.
//!
//! The category set is closed, so routing is one exhaustive `match`.
//! Railroads and utilities share the street handler; the board supplies
//! their different prices and rents.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::PlayerAgent;
use crate::board::{Board, CellCategory};
use crate::cards::DeckKind;
use crate::core::{GameState, PlayerId, SimError, SimResult};

use super::dealer::{CardDeckDealer, CardOutcome};
use super::transactions::{JailOutcome, PropertyOutcome, PropertyTransactionHandler};

/// What the landed cell's handler did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellOutcome {
    /// Cell with no handler (Go, Just Visiting, Free Parking, in jail).
    Nothing,
    TaxPaid(i64),
    Property(PropertyOutcome),
    Jail(JailOutcome),
    Card(CardOutcome),
}

/// Runs the handler for the active player's cell.
pub struct CellDispatcher;

impl CellDispatcher {
    /// Look up the category of `player`'s cell and run its handler.
    pub fn dispatch<B, A>(
        board: &B,
        dealer: &mut CardDeckDealer,
        state: &mut GameState,
        agents: &mut [A],
        player: PlayerId,
    ) -> SimResult<CellOutcome>
    where
        B: Board + ?Sized,
        A: PlayerAgent,
    {
        let cell = state.position(player);
        let category = board.category(cell);

        let outcome = match category {
            CellCategory::Jail => CellOutcome::Jail(PropertyTransactionHandler::go_to_jail(state, player)?),
            CellCategory::Tax => CellOutcome::TaxPaid(PropertyTransactionHandler::pay_tax(board, state, player)?),
            CellCategory::Street | CellCategory::RailRoad | CellCategory::Utility => {
                let player_count = agents.len();
                let agent = agents
                    .get_mut(player.index())
                    .ok_or(SimError::UnknownPlayer { player, player_count })?;
                CellOutcome::Property(PropertyTransactionHandler::handle_property(board, state, agent, player)?)
            }
            CellCategory::Chance => {
                CellOutcome::Card(dealer.draw_and_apply(DeckKind::Chance, board, state, player)?)
            }
            CellCategory::CommunityChest => {
                CellOutcome::Card(dealer.draw_and_apply(DeckKind::CommunityChest, board, state, player)?)
            }
            CellCategory::None => {
                debug!(%player, cell, "no handler for cell");
                CellOutcome::Nothing
            }
        };

        Ok(outcome)
    }
}
