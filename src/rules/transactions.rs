//! Money and ownership changes triggered by landing on a cell.
//!
//! ## Accounting
//!
//! The bank is a finite pool and every payment is a transfer:
//! - purchase price and tax: player → bank
//! - rent: player → owner, bank not involved
//!
//! so cash plus bank money never changes. Cash may go negative; there is
//! no bankruptcy rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agents::PlayerAgent;
use crate::board::Board;
use crate::core::{GameState, PlayerId, SimResult};

/// Result of landing on a purchasable cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyOutcome {
    /// Bought from the bank.
    Purchased { price: i64 },
    /// Could afford it, agent said no.
    Declined { price: i64 },
    /// Cash below the price; the agent was not asked.
    InsufficientFunds { price: i64 },
    /// Paid tier-0 rent to another player.
    RentPaid { owner: PlayerId, amount: i64 },
    /// Landed on own property.
    OwnProperty,
}

/// Result of landing on the Go To Jail cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailOutcome {
    SentToJail,
    AlreadyInJail,
}

/// Purchase, rent, tax and jail-cell handling.
pub struct PropertyTransactionHandler;

impl PropertyTransactionHandler {
    /// Charge the cell's tax to the player; the bank receives it.
    pub fn pay_tax<B: Board + ?Sized>(board: &B, state: &mut GameState, player: PlayerId) -> SimResult<i64> {
        let cell = state.position(player);
        let tax = board.tax(cell);
        state.pay_bank(player, tax)?;
        info!(%player, cell = board.name(cell), tax, cash = state.cash(player), "paid tax");
        Ok(tax)
    }

    /// Street, railroad and utility handling: offer purchase when
    /// unowned, charge rent when owned by someone else.
    pub fn handle_property<B, A>(
        board: &B,
        state: &mut GameState,
        agent: &mut A,
        player: PlayerId,
    ) -> SimResult<PropertyOutcome>
    where
        B: Board + ?Sized,
        A: PlayerAgent + ?Sized,
    {
        let cell = state.position(player);

        match state.owner(cell) {
            None => Self::offer_purchase(board, state, agent, player, cell),
            Some(owner) if owner == player => {
                debug!(%player, cell = board.name(cell), "landed on own property");
                Ok(PropertyOutcome::OwnProperty)
            }
            Some(owner) => {
                let amount = match board.rent(cell).first() {
                    Some(&rent) => rent,
                    None => {
                        warn!(cell, "owned cell has no rent table");
                        0
                    }
                };
                state.transfer(player, owner, amount)?;
                info!(%player, %owner, amount, cell = board.name(cell), "paid rent");
                Ok(PropertyOutcome::RentPaid { owner, amount })
            }
        }
    }

    /// Buy `cell` for `player` if affordable and the agent accepts.
    pub fn offer_purchase<B, A>(
        board: &B,
        state: &mut GameState,
        agent: &mut A,
        player: PlayerId,
        cell: usize,
    ) -> SimResult<PropertyOutcome>
    where
        B: Board + ?Sized,
        A: PlayerAgent + ?Sized,
    {
        let price = board.price(cell);

        if state.cash(player) < price {
            debug!(%player, cash = state.cash(player), price, "cannot afford property");
            return Ok(PropertyOutcome::InsufficientFunds { price });
        }
        if !agent.buy_property(state, player, cell) {
            debug!(%player, cell = board.name(cell), "declined purchase");
            return Ok(PropertyOutcome::Declined { price });
        }

        state.set_owner(cell, player)?;
        state.pay_bank(player, price)?;
        info!(
            %player,
            property = board.name(cell),
            price,
            cash = state.cash(player),
            "purchased property"
        );
        Ok(PropertyOutcome::Purchased { price })
    }

    /// Go To Jail cell: always jail, independent of dice.
    pub fn go_to_jail(state: &mut GameState, player: PlayerId) -> SimResult<JailOutcome> {
        if state.is_in_jail(player) {
            info!(%player, "staying in jail");
            return Ok(JailOutcome::AlreadyInJail);
        }
        state.send_to_jail(player)?;
        info!(%player, "landed in jail");
        Ok(JailOutcome::SentToJail)
    }
}
