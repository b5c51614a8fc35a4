//! Turn-resolution rules.
//!
//! One module per phase of a turn:
//! - `dice`: throw the dice, decide jail from the throws
//! - `movement`: compute and apply the new position
//! - `dispatch`: route the landed cell to its handler
//! - `transactions`: purchase, rent, tax, the Go To Jail cell
//! - `dealer`: draw a card and apply its effect

pub mod dice;
pub mod movement;
pub mod dispatch;
pub mod transactions;
pub mod dealer;

pub use dice::{should_enter_jail, DiceRollResolver, DiceSource, ScriptedDice, SeededDice};
pub use movement::{Movement, PositionResolver};
pub use dispatch::{CellDispatcher, CellOutcome};
pub use transactions::{JailOutcome, PropertyOutcome, PropertyTransactionHandler};
pub use dealer::{passes_go, CardDeckDealer, CardOutcome};
