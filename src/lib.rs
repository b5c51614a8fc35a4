//! # board-sim
//!
//! Turn-resolution engine for one automated play-through of a
//! property-trading board game.
//!
//! ## Turn Pipeline
//!
//! Pre-turn decisions → active seat → dice → movement → cell handler →
//! invariant check → state broadcast. `game::Game` owns the single
//! `GameState` and drives this pipeline for a fixed number of moves.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, state, errors
//! - `board`: read-only cell and card catalogue
//! - `cards`: card definitions and rotating decks
//! - `rules`: dice, movement, dispatch, transactions, card dealing
//! - `agents`: the decision-making side of each seat
//! - `game`: the turn scheduler and end-of-run report
//!
//! ## Example
//!
//! ```
//! use board_sim::{run_game, AlwaysBuy, GameConfig};
//!
//! let config = GameConfig::default().with_max_moves(20);
//! let report = run_game(config, vec![AlwaysBuy::default(), AlwaysBuy::default()]).unwrap();
//! assert_eq!(report.turns.len(), 20);
//! ```

pub mod core;
pub mod board;
pub mod cards;
pub mod rules;
pub mod agents;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, PlayerId, PlayerMap, RollTuple, SimError, SimResult};

pub use crate::board::{Board, Cell, CellCategory, StandardBoard};

pub use crate::cards::{Card, CardDeck, CardEffect, CardId, CardTable, DeckKind};

pub use crate::rules::{
    CardDeckDealer, CellDispatcher, CellOutcome, DiceRollResolver, DiceSource, Movement,
    PositionResolver, PropertyOutcome, PropertyTransactionHandler, ScriptedDice, SeededDice,
};

pub use crate::agents::{AlwaysBuy, CashReserveBuyer, NeverBuy, PlayerAgent, PreTurnAction, RandomBuyer};

pub use crate::game::{run_game, Game, GameReport, TurnRecord};
