//! Fatal precondition failures.
//!
//! Unmodeled cards and cells are not errors (they are logged and skipped),
//! and a declined purchase is an ordinary outcome. Everything here means
//! the run cannot continue from a consistent state.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{player} is not seated in a {player_count}-player game")]
    UnknownPlayer { player: PlayerId, player_count: usize },

    #[error("position {position} for {player} is neither a board cell nor the jail marker")]
    PositionOutOfRange { player: PlayerId, position: usize },

    #[error("cell {cell} is outside a board of {total_cells} cells")]
    CellOutOfRange { cell: usize, total_cells: usize },

    #[error("cell {cell} is already owned by {owner}")]
    AlreadyOwned { cell: usize, owner: PlayerId },

    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invariant violated after turn {turn}: {detail}")]
    InvariantViolation { turn: u64, detail: String },
}

/// Shorthand result type.
pub type SimResult<T> = Result<T, SimError>;
