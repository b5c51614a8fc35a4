//! Position resolution after the dice.
//!
//! Moves are cumulative over every throw of the turn. A player paroled
//! from jail first returns to the start cell and then moves the full
//! total, so leaving jail costs no turn.

use serde::{Deserialize, Serialize};

use crate::core::{total_pips, GameState, PlayerId, SimResult};

use super::dice::should_enter_jail;

/// How the active player's position changed this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    /// Sent to (or kept in) jail by the dice.
    Jailed,
    /// Left jail on a double and moved from the start cell.
    Paroled { to: usize },
    /// Ordinary move.
    Advanced { from: usize, to: usize },
}

impl Movement {
    /// Position after the move.
    #[must_use]
    pub fn destination(self, in_jail_index: usize) -> usize {
        match self {
            Movement::Jailed => in_jail_index,
            Movement::Paroled { to } | Movement::Advanced { to, .. } => to,
        }
    }
}

/// Computes and applies the post-roll position.
#[derive(Clone, Copy, Debug)]
pub struct PositionResolver {
    go_cell: usize,
    max_rolls: usize,
}

impl PositionResolver {
    /// Create a resolver for a board whose start cell is `go_cell`.
    #[must_use]
    pub fn new(go_cell: usize, max_rolls: usize) -> Self {
        Self { go_cell, max_rolls }
    }

    /// Where `player` ends up given the throws in `state.dice_history`.
    #[must_use]
    pub fn compute_new_position(&self, state: &GameState, player: PlayerId) -> Movement {
        let in_jail = state.is_in_jail(player);
        if should_enter_jail(&state.dice_history, in_jail, self.max_rolls) {
            return Movement::Jailed;
        }

        let pips = total_pips(&state.dice_history);
        let cells = state.total_cells();

        if in_jail {
            Movement::Paroled {
                to: (self.go_cell + pips) % cells,
            }
        } else {
            let from = state.position(player);
            Movement::Advanced {
                from,
                to: (from + pips) % cells,
            }
        }
    }

    /// Compute the move and write it to the active player's position only.
    pub fn apply(&self, state: &mut GameState, player: PlayerId) -> SimResult<Movement> {
        let movement = self.compute_new_position(state, player);
        let destination = movement.destination(state.in_jail_index());
        state.move_player(player, destination)?;
        Ok(movement)
    }
}
