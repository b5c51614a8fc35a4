//! Game state: the single mutable record of a play-through.
//!
//! ## Contents
//!
//! - Turn index (the active seat is `turn_index % player_count`)
//! - Dice history for the current turn only
//! - One position per seat (a board cell or the in-jail marker)
//! - One cash balance per seat, and the bank's pool
//! - One owner marker per board cell, property or not
//!
//! ## Snapshots
//!
//! `GameState` is `Clone` with value semantics. Per-seat data and the
//! ownership table are `im` persistent structures, so the clone handed to
//! each agent after a turn shares memory with the canonical state but can
//! never be used to mutate it.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use super::config::GameConfig;
use super::error::{SimError, SimResult};
use super::player::{PlayerId, PlayerMap};

/// Faces shown by every die in one throw.
pub type RollTuple = SmallVec<[u8; 4]>;

/// Owner marker for a board cell.
pub type Owner = Option<PlayerId>;

/// True when every die shows the same face.
#[must_use]
pub fn is_double(roll: &[u8]) -> bool {
    match roll.split_first() {
        Some((first, rest)) => rest.iter().all(|face| face == first),
        None => false,
    }
}

/// Sum of pips across every throw in a turn.
#[must_use]
pub fn total_pips(history: &[RollTuple]) -> usize {
    history
        .iter()
        .flat_map(|roll| roll.iter())
        .map(|&face| usize::from(face))
        .sum()
}

/// Complete mutable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Number of turns started so far.
    pub turn_index: u64,

    /// Throws made during the current turn.
    pub dice_history: Vec<RollTuple>,

    positions: PlayerMap<usize>,
    cash: PlayerMap<i64>,

    /// Money held by the bank.
    pub bank_money: i64,

    property_status: Vector<Owner>,
    total_cells: usize,
    in_jail_index: usize,
}

impl GameState {
    /// Build the opening state for a run on a board of `total_cells` cells.
    pub fn new(config: &GameConfig, total_cells: usize) -> SimResult<Self> {
        config.validate(total_cells)?;

        let mut state = Self {
            turn_index: 0,
            dice_history: Vec::new(),
            positions: PlayerMap::with_value(config.player_count, config.initial_position),
            cash: PlayerMap::with_value(config.player_count, config.initial_cash),
            bank_money: config.bank_money,
            property_status: std::iter::repeat(None).take(total_cells).collect(),
            total_cells,
            in_jail_index: config.in_jail_index,
        };

        for &(cell, owner) in &config.initial_owners {
            state.set_owner(cell, owner)?;
        }

        Ok(state)
    }

    /// Build a state from explicit per-seat values.
    ///
    /// Fails if the per-seat vectors disagree in length, the jail marker
    /// is a real cell, or a position is neither a cell nor the marker.
    pub fn from_parts(
        positions: Vec<usize>,
        cash: Vec<i64>,
        bank_money: i64,
        total_cells: usize,
        in_jail_index: usize,
    ) -> SimResult<Self> {
        if cash.len() != positions.len() {
            return Err(SimError::ShapeMismatch {
                what: "cash holdings",
                expected: positions.len(),
                actual: cash.len(),
            });
        }
        if total_cells == 0 {
            return Err(SimError::InvalidConfig("board has no cells".into()));
        }
        if in_jail_index < total_cells {
            return Err(SimError::InvalidConfig(format!(
                "jail marker {in_jail_index} collides with a board cell (board has {total_cells} cells)"
            )));
        }
        let player_count = positions.len();
        let positions = PlayerMap::from_vec(positions).ok_or_else(|| {
            SimError::InvalidConfig(format!("cannot seat {player_count} players"))
        })?;
        let cash = PlayerMap::from_vec(cash).ok_or_else(|| {
            SimError::InvalidConfig(format!("cannot seat {player_count} players"))
        })?;

        let state = Self {
            turn_index: 0,
            dice_history: Vec::new(),
            positions,
            cash,
            bank_money,
            property_status: std::iter::repeat(None).take(total_cells).collect(),
            total_cells,
            in_jail_index,
        };
        state.check_positions()?;
        Ok(state)
    }

    // === Shape ===

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.positions.player_count()
    }

    /// Number of real board cells.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// The in-jail marker position.
    #[must_use]
    pub fn in_jail_index(&self) -> usize {
        self.in_jail_index
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    fn check_player(&self, player: PlayerId) -> SimResult<()> {
        if player.index() < self.player_count() {
            Ok(())
        } else {
            Err(SimError::UnknownPlayer {
                player,
                player_count: self.player_count(),
            })
        }
    }

    fn check_cell(&self, cell: usize) -> SimResult<()> {
        if cell < self.total_cells {
            Ok(())
        } else {
            Err(SimError::CellOutOfRange {
                cell,
                total_cells: self.total_cells,
            })
        }
    }

    // === Turns ===

    /// Seat whose turn the current turn index belongs to.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn_index, self.player_count())
    }

    /// Start a new turn: bump the index and clear last turn's dice.
    ///
    /// Returns the new active seat.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.turn_index += 1;
        self.dice_history.clear();
        self.active_player()
    }

    // === Positions ===

    /// Current position of a seat.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> usize {
        self.positions[player]
    }

    /// All positions in seat order.
    #[must_use]
    pub fn positions(&self) -> &PlayerMap<usize> {
        &self.positions
    }

    /// True when the seat sits on the in-jail marker.
    #[must_use]
    pub fn is_in_jail(&self, player: PlayerId) -> bool {
        self.positions[player] == self.in_jail_index
    }

    /// Overwrite one seat's position.
    pub fn move_player(&mut self, player: PlayerId, position: usize) -> SimResult<()> {
        self.check_player(player)?;
        if position >= self.total_cells && position != self.in_jail_index {
            return Err(SimError::PositionOutOfRange { player, position });
        }
        self.positions[player] = position;
        Ok(())
    }

    /// Put a seat on the in-jail marker.
    pub fn send_to_jail(&mut self, player: PlayerId) -> SimResult<()> {
        self.move_player(player, self.in_jail_index)
    }

    // === Money ===

    /// Current cash of a seat.
    #[must_use]
    pub fn cash(&self, player: PlayerId) -> i64 {
        self.cash[player]
    }

    /// All cash balances in seat order.
    #[must_use]
    pub fn cash_holdings(&self) -> &PlayerMap<i64> {
        &self.cash
    }

    /// Cash of every seat plus the bank.
    #[must_use]
    pub fn total_money(&self) -> i64 {
        self.cash.values().sum::<i64>() + self.bank_money
    }

    /// Move `amount` from a seat to the bank. Negative amounts flow back.
    pub fn pay_bank(&mut self, player: PlayerId, amount: i64) -> SimResult<()> {
        self.check_player(player)?;
        self.cash[player] -= amount;
        self.bank_money += amount;
        if self.bank_money < 0 {
            warn!(bank_money = self.bank_money, "bank pool exhausted");
        }
        Ok(())
    }

    /// Move `amount` from the bank to a seat. Negative amounts flow back.
    pub fn collect_from_bank(&mut self, player: PlayerId, amount: i64) -> SimResult<()> {
        self.pay_bank(player, -amount)
    }

    /// Move `amount` from one seat to another.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: i64) -> SimResult<()> {
        self.check_player(from)?;
        self.check_player(to)?;
        self.cash[from] -= amount;
        self.cash[to] += amount;
        Ok(())
    }

    // === Ownership ===

    /// Owner of a cell, `None` when unowned or off the board.
    #[must_use]
    pub fn owner(&self, cell: usize) -> Owner {
        self.property_status.get(cell).copied().flatten()
    }

    /// True when the cell exists and nobody owns it.
    #[must_use]
    pub fn is_unowned(&self, cell: usize) -> bool {
        cell < self.total_cells && self.owner(cell).is_none()
    }

    /// The full ownership table, one entry per board cell.
    #[must_use]
    pub fn property_status(&self) -> &Vector<Owner> {
        &self.property_status
    }

    /// Cells owned by a seat, ascending.
    pub fn properties_of(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.property_status
            .iter()
            .enumerate()
            .filter(move |(_, owner)| **owner == Some(player))
            .map(|(cell, _)| cell)
    }

    /// Record a seat as the owner of an unowned cell.
    ///
    /// Ownership never changes hands once set.
    pub fn set_owner(&mut self, cell: usize, player: PlayerId) -> SimResult<()> {
        self.check_cell(cell)?;
        self.check_player(player)?;
        if let Some(owner) = self.property_status[cell] {
            return Err(SimError::AlreadyOwned { cell, owner });
        }
        self.property_status.set(cell, Some(player));
        Ok(())
    }

    // === Invariants ===

    fn check_positions(&self) -> SimResult<()> {
        for (player, &position) in self.positions.iter() {
            if position >= self.total_cells && position != self.in_jail_index {
                return Err(SimError::PositionOutOfRange { player, position });
            }
        }
        Ok(())
    }

    /// Verify the post-turn invariants.
    ///
    /// - seat vectors and the ownership table have the expected shape
    /// - every position is a cell or the jail marker
    /// - total money equals `expected_total`
    /// - the turn recorded between 1 and `max_rolls` throws
    pub fn check_invariants(&self, expected_total: i64, max_rolls: usize) -> SimResult<()> {
        let violation = |detail: String| SimError::InvariantViolation {
            turn: self.turn_index,
            detail,
        };

        if self.cash.player_count() != self.player_count() {
            return Err(violation(format!(
                "{} cash entries for {} seats",
                self.cash.player_count(),
                self.player_count()
            )));
        }
        if self.property_status.len() != self.total_cells {
            return Err(violation(format!(
                "{} ownership entries for {} cells",
                self.property_status.len(),
                self.total_cells
            )));
        }
        self.check_positions()
            .map_err(|err| violation(err.to_string()))?;

        let total = self.total_money();
        if total != expected_total {
            return Err(violation(format!(
                "money not conserved: {total} in play, expected {expected_total}"
            )));
        }

        let rolls = self.dice_history.len();
        if self.turn_index > 0 && !(1..=max_rolls).contains(&rolls) {
            return Err(violation(format!("{rolls} throws recorded, allowed 1-{max_rolls}")));
        }
        Ok(())
    }
}
