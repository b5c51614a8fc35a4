//! Run parameters.
//!
//! Every number that shapes a play-through lives here rather than in a
//! constant: seat count, dice seeds, move budget, starting money, and the
//! special board indices (Go and the in-jail marker).
//!
//! `GameConfig::default()` is the classic two-player ruleset on the
//! 40-cell board.

use serde::{Deserialize, Serialize};

use super::error::{SimError, SimResult};
use super::player::PlayerId;

/// Complete run configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-8).
    pub player_count: usize,

    /// Turns to execute before the run ends.
    pub max_moves: u64,

    /// Rolls allowed in one turn; that many doubles in a row means jail.
    pub max_rolls_for_jail: usize,

    /// One die per seed. The die count is `dice_seeds.len()`.
    pub dice_seeds: Vec<u64>,

    /// Sides per die.
    pub die_faces: u8,

    /// Seed for the initial permutation of both card decks.
    pub deck_seed: u64,

    /// Starting cash for every seat.
    pub initial_cash: i64,

    /// Starting cell for every seat.
    pub initial_position: usize,

    /// Properties that start the run already owned, as `(cell, owner)`.
    pub initial_owners: Vec<(usize, PlayerId)>,

    /// Money held by the bank at the start of the run.
    pub bank_money: i64,

    /// The start cell.
    pub go_cell: usize,

    /// Marker position meaning "in jail". Must not be a real cell.
    pub in_jail_index: usize,

    /// Paid by the bank when a card moves a player onto or past Go.
    pub go_salary: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            max_moves: 50,
            max_rolls_for_jail: 3,
            dice_seeds: vec![1, 2],
            die_faces: 6,
            deck_seed: 0,
            initial_cash: 1500,
            initial_position: 0,
            initial_owners: Vec::new(),
            bank_money: 20_580,
            go_cell: 0,
            in_jail_index: 40,
            go_salary: 200,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seat count.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the move budget.
    #[must_use]
    pub fn with_max_moves(mut self, moves: u64) -> Self {
        self.max_moves = moves;
        self
    }

    /// Set one seed per die.
    #[must_use]
    pub fn with_dice_seeds(mut self, seeds: Vec<u64>) -> Self {
        self.dice_seeds = seeds;
        self
    }

    /// Set the deck permutation seed.
    #[must_use]
    pub fn with_deck_seed(mut self, seed: u64) -> Self {
        self.deck_seed = seed;
        self
    }

    /// Set starting cash.
    #[must_use]
    pub fn with_initial_cash(mut self, cash: i64) -> Self {
        self.initial_cash = cash;
        self
    }

    /// Set the bank's starting pool.
    #[must_use]
    pub fn with_bank_money(mut self, money: i64) -> Self {
        self.bank_money = money;
        self
    }

    /// Pre-assign a property.
    #[must_use]
    pub fn with_owner(mut self, cell: usize, owner: PlayerId) -> Self {
        self.initial_owners.push((cell, owner));
        self
    }

    /// Derive dice and deck seeds from a single master seed.
    #[must_use]
    pub fn seeded_from(mut self, master: u64) -> Self {
        let rng = super::rng::GameRng::new(master);
        let dice = self.dice_seeds.len().max(1);
        self.dice_seeds = (0..dice)
            .map(|i| rng.for_context(&format!("die-{i}")).seed())
            .collect();
        self.deck_seed = rng.for_context("decks").seed();
        self
    }

    /// Number of physical dice.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice_seeds.len()
    }

    /// Check the parameters against a board of `total_cells` cells.
    pub fn validate(&self, total_cells: usize) -> SimResult<()> {
        let invalid = |msg: String| Err(SimError::InvalidConfig(msg));

        if !(2..=8).contains(&self.player_count) {
            return invalid(format!("player count must be 2-8, got {}", self.player_count));
        }
        if self.dice_seeds.is_empty() {
            return invalid("at least one die is required".into());
        }
        if self.die_faces == 0 {
            return invalid("dice need at least one face".into());
        }
        if self.max_rolls_for_jail == 0 {
            return invalid("max rolls for jail must be at least 1".into());
        }
        if total_cells == 0 {
            return invalid("board has no cells".into());
        }
        if self.in_jail_index < total_cells {
            return invalid(format!(
                "jail marker {} collides with a board cell (board has {} cells)",
                self.in_jail_index, total_cells
            ));
        }
        if self.go_cell >= total_cells {
            return invalid(format!("go cell {} is off the board", self.go_cell));
        }
        if self.initial_position >= total_cells && self.initial_position != self.in_jail_index {
            return invalid(format!(
                "initial position {} is neither a cell nor the jail marker",
                self.initial_position
            ));
        }
        for &(cell, owner) in &self.initial_owners {
            if cell >= total_cells {
                return invalid(format!("pre-owned cell {cell} is off the board"));
            }
            if owner.index() >= self.player_count {
                return invalid(format!("pre-owned cell {cell} names unseated {owner}"));
            }
        }
        Ok(())
    }
}
