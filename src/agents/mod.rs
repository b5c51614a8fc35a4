//! Player agents: the decision-making side of each seat.
//!
//! The engine asks an agent two questions (anything to do before the
//! dice, and whether to buy an unowned property) and tells it the new
//! state after every turn. Agents only ever see owned copies of the
//! state, never the canonical instance.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, PlayerId};

/// Action chosen before the dice are rolled.
///
/// The modeled ruleset defines no pre-turn actions yet, so the only
/// choice is to pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreTurnAction {
    #[default]
    Pass,
}

// =============================================================================
// Agent Trait
// =============================================================================

/// Decision-making agent for one seat.
pub trait PlayerAgent {
    /// Display name for logs and reports.
    fn name(&self) -> &str;

    /// Choose a pre-turn action. Called for every seat at the start of
    /// every turn.
    fn pre_turn_decision(&mut self, _state: &GameState) -> PreTurnAction {
        PreTurnAction::Pass
    }

    /// Decide whether `player` buys the unowned property at `cell`.
    ///
    /// Only called when the player can afford the price.
    fn buy_property(&mut self, state: &GameState, player: PlayerId, cell: usize) -> bool;

    /// Receive an independent copy of the state after a turn.
    fn receive_state(&mut self, _state: GameState) {}
}

impl<A: PlayerAgent + ?Sized> PlayerAgent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pre_turn_decision(&mut self, state: &GameState) -> PreTurnAction {
        (**self).pre_turn_decision(state)
    }

    fn buy_property(&mut self, state: &GameState, player: PlayerId, cell: usize) -> bool {
        (**self).buy_property(state, player, cell)
    }

    fn receive_state(&mut self, state: GameState) {
        (**self).receive_state(state);
    }
}

// =============================================================================
// Built-in Agents
// =============================================================================

/// Buys everything it can afford.
#[derive(Clone, Debug, Default)]
pub struct AlwaysBuy {
    /// Number of snapshots received.
    pub snapshots_seen: u64,
}

impl PlayerAgent for AlwaysBuy {
    fn name(&self) -> &str {
        "always-buy"
    }

    fn buy_property(&mut self, _state: &GameState, _player: PlayerId, _cell: usize) -> bool {
        true
    }

    fn receive_state(&mut self, _state: GameState) {
        self.snapshots_seen += 1;
    }
}

/// Never buys.
#[derive(Clone, Debug, Default)]
pub struct NeverBuy;

impl PlayerAgent for NeverBuy {
    fn name(&self) -> &str {
        "never-buy"
    }

    fn buy_property(&mut self, _state: &GameState, _player: PlayerId, _cell: usize) -> bool {
        false
    }
}

/// Buys only while keeping at least `reserve` cash after paying.
#[derive(Clone, Debug)]
pub struct CashReserveBuyer {
    pub reserve: i64,
    prices: Vec<i64>,
}

impl CashReserveBuyer {
    /// Create a buyer that keeps `reserve` in hand. `prices` gives the
    /// purchase price per board cell.
    #[must_use]
    pub fn new(reserve: i64, prices: Vec<i64>) -> Self {
        Self { reserve, prices }
    }
}

impl PlayerAgent for CashReserveBuyer {
    fn name(&self) -> &str {
        "cash-reserve"
    }

    fn buy_property(&mut self, state: &GameState, player: PlayerId, cell: usize) -> bool {
        let price = self.prices.get(cell).copied().unwrap_or(0);
        state.cash(player) - price >= self.reserve
    }
}

/// Buys with a fixed probability from its own seeded stream.
#[derive(Clone, Debug)]
pub struct RandomBuyer {
    probability: f64,
    rng: GameRng,
}

impl RandomBuyer {
    /// Create a buyer that accepts with `probability`.
    #[must_use]
    pub fn new(probability: f64, seed: u64) -> Self {
        Self {
            probability,
            rng: GameRng::new(seed),
        }
    }
}

impl PlayerAgent for RandomBuyer {
    fn name(&self) -> &str {
        "random"
    }

    fn buy_property(&mut self, _state: &GameState, _player: PlayerId, _cell: usize) -> bool {
        self.rng.gen_bool(self.probability)
    }
}
