//! The turn loop.
//!
//! Each turn runs the same fixed phase order:
//!
//! 1. every agent is asked for a pre-turn decision (advisory)
//! 2. the turn index advances; the active seat is `turn_index % players`
//! 3. dice are thrown
//! 4. the active player's position is resolved and written
//! 5. the landed cell's handler runs
//! 6. invariants are checked
//! 7. every agent receives its own copy of the new state

use tracing::{debug, info, trace};

use crate::agents::PlayerAgent;
use crate::board::{Board, StandardBoard};
use crate::core::{GameConfig, GameState, SimError, SimResult};
use crate::rules::{
    CardDeckDealer, CellDispatcher, DiceRollResolver, DiceSource, PositionResolver, SeededDice,
};

use super::report::{GameReport, TurnRecord};

/// One play-through: board, dice, decks, agents and the canonical state.
pub struct Game<B, D, A> {
    config: GameConfig,
    board: B,
    dice: DiceRollResolver<D>,
    positions: PositionResolver,
    dealer: CardDeckDealer,
    agents: Vec<A>,
    state: GameState,
    expected_total: i64,
    turns: Vec<TurnRecord>,
}

impl<B: Board, A: PlayerAgent> Game<B, SeededDice, A> {
    /// Set up a run with the configured seeded dice.
    pub fn new(config: GameConfig, board: B, agents: Vec<A>) -> SimResult<Self> {
        let dice = SeededDice::from_config(&config);
        Self::with_dice(config, board, dice, agents)
    }
}

impl<B: Board, D: DiceSource, A: PlayerAgent> Game<B, D, A> {
    /// Set up a run with an explicit dice source.
    pub fn with_dice(config: GameConfig, board: B, dice: D, agents: Vec<A>) -> SimResult<Self> {
        let state = GameState::new(&config, board.total_cells())?;
        if agents.len() != config.player_count {
            return Err(SimError::ShapeMismatch {
                what: "agents",
                expected: config.player_count,
                actual: agents.len(),
            });
        }

        let dealer = CardDeckDealer::new(&board, &config);
        let expected_total = state.total_money();

        Ok(Self {
            dice: DiceRollResolver::new(dice, config.max_rolls_for_jail),
            positions: PositionResolver::new(config.go_cell, config.max_rolls_for_jail),
            dealer,
            agents,
            expected_total,
            turns: Vec::new(),
            state,
            board,
            config,
        })
    }

    /// Replace the shuffled decks with a prepared dealer.
    #[must_use]
    pub fn with_dealer(mut self, dealer: CardDeckDealer) -> Self {
        self.dealer = dealer;
        self
    }

    /// Start from a prepared state instead of the configured opening.
    ///
    /// The money total of `state` becomes the conserved amount.
    pub fn with_state(mut self, state: GameState) -> SimResult<Self> {
        if state.player_count() != self.agents.len() {
            return Err(SimError::ShapeMismatch {
                what: "state seats",
                expected: self.agents.len(),
                actual: state.player_count(),
            });
        }
        if state.total_cells() != self.board.total_cells() {
            return Err(SimError::ShapeMismatch {
                what: "property status",
                expected: self.board.total_cells(),
                actual: state.total_cells(),
            });
        }
        if state.in_jail_index() != self.config.in_jail_index {
            return Err(SimError::InvalidConfig(format!(
                "state jail marker {} differs from configured marker {}",
                state.in_jail_index(),
                self.config.in_jail_index
            )));
        }
        self.expected_total = state.total_money();
        self.state = state;
        Ok(self)
    }

    /// The canonical state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The card dealer.
    #[must_use]
    pub fn dealer(&self) -> &CardDeckDealer {
        &self.dealer
    }

    /// The agents, in seat order.
    #[must_use]
    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    /// Records of the turns played so far.
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Play one full turn.
    pub fn play_turn(&mut self) -> SimResult<TurnRecord> {
        for agent in &mut self.agents {
            let action = agent.pre_turn_decision(&self.state);
            trace!(agent = agent.name(), ?action, "pre-turn decision");
        }

        let player = self.state.advance_turn();
        let start_position = self.state.position(player);
        let started_in_jail = self.state.is_in_jail(player);
        info!(turn = self.state.turn_index, %player, "turn");

        let rolls = self.dice.resolve_rolls(&mut self.state, started_in_jail).to_vec();
        info!(?rolls, "dice rolls");

        let movement = self.positions.apply(&mut self.state, player)?;
        debug!(?movement, position = self.state.position(player), "moved");

        let cell = self.state.position(player);
        let category = self.board.category(cell);
        let outcome = CellDispatcher::dispatch(
            &self.board,
            &mut self.dealer,
            &mut self.state,
            &mut self.agents,
            player,
        )?;
        debug!(cash = ?self.state.cash_holdings().values().collect::<Vec<_>>(), "cash holdings");

        self.state
            .check_invariants(self.expected_total, self.dice.max_rolls())?;

        for agent in &mut self.agents {
            agent.receive_state(self.state.clone());
        }

        let record = TurnRecord {
            turn: self.state.turn_index,
            player,
            rolls,
            started_in_jail,
            start_position,
            movement,
            category,
            outcome,
            end_position: self.state.position(player),
            in_jail: self.state.is_in_jail(player),
        };
        self.turns.push(record.clone());
        Ok(record)
    }

    /// Play `config.max_moves` turns and report the final state.
    pub fn run(mut self) -> SimResult<GameReport> {
        info!(
            players = self.config.player_count,
            max_moves = self.config.max_moves,
            "game started"
        );

        for _ in 0..self.config.max_moves {
            self.play_turn()?;
        }

        let report = GameReport::new(&self.board, &self.agents, self.state, self.turns);
        report.log_summary();
        Ok(report)
    }
}

/// Run a full game on the classic board with seeded dice.
pub fn run_game<A: PlayerAgent>(config: GameConfig, agents: Vec<A>) -> SimResult<GameReport> {
    Game::new(config, StandardBoard::new(), agents)?.run()
}
