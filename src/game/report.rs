//! Turn records and the end-of-run report.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::PlayerAgent;
use crate::board::{Board, CellCategory};
use crate::core::{GameState, PlayerId, RollTuple};
use crate::rules::{CellOutcome, Movement};

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u64,
    pub player: PlayerId,
    pub rolls: Vec<RollTuple>,
    pub started_in_jail: bool,
    pub start_position: usize,
    pub movement: Movement,
    /// Category of the cell the dice moved the player to.
    pub category: CellCategory,
    pub outcome: CellOutcome,
    /// Position after the cell handler ran.
    pub end_position: usize,
    pub in_jail: bool,
}

/// One line of the final ownership table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyLine {
    pub cell: usize,
    pub name: String,
    pub owner: Option<PlayerId>,
}

/// Final state of a run plus its turn log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameReport {
    pub agent_names: Vec<String>,
    pub final_state: GameState,
    pub properties: Vec<PropertyLine>,
    pub turns: Vec<TurnRecord>,
}

impl GameReport {
    /// Assemble the report for a finished run.
    pub fn new<B, A>(board: &B, agents: &[A], final_state: GameState, turns: Vec<TurnRecord>) -> Self
    where
        B: Board + ?Sized,
        A: PlayerAgent,
    {
        let properties = (0..board.total_cells())
            .filter(|&cell| board.category(cell).is_purchasable())
            .map(|cell| PropertyLine {
                cell,
                name: board.name(cell).to_string(),
                owner: final_state.owner(cell),
            })
            .collect();

        Self {
            agent_names: agents.iter().map(|a| a.name().to_string()).collect(),
            final_state,
            properties,
            turns,
        }
    }

    /// Names of the properties a seat owns.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(move |line| line.owner == Some(player))
            .map(|line| line.name.as_str())
    }

    /// Emit the final cash, bank and ownership figures at info level.
    pub fn log_summary(&self) {
        info!("game end");
        for (player, cash) in self.final_state.cash_holdings().iter() {
            info!(%player, cash, "final cash holdings");
        }
        info!(bank_money = self.final_state.bank_money, "total money in the bank");
        for line in &self.properties {
            match line.owner {
                Some(owner) => info!(property = %line.name, %owner, "final property status"),
                None => info!(property = %line.name, "final property status: unowned"),
            }
        }
    }
}

impl std::fmt::Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = &self.final_state;
        writeln!(f, "Turns played: {}", state.turn_index)?;

        for (player, cash) in state.cash_holdings().iter() {
            let agent = self.agent_names.get(player.index()).map_or("?", String::as_str);
            let owned: Vec<_> = self.owned_by(player).collect();
            writeln!(f, "{player} ({agent}): cash {cash}, position {}", state.position(player))?;
            if !owned.is_empty() {
                writeln!(f, "  owns: {}", owned.join(", "))?;
            }
        }

        write!(f, "Bank: {}", state.bank_money)
    }
}
