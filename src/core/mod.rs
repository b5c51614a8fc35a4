//! Core engine types: players, RNG, configuration, state, errors.
//!
//! Everything a turn mutates lives in `GameState`; everything that shapes
//! a run lives in `GameConfig`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::{Die, GameRng};
pub use config::GameConfig;
pub use error::{SimError, SimResult};
pub use state::{is_double, total_pips, GameState, Owner, RollTuple};
