//! Turn scheduling and reporting.

mod scheduler;
mod report;

pub use scheduler::{run_game, Game};
pub use report::{GameReport, PropertyLine, TurnRecord};
