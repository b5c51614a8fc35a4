//! Dice rolling and the jail rules that depend on it.
//!
//! A turn throws every die together. Throwing again happens only on a
//! double (every die showing the same face), up to `max_rolls` throws in
//! total. A player who starts the turn in jail throws exactly once.
//!
//! ## Jail transitions
//!
//! Judged on the last throw of the turn:
//! - started in jail: stays unless the last throw is a double
//! - otherwise: jailed only when all `max_rolls` throws were doubles

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{is_double, Die, GameConfig, GameState, RollTuple};

/// Source of dice throws.
pub trait DiceSource {
    /// Number of physical dice.
    fn die_count(&self) -> usize;

    /// Throw every die once.
    fn roll_all(&mut self) -> RollTuple;
}

/// One independently seeded `Die` per configured seed.
#[derive(Clone, Debug)]
pub struct SeededDice {
    dice: Vec<Die>,
}

impl SeededDice {
    /// Build the dice described by a config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            dice: config
                .dice_seeds
                .iter()
                .map(|&seed| Die::new(config.die_faces, seed))
                .collect(),
        }
    }
}

impl DiceSource for SeededDice {
    fn die_count(&self) -> usize {
        self.dice.len()
    }

    fn roll_all(&mut self) -> RollTuple {
        self.dice.iter_mut().map(Die::roll).collect()
    }
}

/// Replays a fixed list of throws, cycling when exhausted.
///
/// ```
/// use board_sim::rules::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([[3, 3], [1, 2]]);
/// assert_eq!(dice.roll_all().as_slice(), &[3, 3]);
/// assert_eq!(dice.roll_all().as_slice(), &[1, 2]);
/// assert_eq!(dice.roll_all().as_slice(), &[3, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<RollTuple>,
}

impl ScriptedDice {
    /// Create from a list of equal-width throws. Panics on an empty list.
    pub fn new<const N: usize>(throws: impl IntoIterator<Item = [u8; N]>) -> Self {
        Self::from_rolls(throws.into_iter().map(|t| SmallVec::from_slice(&t)).collect())
    }

    /// Create from prepared throws. Panics on an empty list.
    #[must_use]
    pub fn from_rolls(throws: Vec<RollTuple>) -> Self {
        assert!(!throws.is_empty(), "ScriptedDice needs at least one throw");
        Self {
            script: throws.into(),
        }
    }
}

impl DiceSource for ScriptedDice {
    fn die_count(&self) -> usize {
        self.script.front().map_or(0, |t| t.len())
    }

    fn roll_all(&mut self) -> RollTuple {
        let next = self.script.pop_front().unwrap_or_default();
        self.script.push_back(next.clone());
        next
    }
}

/// Jail decision for the throws recorded this turn.
#[must_use]
pub fn should_enter_jail(history: &[RollTuple], started_in_jail: bool, max_rolls: usize) -> bool {
    let last_is_double = history.last().is_some_and(|roll| is_double(roll));
    if started_in_jail {
        return !last_is_double;
    }
    history.len() == max_rolls && last_is_double
}

/// Throws the dice for a turn and records the results in the state.
#[derive(Clone, Debug)]
pub struct DiceRollResolver<D> {
    dice: D,
    max_rolls: usize,
}

impl<D: DiceSource> DiceRollResolver<D> {
    /// Wrap a dice source. `max_rolls` is the throw cap (3 classically).
    pub fn new(dice: D, max_rolls: usize) -> Self {
        assert!(max_rolls > 0, "At least one throw per turn");
        Self { dice, max_rolls }
    }

    /// Throw cap per turn.
    #[must_use]
    pub fn max_rolls(&self) -> usize {
        self.max_rolls
    }

    /// Throw until a non-double, the cap, or (in jail) after one throw.
    ///
    /// Replaces the state's dice history with this turn's throws and
    /// returns them.
    pub fn resolve_rolls<'s>(&mut self, state: &'s mut GameState, player_in_jail: bool) -> &'s [RollTuple] {
        state.dice_history.clear();

        for _ in 0..self.max_rolls {
            let roll = self.dice.roll_all();
            trace!(?roll, "throw");
            let double = is_double(&roll);
            state.dice_history.push(roll);

            if player_in_jail || !double {
                break;
            }
        }

        &state.dice_history
    }

    /// Jail decision for the state's recorded throws.
    #[must_use]
    pub fn should_enter_jail(&self, state: &GameState, started_in_jail: bool) -> bool {
        should_enter_jail(&state.dice_history, started_in_jail, self.max_rolls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn state() -> GameState {
        GameState::new(&GameConfig::default(), 40).unwrap()
    }

    #[test]
    fn test_stops_on_first_non_double() {
        let mut state = state();
        let mut resolver = DiceRollResolver::new(ScriptedDice::new([[2, 5]]), 3);

        let rolls = resolver.resolve_rolls(&mut state, false);
        assert_eq!(rolls.len(), 1);
    }

    #[test]
    fn test_rerolls_on_doubles() {
        let mut state = state();
        let mut resolver = DiceRollResolver::new(ScriptedDice::new([[4, 4], [1, 1], [2, 3]]), 3);

        let rolls = resolver.resolve_rolls(&mut state, false);
        assert_eq!(rolls.len(), 3);
        assert!(!resolver.should_enter_jail(&state, false));
    }

    #[test]
    fn test_three_doubles_caps_and_jails() {
        let mut state = state();
        let mut resolver = DiceRollResolver::new(ScriptedDice::new([[6, 6]]), 3);

        assert_eq!(resolver.resolve_rolls(&mut state, false).len(), 3);
        assert!(resolver.should_enter_jail(&state, false));
    }

    #[test]
    fn test_jailed_player_throws_once() {
        let mut state = state();
        let mut resolver = DiceRollResolver::new(ScriptedDice::new([[5, 5]]), 3);

        assert_eq!(resolver.resolve_rolls(&mut state, true).len(), 1);
        // A double paroles.
        assert!(!resolver.should_enter_jail(&state, true));
    }

    #[test]
    fn test_jailed_player_stays_on_non_double() {
        let history: Vec<RollTuple> = vec![smallvec![1, 2]];
        assert!(should_enter_jail(&history, true, 3));
    }

    #[test]
    fn test_history_replaced_each_turn() {
        let mut state = state();
        let mut resolver = DiceRollResolver::new(ScriptedDice::new([[2, 2], [1, 3], [6, 1]]), 3);

        resolver.resolve_rolls(&mut state, false);
        assert_eq!(state.dice_history.len(), 2);

        resolver.resolve_rolls(&mut state, false);
        assert_eq!(state.dice_history.len(), 1);
        assert_eq!(state.dice_history[0].as_slice(), &[6, 1]);
    }

    #[test]
    fn test_three_dice_double_means_all_equal() {
        let mut state = state();
        let mut resolver = DiceRollResolver::new(ScriptedDice::new([[3, 3, 4]]), 3);

        assert_eq!(resolver.resolve_rolls(&mut state, false).len(), 1);
    }

    #[test]
    fn test_seeded_dice_match_config() {
        let config = GameConfig::default().with_dice_seeds(vec![1, 2, 3]);
        let mut dice = SeededDice::from_config(&config);

        assert_eq!(dice.die_count(), 3);
        let roll = dice.roll_all();
        assert_eq!(roll.len(), 3);
        assert!(roll.iter().all(|f| (1..=6).contains(f)));
    }
}
