//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of a player. Turn order is round-robin over seats, so the
//! active player for turn `t` is `PlayerId(t % player_count)`.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage (positions, cash). Backed by an
//! `im::Vector` so that cloning a whole game state for a broadcast is
//! cheap while still behaving as an independent value.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat whose turn it is for the given turn index.
    ///
    /// ```
    /// use board_sim::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(1, 2), PlayerId::new(1));
    /// assert_eq!(PlayerId::for_turn(2, 2), PlayerId::new(0));
    /// assert_eq!(PlayerId::for_turn(7, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn for_turn(turn_index: u64, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        PlayerId((turn_index % player_count as u64) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexable by `PlayerId`.
///
/// ```
/// use board_sim::core::{PlayerId, PlayerMap};
///
/// let mut cash: PlayerMap<i64> = PlayerMap::with_value(2, 1500);
/// cash[PlayerId::new(1)] -= 200;
///
/// assert_eq!(cash[PlayerId::new(0)], 1500);
/// assert_eq!(cash[PlayerId::new(1)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T: Clone> {
    data: Vector<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self {
        Self::new(player_count, |_| value.clone())
    }

    /// Build a map from explicit per-seat values.
    ///
    /// Returns `None` for an empty vector.
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        if values.is_empty() || values.len() > 255 {
            return None;
        }
        Some(Self {
            data: values.into_iter().collect(),
        })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's value, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's value, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T: Clone> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T: Clone> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
