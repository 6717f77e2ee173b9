//! Player identity for two-player, zero-sum games.
//!
//! Every game variant maps its own labels onto the two sides
//! (Reversi: First = Black, Second = White; the card game keeps
//! them abstract).

use serde::{Deserialize, Serialize};

/// One of the two players in a game.
///
/// `First` is the side that moves first in a default configuration;
/// variants with a configurable first mover say so explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Iterate over both sides, `First` then `Second`.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::First, Side::Second].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "first player"),
            Side::Second => write!(f, "second player"),
        }
    }
}
