//! Adversarial move selection.
//!
//! [`Minimax`] is the generic alpha-beta engine; game-specific strategies
//! (the Nim-sum policy) implement the same [`Strategy`] trait so the turn
//! controller can drive any of them interchangeably.

mod config;
mod minimax;

pub use config::SearchConfig;
pub use minimax::{Minimax, SearchStats, SCORE_WIN};

use crate::rules::Rules;

/// A method of choosing a move for the side to move.
pub trait Strategy<R: Rules> {
    /// Pick a move, or `None` when the state is terminal.
    ///
    /// Blocking and non-cancellable: callers wanting a "thinking" pause
    /// for presentation add it around this call.
    fn choose(&mut self, rules: &R, state: &R::State) -> Option<R::Move>;
}
