//! Rules trait for game variants.
//!
//! Every variant implements [`Rules`] to define:
//! - which moves are legal
//! - how a move transforms a state
//! - when the game is over and who won
//! - a static evaluation for depth-limited search
//!
//! All methods are pure: `apply` takes a state by reference and returns a
//! fresh one, never mutating shared data. That value discipline is what
//! makes undo trivial and lets search explore hypothetical futures without
//! disturbing the real game.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Side};

/// Winner determination for a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is over with a single winner.
    Won(Side),
    /// The game is over with no winner.
    Draw,
    /// The game has not ended.
    Ongoing,
}

impl Outcome {
    /// Check whether a side won.
    #[must_use]
    pub fn is_win_for(&self, side: Side) -> bool {
        matches!(self, Outcome::Won(w) if *w == side)
    }
}

/// Derived attributes of a state, recomputed after every transition.
///
/// Turn, terminal flag, winner and the legal-move set are functions of the
/// state. They are produced in one place ([`Rules::derived`]) and never
/// hand-patched elsewhere, so they cannot drift out of sync with the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Derived<M> {
    /// Side whose turn it is. Meaningless when `game_over` is set.
    pub to_move: Side,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Winner determination.
    pub outcome: Outcome,
    /// Legal moves for `to_move`; empty when the game is over.
    pub legal_moves: Vec<M>,
}

/// The contract every game variant implements.
///
/// A rules value holds the fixed per-game configuration (heap sizes,
/// modulus, ...) and no mutable state of its own. Implementations must be
/// deterministic: the same state and move always produce the same result.
pub trait Rules {
    /// Immutable game state snapshot.
    type State: Clone + PartialEq + std::fmt::Debug;
    /// A move proposal.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// The starting state for this configuration.
    fn initial_state(&self) -> Self::State;

    /// Side to move in the given state.
    fn to_move(&self, state: &Self::State) -> Side;

    /// All legal moves for `side`, in the variant's canonical enumeration
    /// order. Empty means `side` has no legal action, which is meaningful
    /// game information, not an error.
    fn legal_moves(&self, state: &Self::State, side: Side) -> Vec<Self::Move>;

    /// Apply a move, producing the successor state.
    ///
    /// Fails with [`EngineError::IllegalMove`] when `mv` is not in
    /// `legal_moves(state, side)`; otherwise deterministic and total.
    fn apply(
        &self,
        state: &Self::State,
        mv: &Self::Move,
        side: Side,
    ) -> Result<Self::State, EngineError>;

    /// Whether the state is terminal.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Winner determination; `Ongoing` while the game continues.
    fn winner(&self, state: &Self::State) -> Outcome;

    /// Heuristic score of the state from `side`'s perspective.
    ///
    /// Used only when search is cut off by depth; higher is better.
    fn evaluate(&self, state: &Self::State, side: Side) -> i32;

    /// Recompute all derived attributes of a state in one place.
    fn derived(&self, state: &Self::State) -> Derived<Self::Move> {
        let to_move = self.to_move(state);
        let game_over = self.is_terminal(state);
        let legal_moves = if game_over {
            Vec::new()
        } else {
            self.legal_moves(state, to_move)
        };
        Derived {
            to_move,
            game_over,
            outcome: self.winner(state),
            legal_moves,
        }
    }
}
