//! Engine error taxonomy.
//!
//! Three classes of failure, recovered at different points:
//!
//! - [`EngineError::IllegalMove`]: a proposed move is not in the legal set.
//!   Rejected at the boundary with no state change, never a crash.
//! - [`EngineError::InvalidConfig`]: a game was configured with unusable
//!   parameters. Fatal at construction time, prevents the game starting.
//! - [`EngineError::InvariantViolation`]: defensive only. Indicates a bug
//!   in a rules implementation, not a runtime condition to recover from.
//!
//! Everything else in the engine is total: `legal_moves` never fails and
//! search always terminates because states strictly shrink.

use super::side::Side;

/// Error raised by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The move is not legal for this side in this state.
    #[display("illegal move for {}: {}", _0, _1)]
    IllegalMove(Side, String),

    /// A game configuration parameter is unusable.
    #[display("invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// A state was reached that correct rules code cannot produce.
    #[display("engine invariant violated: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Build an `IllegalMove` with a formatted description of the move.
    pub fn illegal<M: std::fmt::Debug>(side: Side, mv: &M) -> Self {
        EngineError::IllegalMove(side, format!("{mv:?}"))
    }
}
