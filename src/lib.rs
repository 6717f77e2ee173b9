//! # parlor
//!
//! An in-process engine for three two-player, perfect-information,
//! zero-sum games played against a computer opponent:
//!
//! - a 6×6 flipping-capture board game with a non-standard start,
//! - misère three-heap Nim (last to move loses),
//! - a mod-M card game over a shared running sum.
//!
//! ## Design Principles
//!
//! 1. **Pure rules, owned state**: rules implementations are value types
//!    whose operations take a state and return a new one. The only mutable
//!    data in the engine is the current-state-plus-history pair inside a
//!    [`session::Session`].
//!
//! 2. **Derived, never patched**: turn, terminal flag, winner and legal
//!    moves are recomputed from the state after every transition in one
//!    place ([`rules::Rules::derived`]), so they cannot drift.
//!
//! 3. **Reproducible play**: any randomness in move selection comes from
//!    an injected seeded RNG; searches are deterministic.
//!
//! ## Modules
//!
//! - `core`: player identity, deterministic RNG, error taxonomy
//! - `rules`: the rules contract every variant implements
//! - `games`: the three variants
//! - `search`: alpha-beta minimax and the strategy trait
//! - `session`: turn controller, history and undo
//!
//! The crate is a library with no rendering, persistence or networking;
//! a presentation layer calls in with proposed moves and polls snapshots
//! to draw itself.

pub mod core;
pub mod games;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, Side};
pub use crate::rules::{Derived, Outcome, Rules};
pub use crate::search::{Minimax, SearchConfig, SearchStats, Strategy};
pub use crate::session::{Phase, Session, Snapshot};

pub use crate::games::{
    Heap, ModSum, ModSumConfig, ModSumMove, ModSumState, Nim, NimMove, NimState, NimSumPolicy,
    Reversi, ReversiMove, ReversiState,
};
