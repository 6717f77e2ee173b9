//! Turn controller and history stack.
//!
//! One [`Session`] per active game: it owns the current state and the
//! history of every prior state, drives alternating turns, and exposes the
//! small surface the presentation layer consumes (snapshot, submit, play
//! computer move, undo). Everything here is single-threaded and
//! synchronous; the customary "thinking" pause before the computer moves
//! is the caller's concern.

mod controller;

pub use controller::{Phase, Session, Snapshot};
