//! The three game variants.

pub mod modsum;
pub mod nim;
pub mod reversi;

pub use modsum::{ModSum, ModSumConfig, ModSumMove, ModSumState};
pub use nim::{Heap, Nim, NimMove, NimState, NimSumPolicy};
pub use reversi::{Reversi, ReversiMove, ReversiState};
