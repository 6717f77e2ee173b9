//! Core building blocks: player identity, deterministic RNG, errors.

mod error;
mod rng;
mod side;

pub use error::EngineError;
pub use rng::GameRng;
pub use side::Side;
