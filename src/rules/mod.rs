//! The game rules interface shared by all variants.

mod engine;

pub use engine::{Derived, Outcome, Rules};
