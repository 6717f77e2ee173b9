//! Mod-M card game over a shared running sum.
//!
//! Each side holds its own hand of single-use cards valued `1..=N`. A move
//! plays one card from the mover's hand onto a shared sequence and adds its
//! value to the running sum. The moment the sum becomes a multiple of `M`,
//! the side that just played loses (sudden death). If both hands empty out
//! without ever hitting a multiple, the configured exhaustion winner takes
//! the game.
//!
//! Both the first mover and the exhaustion winner vary between observed
//! versions of this game, so they are required configuration, never
//! inferred.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, Side};
use crate::rules::{Outcome, Rules};

type Hand = SmallVec<[u32; 16]>;

/// Fixed per-game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModSumConfig {
    /// Cards per hand; each side holds `1..=card_count`.
    pub card_count: u32,
    /// Losing divisor `M`.
    pub modulus: u32,
    /// Side that plays first.
    pub first_mover: Side,
    /// Winner when every card is played without hitting a multiple of `M`.
    pub exhaustion_winner: Side,
}

/// Play one card from the mover's own hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModSumMove {
    pub card: u32,
}

impl ModSumMove {
    #[must_use]
    pub const fn new(card: u32) -> Self {
        Self { card }
    }
}

/// One entry of the shared played sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub side: Side,
    pub card: u32,
}

/// Immutable game position.
///
/// The played sequence is an `im::Vector`, so cloning a state during
/// search shares structure instead of copying the history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModSumState {
    hands: [Hand; 2],
    played: Vector<Play>,
    sum: u32,
    to_move: Side,
}

impl ModSumState {
    fn hand_index(side: Side) -> usize {
        match side {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Remaining cards for a side, ascending.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[u32] {
        &self.hands[Self::hand_index(side)]
    }

    /// The shared played sequence in play order.
    #[must_use]
    pub fn played(&self) -> &Vector<Play> {
        &self.played
    }

    /// Running sum; always equals the sum of the played sequence.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }
}

/// Rules object holding the validated configuration.
#[derive(Clone, Copy, Debug)]
pub struct ModSum {
    config: ModSumConfig,
}

impl ModSum {
    /// Validate and adopt a configuration.
    ///
    /// Zero cards or a zero modulus can never produce a playable game and
    /// are rejected up front.
    pub fn new(config: ModSumConfig) -> Result<Self, EngineError> {
        if config.card_count == 0 {
            return Err(EngineError::InvalidConfig(
                "card count must be positive".into(),
            ));
        }
        if config.modulus == 0 {
            return Err(EngineError::InvalidConfig(
                "modulus must be positive".into(),
            ));
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ModSumConfig {
        &self.config
    }

    fn sudden_death(&self, state: &ModSumState) -> bool {
        !state.played.is_empty() && state.sum % self.config.modulus == 0
    }
}

impl Rules for ModSum {
    type State = ModSumState;
    type Move = ModSumMove;

    fn initial_state(&self) -> ModSumState {
        let full: Hand = (1..=self.config.card_count).collect();
        ModSumState {
            hands: [full.clone(), full],
            played: Vector::new(),
            sum: 0,
            to_move: self.config.first_mover,
        }
    }

    fn to_move(&self, state: &ModSumState) -> Side {
        state.to_move
    }

    /// A side's legal moves are its remaining cards, ascending. Once the
    /// game has ended (sudden death included) nobody has a legal move.
    fn legal_moves(&self, state: &ModSumState, side: Side) -> Vec<ModSumMove> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        state.hand(side).iter().map(|&c| ModSumMove::new(c)).collect()
    }

    fn apply(
        &self,
        state: &ModSumState,
        mv: &ModSumMove,
        side: Side,
    ) -> Result<ModSumState, EngineError> {
        if side != state.to_move || self.is_terminal(state) {
            return Err(EngineError::illegal(side, mv));
        }
        let idx = ModSumState::hand_index(side);
        let Some(pos) = state.hands[idx].iter().position(|&c| c == mv.card) else {
            return Err(EngineError::illegal(side, mv));
        };

        let mut hands = state.hands.clone();
        hands[idx].remove(pos);

        let mut played = state.played.clone();
        played.push_back(Play {
            side,
            card: mv.card,
        });

        Ok(ModSumState {
            hands,
            played,
            sum: state.sum + mv.card,
            to_move: side.opponent(),
        })
    }

    fn is_terminal(&self, state: &ModSumState) -> bool {
        self.sudden_death(state)
            || (state.hand(Side::First).is_empty() && state.hand(Side::Second).is_empty())
    }

    /// Sudden death is checked before exhaustion: a last card that lands
    /// on a multiple of `M` loses even though it also empties the hands.
    fn winner(&self, state: &ModSumState) -> Outcome {
        if self.sudden_death(state) {
            // Sum is only re-checked after a play, so the back of the
            // sequence is the card that tripped the multiple.
            let loser = state
                .played
                .back()
                .map(|p| p.side)
                .unwrap_or(self.config.first_mover);
            Outcome::Won(loser.opponent())
        } else if self.is_terminal(state) {
            Outcome::Won(self.config.exhaustion_winner)
        } else {
            Outcome::Ongoing
        }
    }

    /// Safe-card differential: cards the side could play without losing on
    /// the spot, minus the same count for the opponent. Exact search makes
    /// this a tiebreak more than a driver.
    fn evaluate(&self, state: &ModSumState, side: Side) -> i32 {
        if let Outcome::Won(w) = self.winner(state) {
            return if w == side { 100 } else { -100 };
        }
        let safe = |s: Side| {
            state
                .hand(s)
                .iter()
                .filter(|&&c| (state.sum + c) % self.config.modulus != 0)
                .count() as i32
        };
        safe(side) - safe(side.opponent())
    }
}
