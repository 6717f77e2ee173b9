//! Misère three-heap Nim.
//!
//! Three colored heaps of tokens; a move removes between one token and the
//! whole heap from a single heap. The board empties monotonically, and the
//! player forced to take the last token **loses** (misère rule).
//!
//! Computer play follows the Nim-sum rule exactly: when the XOR of the heap
//! sizes is nonzero a move exists that zeroes it, and [`NimSumPolicy`]
//! plays the first such move in enumeration order. When the XOR is already
//! zero there is no textbook move, and the policy falls back to a uniform
//! choice among all legal moves drawn from its injected seeded RNG.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, GameRng, Side};
use crate::rules::{Outcome, Rules};
use crate::search::{SearchConfig, Strategy};

/// The three heaps, in canonical enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heap {
    Blue,
    Yellow,
    Red,
}

impl Heap {
    /// All heaps in enumeration order.
    pub const ALL: [Heap; 3] = [Heap::Blue, Heap::Yellow, Heap::Red];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Heap::Blue => 0,
            Heap::Yellow => 1,
            Heap::Red => 2,
        }
    }
}

/// Remove `take` tokens from `heap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimMove {
    pub heap: Heap,
    pub take: u32,
}

impl NimMove {
    #[must_use]
    pub const fn new(heap: Heap, take: u32) -> Self {
        Self { heap, take }
    }
}

/// Immutable Nim position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimState {
    heaps: [u32; 3],
    to_move: Side,
}

impl NimState {
    /// Current size of a heap.
    #[must_use]
    pub fn heap(&self, heap: Heap) -> u32 {
        self.heaps[heap.index()]
    }

    /// Total tokens remaining; strictly decreases across the game.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.heaps.iter().sum()
    }

    fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, h| acc ^ h)
    }
}

/// Rules object holding the configured initial heap sizes.
#[derive(Clone, Copy, Debug)]
pub struct Nim {
    initial_heaps: [u32; 3],
}

impl Nim {
    /// Configure a game with the given Blue/Yellow/Red heap sizes.
    ///
    /// An all-empty board is rejected: the game would be over before the
    /// first move.
    pub fn new(heaps: [u32; 3]) -> Result<Self, EngineError> {
        if heaps.iter().all(|&h| h == 0) {
            return Err(EngineError::InvalidConfig(
                "nim requires at least one non-empty heap".into(),
            ));
        }
        Ok(Self {
            initial_heaps: heaps,
        })
    }
}

impl Rules for Nim {
    type State = NimState;
    type Move = NimMove;

    fn initial_state(&self) -> NimState {
        NimState {
            heaps: self.initial_heaps,
            to_move: Side::First,
        }
    }

    fn to_move(&self, state: &NimState) -> Side {
        state.to_move
    }

    /// Moves are side-independent: whichever side is to act may take from
    /// any non-empty heap. Enumeration order is heap order, then take
    /// count ascending.
    fn legal_moves(&self, state: &NimState, _side: Side) -> Vec<NimMove> {
        let mut moves = Vec::new();
        for heap in Heap::ALL {
            for take in 1..=state.heap(heap) {
                moves.push(NimMove::new(heap, take));
            }
        }
        moves
    }

    fn apply(
        &self,
        state: &NimState,
        mv: &NimMove,
        side: Side,
    ) -> Result<NimState, EngineError> {
        let size = state.heap(mv.heap);
        if side != state.to_move || mv.take == 0 || mv.take > size {
            return Err(EngineError::illegal(side, mv));
        }
        let mut heaps = state.heaps;
        heaps[mv.heap.index()] = size - mv.take;
        Ok(NimState {
            heaps,
            to_move: side.opponent(),
        })
    }

    fn is_terminal(&self, state: &NimState) -> bool {
        state.total() == 0
    }

    /// Misère: the side that removed the last token loses, so the side
    /// whose turn it would be at the empty board is the winner.
    fn winner(&self, state: &NimState) -> Outcome {
        if self.is_terminal(state) {
            Outcome::Won(state.to_move)
        } else {
            Outcome::Ongoing
        }
    }

    /// Exact misère evaluation, no approximation: the mover wins iff some
    /// heap has two or more tokens and the nim-sum is nonzero, or every
    /// heap holds at most one token and the number of one-token heaps is
    /// even.
    fn evaluate(&self, state: &NimState, side: Side) -> i32 {
        let mover = state.to_move;
        let endgame = state.heaps.iter().all(|&h| h <= 1);
        let mover_wins = if endgame {
            state.heaps.iter().filter(|&&h| h == 1).count() % 2 == 0
        } else {
            state.nim_sum() != 0
        };
        let winner = if mover_wins { mover } else { mover.opponent() };
        if winner == side {
            100
        } else {
            -100
        }
    }
}

/// Textbook Nim-sum move selection with a seeded uniform fallback.
#[derive(Clone, Debug)]
pub struct NimSumPolicy {
    rng: GameRng,
}

impl NimSumPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed the fallback RNG from a search configuration.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(GameRng::new(config.seed))
    }
}

impl Strategy<Nim> for NimSumPolicy {
    fn choose(&mut self, rules: &Nim, state: &NimState) -> Option<NimMove> {
        let side = rules.to_move(state);
        let moves = rules.legal_moves(state, side);
        if moves.is_empty() {
            return None;
        }

        // First move that zeroes the nim-sum; exists whenever the
        // pre-move nim-sum is nonzero.
        let zeroing: SmallVec<[NimMove; 8]> = moves
            .iter()
            .filter(|mv| {
                let mut heaps = state.heaps;
                heaps[mv.heap.index()] -= mv.take;
                heaps.iter().fold(0, |acc, h| acc ^ h) == 0
            })
            .copied()
            .collect();

        match zeroing.first() {
            Some(mv) => Some(*mv),
            None => self.rng.choose(&moves).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Nim {
        Nim::new([7, 6, 2]).unwrap()
    }

    fn state(heaps: [u32; 3], to_move: Side) -> NimState {
        NimState { heaps, to_move }
    }

    #[test]
    fn test_config_rejects_empty_board() {
        assert!(matches!(
            Nim::new([0, 0, 0]),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(Nim::new([0, 0, 1]).is_ok());
    }

    #[test]
    fn test_initial_state() {
        let s = game().initial_state();
        assert_eq!(s.heap(Heap::Blue), 7);
        assert_eq!(s.heap(Heap::Yellow), 6);
        assert_eq!(s.heap(Heap::Red), 2);
        assert_eq!(s.total(), 15);
    }

    #[test]
    fn test_legal_move_enumeration() {
        let s = state([2, 0, 1], Side::First);
        let moves = game().legal_moves(&s, Side::First);
        assert_eq!(
            moves,
            vec![
                NimMove::new(Heap::Blue, 1),
                NimMove::new(Heap::Blue, 2),
                NimMove::new(Heap::Red, 1),
            ]
        );
    }

    #[test]
    fn test_apply_decrements_one_heap() {
        let g = game();
        let s = g.initial_state();
        let next = g
            .apply(&s, &NimMove::new(Heap::Yellow, 4), Side::First)
            .unwrap();
        assert_eq!(next.heap(Heap::Yellow), 2);
        assert_eq!(next.heap(Heap::Blue), 7);
        assert_eq!(g.to_move(&next), Side::Second);
        assert!(next.total() < s.total());
    }

    #[test]
    fn test_apply_rejects_overdraw_and_wrong_turn() {
        let g = game();
        let s = g.initial_state();
        assert!(g
            .apply(&s, &NimMove::new(Heap::Red, 3), Side::First)
            .is_err());
        assert!(g
            .apply(&s, &NimMove::new(Heap::Red, 0), Side::First)
            .is_err());
        assert!(g
            .apply(&s, &NimMove::new(Heap::Red, 1), Side::Second)
            .is_err());
    }

    #[test]
    fn test_misere_winner_is_the_non_mover() {
        let g = game();
        // Second empties the board, so Second loses and First wins.
        let s = state([0, 0, 1], Side::Second);
        let end = g
            .apply(&s, &NimMove::new(Heap::Red, 1), Side::Second)
            .unwrap();
        assert!(g.is_terminal(&end));
        assert_eq!(g.winner(&end), Outcome::Won(Side::First));
    }

    #[test]
    fn test_evaluate_misere_endgame() {
        let g = game();
        // A single one-token heap: the mover must take it and lose.
        assert_eq!(g.evaluate(&state([1, 0, 0], Side::First), Side::First), -100);
        // Two one-token heaps: the mover wins.
        assert_eq!(g.evaluate(&state([1, 1, 0], Side::First), Side::First), 100);
        // Three one-token heaps: the mover loses.
        assert_eq!(g.evaluate(&state([1, 1, 1], Side::First), Side::First), -100);
        // Big-heap position with nonzero nim-sum favors the mover.
        assert_eq!(g.evaluate(&state([7, 6, 2], Side::First), Side::First), 100);
        // Zero nim-sum with a big heap favors the opponent.
        assert_eq!(g.evaluate(&state([2, 2, 0], Side::First), Side::First), -100);
    }

    #[test]
    fn test_policy_zeroes_the_nim_sum() {
        // (1,1,2): nim-sum 2; the only zeroing move takes both red tokens,
        // leaving (1,1,0).
        let g = game();
        let s = state([1, 1, 2], Side::Second);
        let mut policy = NimSumPolicy::new(GameRng::new(7));

        let mv = policy.choose(&g, &s).unwrap();
        assert_eq!(mv, NimMove::new(Heap::Red, 2));
    }

    #[test]
    fn test_policy_from_config_uses_the_config_seed() {
        let g = game();
        let s = state([1, 1, 0], Side::First);
        let config = SearchConfig::default().with_seed(9);

        let from_config = NimSumPolicy::from_config(&config).choose(&g, &s);
        let from_rng = NimSumPolicy::new(GameRng::new(9)).choose(&g, &s);
        assert_eq!(from_config, from_rng);
    }

    #[test]
    fn test_policy_fallback_is_legal_and_seeded() {
        // (1,1,0) has nim-sum 0: no zeroing move exists, so the policy
        // samples uniformly from its seeded RNG.
        let g = game();
        let s = state([1, 1, 0], Side::First);

        let mv1 = NimSumPolicy::new(GameRng::new(9)).choose(&g, &s).unwrap();
        let mv2 = NimSumPolicy::new(GameRng::new(9)).choose(&g, &s).unwrap();
        assert_eq!(mv1, mv2);
        assert!(g.legal_moves(&s, Side::First).contains(&mv1));
    }
}
