//! 6×6 flipping-capture board game (Reversi variant).
//!
//! A move is legal on an empty cell when, in at least one of the eight
//! compass directions, a run of one or more opponent pieces is immediately
//! closed by a piece of the moving side. Applying the move places the piece
//! and flips the union of every qualifying run; captures are always full,
//! never partial.
//!
//! Turn alternation is pass-aware: the turn goes to the opponent if they
//! have a legal move, otherwise back to the mover; the game ends only when
//! neither side can move. Winner is the side with more pieces, equal counts
//! are a draw.
//!
//! The starting position is non-standard: the center block holds Black on
//! the upper row and White on the lower row (not the usual diagonal).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, Side};
use crate::rules::{Outcome, Rules};

/// Board width and height.
pub const SIZE: usize = 6;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell contents indexed `[row][col]`; `None` is empty.
pub type Board = [[Option<Side>; SIZE]; SIZE];

type Captures = SmallVec<[(usize, usize); 16]>;

/// Placement of a piece at `(row, col)`, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReversiMove {
    pub row: usize,
    pub col: usize,
}

impl ReversiMove {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable Reversi position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversiState {
    board: Board,
    to_move: Side,
}

impl ReversiState {
    /// The cell at `(row, col)`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Side> {
        self.board.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Piece count for a side.
    #[must_use]
    pub fn count(&self, side: Side) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|c| **c == Some(side))
            .count() as u32
    }
}

/// Rules object for the 6×6 variant. Black is [`Side::First`] and moves
/// first; the board is fixed, so there is nothing to configure.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversi;

impl Reversi {
    /// Opponent pieces captured in one direction from `(row, col)`.
    ///
    /// Returns the run of opponent pieces only when it is closed by a
    /// mover's piece; an open or empty-ended run captures nothing.
    fn run_captured(
        board: &Board,
        row: usize,
        col: usize,
        side: Side,
        dir: (i8, i8),
    ) -> SmallVec<[(usize, usize); 4]> {
        let mut run: SmallVec<[(usize, usize); 4]> = SmallVec::new();
        let (mut r, mut c) = (row as i8 + dir.0, col as i8 + dir.1);

        while (0..SIZE as i8).contains(&r) && (0..SIZE as i8).contains(&c) {
            match board[r as usize][c as usize] {
                Some(s) if s == side.opponent() => run.push((r as usize, c as usize)),
                Some(_) => return run,
                None => break,
            }
            r += dir.0;
            c += dir.1;
        }
        SmallVec::new()
    }

    /// Union of captures across all eight directions.
    fn captures(board: &Board, row: usize, col: usize, side: Side) -> Captures {
        let mut all = Captures::new();
        for dir in DIRECTIONS {
            all.extend(Self::run_captured(board, row, col, side, dir));
        }
        all
    }

    fn is_legal_cell(board: &Board, row: usize, col: usize, side: Side) -> bool {
        board[row][col].is_none()
            && DIRECTIONS
                .iter()
                .any(|&dir| !Self::run_captured(board, row, col, side, dir).is_empty())
    }

    fn side_has_move(board: &Board, side: Side) -> bool {
        (0..SIZE).any(|r| (0..SIZE).any(|c| Self::is_legal_cell(board, r, c, side)))
    }
}

impl Rules for Reversi {
    type State = ReversiState;
    type Move = ReversiMove;

    fn initial_state(&self) -> ReversiState {
        let mut board: Board = [[None; SIZE]; SIZE];
        let mid = SIZE / 2;
        board[mid - 1][mid - 1] = Some(Side::First);
        board[mid - 1][mid] = Some(Side::First);
        board[mid][mid - 1] = Some(Side::Second);
        board[mid][mid] = Some(Side::Second);
        ReversiState {
            board,
            to_move: Side::First,
        }
    }

    fn to_move(&self, state: &ReversiState) -> Side {
        state.to_move
    }

    fn legal_moves(&self, state: &ReversiState, side: Side) -> Vec<ReversiMove> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if Self::is_legal_cell(&state.board, row, col, side) {
                    moves.push(ReversiMove::new(row, col));
                }
            }
        }
        moves
    }

    fn apply(
        &self,
        state: &ReversiState,
        mv: &ReversiMove,
        side: Side,
    ) -> Result<ReversiState, EngineError> {
        if side != state.to_move || mv.row >= SIZE || mv.col >= SIZE {
            return Err(EngineError::illegal(side, mv));
        }
        let flips = Self::captures(&state.board, mv.row, mv.col, side);
        if state.board[mv.row][mv.col].is_some() || flips.is_empty() {
            return Err(EngineError::illegal(side, mv));
        }

        let mut board = state.board;
        board[mv.row][mv.col] = Some(side);
        for (r, c) in flips {
            board[r][c] = Some(side);
        }

        // Opponent moves next if able, otherwise the mover goes again.
        // When neither can move the state is terminal and to_move is moot.
        let next = if Self::side_has_move(&board, side.opponent()) {
            side.opponent()
        } else if Self::side_has_move(&board, side) {
            side
        } else {
            side.opponent()
        };

        Ok(ReversiState {
            board,
            to_move: next,
        })
    }

    fn is_terminal(&self, state: &ReversiState) -> bool {
        !Self::side_has_move(&state.board, Side::First)
            && !Self::side_has_move(&state.board, Side::Second)
    }

    fn winner(&self, state: &ReversiState) -> Outcome {
        if !self.is_terminal(state) {
            return Outcome::Ongoing;
        }
        let first = state.count(Side::First);
        let second = state.count(Side::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Won(Side::First),
            std::cmp::Ordering::Less => Outcome::Won(Side::Second),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Weighted positional heuristic: piece differential ×3, corners ±10,
    /// non-corner edge cells ±2, mobility differential ×2.
    fn evaluate(&self, state: &ReversiState, side: Side) -> i32 {
        let signed = |owner: Option<Side>| match owner {
            Some(s) if s == side => 1,
            Some(_) => -1,
            None => 0,
        };

        let mut pieces = 0;
        let mut corners = 0;
        let mut edges = 0;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let sign = signed(state.board[row][col]);
                pieces += sign;
                let on_edge_row = row == 0 || row == SIZE - 1;
                let on_edge_col = col == 0 || col == SIZE - 1;
                if on_edge_row && on_edge_col {
                    corners += sign;
                } else if on_edge_row || on_edge_col {
                    edges += sign;
                }
            }
        }

        let mobility = self.legal_moves(state, side).len() as i32
            - self.legal_moves(state, side.opponent()).len() as i32;

        3 * pieces + 10 * corners + 2 * edges + 2 * mobility
    }
}
