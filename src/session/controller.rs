//! Turn controller owning the current state and its history.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Side};
use crate::rules::{Outcome, Rules};
use crate::search::Strategy;

/// Whose action the session is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the external collaborator to submit a human move.
    HumanTurn,
    /// Waiting for a `play_computer_move` call.
    ComputerTurn,
    /// No further moves; consult the outcome.
    GameOver,
}

/// Read-only projection of a session for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<St, Mv> {
    pub state: St,
    pub phase: Phase,
    pub to_move: Side,
    pub outcome: Outcome,
    /// Legal moves for the side to move; empty once the game is over.
    pub legal_moves: Vec<Mv>,
}

/// Drives alternating turns for one human against one computer strategy.
///
/// The session is the only owner of mutable game data: one current state
/// plus an append-only stack of every prior state. Rules are pure, so each
/// history entry is reachable from its predecessor by exactly one legal
/// move, and undo is a plain truncation.
pub struct Session<R: Rules, S: Strategy<R>> {
    rules: R,
    strategy: S,
    human: Side,
    /// All states before `current`, oldest first. `history[0]` is the
    /// initial state once at least one move has been played.
    history: Vec<R::State>,
    current: R::State,
}

impl<R: Rules, S: Strategy<R>> Session<R, S> {
    /// Start a new game.
    pub fn new(rules: R, strategy: S, human: Side) -> Self {
        let current = rules.initial_state();
        Self {
            rules,
            strategy,
            human,
            history: Vec::new(),
            current,
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.current
    }

    /// The rules instance this session plays by.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The side the human plays.
    #[must_use]
    pub fn human_side(&self) -> Side {
        self.human
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Current phase, recomputed from the state (never stored).
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.rules.is_terminal(&self.current) {
            Phase::GameOver
        } else if self.rules.to_move(&self.current) == self.human {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        }
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<R::State, R::Move> {
        let derived = self.rules.derived(&self.current);
        Snapshot {
            state: self.current.clone(),
            phase: self.phase(),
            to_move: derived.to_move,
            outcome: derived.outcome,
            legal_moves: derived.legal_moves,
        }
    }

    /// Submit the human's move.
    ///
    /// Rejected with no state change and no history push when it is not
    /// the human's turn or the move is not legal; the caller may simply
    /// ignore the error (the UI is expected to prevent such inputs, the
    /// engine still refuses them defensively).
    pub fn submit_human_move(&mut self, mv: &R::Move) -> Result<Phase, EngineError> {
        if self.phase() != Phase::HumanTurn {
            debug!("human move rejected: not the human's turn");
            return Err(EngineError::illegal(self.human, mv));
        }
        let next = self.rules.apply(&self.current, mv, self.human)?;
        self.advance(next);
        Ok(self.phase())
    }

    /// Let the strategy pick and play one computer move.
    ///
    /// One move per call: when a variant passes the turn straight back to
    /// the computer, the phase stays `ComputerTurn` and the caller calls
    /// again (inserting any presentation delay it wants between calls).
    pub fn play_computer_move(&mut self) -> Result<(R::Move, Phase), EngineError> {
        if self.phase() != Phase::ComputerTurn {
            return Err(EngineError::InvariantViolation(
                "computer move requested out of turn".into(),
            ));
        }
        let computer = self.human.opponent();
        let mv = self
            .strategy
            .choose(&self.rules, &self.current)
            .ok_or_else(|| {
                EngineError::InvariantViolation(
                    "strategy produced no move in a non-terminal state".into(),
                )
            })?;
        debug!("computer plays {mv:?}");
        let next = self.rules.apply(&self.current, &mv, computer)?;
        self.advance(next);
        Ok((mv, self.phase()))
    }

    /// Rewind past the most recent human move.
    ///
    /// Drops the computer's reply when one was already played (including
    /// consecutive computer moves after a pass) and the human move before
    /// it, restoring the most recent state in which the human was to act.
    /// Returns `false`, changing nothing, when no such checkpoint exists.
    pub fn undo(&mut self) -> bool {
        let checkpoint = self.history.iter().rposition(|s| {
            !self.rules.is_terminal(s) && self.rules.to_move(s) == self.human
        });
        let Some(idx) = checkpoint else {
            debug!("undo rejected: no human-turn checkpoint in history");
            return false;
        };
        self.history.truncate(idx + 1);
        if let Some(state) = self.history.pop() {
            self.current = state;
            debug!("undo restored state {idx}");
            return true;
        }
        false
    }

    fn advance(&mut self, next: R::State) {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
    }
}
