//! Minimax with alpha-beta pruning over the [`Rules`] interface.
//!
//! The maximizing side is the side the search computes a move for; at each
//! node the perspective is decided by comparing that node's mover against
//! the root side, which also makes consecutive turns for one side (a pass
//! in the board game) fall out naturally. Moves are explored in the order
//! the rules enumerate them, and only a strictly better score replaces the
//! incumbent, so the first move reaching the best score wins ties and the
//! tie-break is reproducible.

use log::{debug, error};

use crate::core::Side;
use crate::rules::{Outcome, Rules};

use super::config::SearchConfig;
use super::Strategy;

/// Score of a win at the root; real scores live strictly inside
/// `(-SCORE_WIN, SCORE_WIN)`. Wins are discounted by ply so the search
/// prefers the quickest of several winning lines.
pub const SCORE_WIN: i32 = 1_000_000;

/// Counters from the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included.
    pub nodes: u64,
    /// Deepest ply reached.
    pub max_ply: u32,
}

/// Depth-limited alpha-beta engine, usable with any [`Rules`] variant.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent `choose` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn depth_budget(&self) -> u32 {
        if self.config.max_depth == 0 {
            u32::MAX
        } else {
            self.config.max_depth
        }
    }

    fn value<R: Rules>(
        &mut self,
        rules: &R,
        state: &R::State,
        root: Side,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        ply: u32,
    ) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if rules.is_terminal(state) {
            return match rules.winner(state) {
                Outcome::Won(w) if w == root => SCORE_WIN - ply as i32,
                Outcome::Won(_) => -SCORE_WIN + ply as i32,
                Outcome::Draw | Outcome::Ongoing => 0,
            };
        }
        if depth == 0 {
            return rules.evaluate(state, root);
        }

        let mover = rules.to_move(state);
        let moves = rules.legal_moves(state, mover);
        if moves.is_empty() {
            // Variants encode turn passing inside apply, so a moverless
            // non-terminal node indicates a rules bug; score it statically
            // rather than recursing forever.
            error!("non-terminal state with no legal moves for {mover}");
            return rules.evaluate(state, root);
        }

        if mover == root {
            let mut best = i32::MIN;
            for mv in &moves {
                let child = match rules.apply(state, mv, mover) {
                    Ok(child) => child,
                    Err(err) => {
                        error!("enumerated move failed to apply: {err}");
                        continue;
                    }
                };
                best = best.max(self.value(rules, &child, root, depth - 1, alpha, beta, ply + 1));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut worst = i32::MAX;
            for mv in &moves {
                let child = match rules.apply(state, mv, mover) {
                    Ok(child) => child,
                    Err(err) => {
                        error!("enumerated move failed to apply: {err}");
                        continue;
                    }
                };
                worst = worst.min(self.value(rules, &child, root, depth - 1, alpha, beta, ply + 1));
                beta = beta.min(worst);
                if beta <= alpha {
                    break;
                }
            }
            worst
        }
    }
}

impl<R: Rules> Strategy<R> for Minimax {
    /// Choose a move for the side to move, or `None` on a terminal state.
    fn choose(&mut self, rules: &R, state: &R::State) -> Option<R::Move> {
        self.stats = SearchStats::default();
        if rules.is_terminal(state) {
            return None;
        }

        let root = rules.to_move(state);
        let depth = self.depth_budget();
        let mut alpha = i32::MIN;
        let mut best: Option<(R::Move, i32)> = None;

        for mv in rules.legal_moves(state, root) {
            let child = match rules.apply(state, &mv, root) {
                Ok(child) => child,
                Err(err) => {
                    error!("enumerated move failed to apply: {err}");
                    continue;
                }
            };
            let value = self.value(rules, &child, root, depth - 1, alpha, i32::MAX, 1);
            if best.as_ref().map_or(true, |(_, b)| value > *b) {
                best = Some((mv, value));
                alpha = alpha.max(value);
            }
        }

        debug!(
            "search for {root}: value {:?}, {} nodes, max ply {}",
            best.as_ref().map(|(_, v)| *v),
            self.stats.nodes,
            self.stats.max_ply
        );
        best.map(|(mv, _)| mv)
    }
}
