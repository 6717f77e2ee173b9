//! Reversi-variant integration tests: capture exactness and whole games.

use parlor::core::{GameRng, Side};
use parlor::games::reversi::{Reversi, ReversiMove, ReversiState, SIZE};
use parlor::rules::{Outcome, Rules};
use parlor::search::{Minimax, SearchConfig, Strategy};
use parlor::session::Session;

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

/// Independent reference for the capture rule: the union over all eight
/// directions of maximal opponent runs closed by a mover's piece.
fn reference_flips(state: &ReversiState, mv: ReversiMove, side: Side) -> Vec<(usize, usize)> {
    let mut flips = Vec::new();
    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let (mut r, mut c) = (mv.row as i8 + dr, mv.col as i8 + dc);
        loop {
            if !(0..SIZE as i8).contains(&r) || !(0..SIZE as i8).contains(&c) {
                break;
            }
            match state.cell(r as usize, c as usize) {
                Some(s) if s == side.opponent() => run.push((r as usize, c as usize)),
                Some(_) => {
                    flips.extend(run);
                    break;
                }
                None => break,
            }
            r += dr;
            c += dc;
        }
    }
    flips.sort_unstable();
    flips
}

fn cells_owned(state: &ReversiState, side: Side) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for r in 0..SIZE {
        for c in 0..SIZE {
            if state.cell(r, c) == Some(side) {
                cells.push((r, c));
            }
        }
    }
    cells
}

// =============================================================================
// Opening position
// =============================================================================

#[test]
fn test_initial_legal_set_matches_hand_computation() {
    let game = Reversi;
    let state = game.initial_state();

    assert_eq!(
        game.legal_moves(&state, Side::First),
        vec![
            ReversiMove::new(4, 1),
            ReversiMove::new(4, 2),
            ReversiMove::new(4, 3),
            ReversiMove::new(4, 4),
        ]
    );
}

#[test]
fn test_off_board_submission_is_rejected_without_state_change() {
    // The UI collaborator can construct any coordinates; the engine must
    // answer with an error, never crash.
    let strategy = Minimax::new(SearchConfig::default().with_max_depth(2));
    let mut session = Session::new(Reversi, strategy, Side::First);
    let before = session.state().clone();

    assert!(session.submit_human_move(&ReversiMove::new(SIZE, 0)).is_err());
    assert!(session.submit_human_move(&ReversiMove::new(0, 99)).is_err());
    assert_eq!(*session.state(), before);
    assert_eq!(session.moves_played(), 0);
}

// =============================================================================
// Capture exactness across random play
// =============================================================================

#[test]
fn test_every_apply_flips_exactly_the_reference_set() {
    // Walk random games and verify, for every legal move of every state
    // visited, that apply flips exactly the reference union: no partial
    // runs, nothing without a closing piece.
    let game = Reversi;
    let mut rng = GameRng::new(2024);

    for _ in 0..20 {
        let mut state = game.initial_state();
        while !game.is_terminal(&state) {
            let side = game.to_move(&state);
            let moves = game.legal_moves(&state, side);

            for &mv in &moves {
                let expected_flips = reference_flips(&state, mv, side);
                assert!(!expected_flips.is_empty(), "legal move must capture");

                let next = game.apply(&state, &mv, side).unwrap();
                let mut gained: Vec<(usize, usize)> = cells_owned(&next, side)
                    .into_iter()
                    .filter(|&cell| {
                        state.cell(cell.0, cell.1) != Some(side)
                            && cell != (mv.row, mv.col)
                    })
                    .collect();
                gained.sort_unstable();
                assert_eq!(gained, expected_flips, "flip set mismatch at {mv:?}");
            }

            let pick = rng.gen_range_usize(0..moves.len());
            state = game.apply(&state, &moves[pick], side).unwrap();
        }
    }
}

// =============================================================================
// Whole games with search
// =============================================================================

#[test]
fn test_minimax_vs_minimax_reaches_a_verdict() {
    let game = Reversi;
    let mut engine_a = Minimax::new(SearchConfig::default().with_max_depth(2));
    let mut engine_b = Minimax::new(SearchConfig::default().with_max_depth(2));

    let mut state = game.initial_state();
    let mut plies = 0;
    while !game.is_terminal(&state) {
        let side = game.to_move(&state);
        let engine = if side == Side::First {
            &mut engine_a
        } else {
            &mut engine_b
        };
        let mv = engine.choose(&game, &state).unwrap();
        state = game.apply(&state, &mv, side).unwrap();

        plies += 1;
        assert!(plies <= 40, "more plies than the board has room for");
    }

    assert_ne!(game.winner(&state), Outcome::Ongoing);
    let first = state.count(Side::First);
    let second = state.count(Side::Second);
    match game.winner(&state) {
        Outcome::Won(Side::First) => assert!(first > second),
        Outcome::Won(Side::Second) => assert!(second > first),
        Outcome::Draw => assert_eq!(first, second),
        Outcome::Ongoing => unreachable!(),
    }
}

#[test]
fn test_reference_depth_search_from_the_opening() {
    let game = Reversi;
    let mut engine = Minimax::new(SearchConfig::default().with_max_depth(4));
    let state = game.initial_state();

    let mv = engine.choose(&game, &state).unwrap();
    assert!(game.legal_moves(&state, Side::First).contains(&mv));
    assert!(engine.stats().nodes > 0);
    assert!(engine.stats().max_ply <= 4);
}
