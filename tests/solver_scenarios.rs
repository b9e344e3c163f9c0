//! End-to-end solver runs on fixed puzzles with known optimal move counts.

use slider_puzzle::{Board, Move, Solver, SolverConfig};

fn board3(rows: [[u32; 3]; 3]) -> Board {
    Board::new(&rows).unwrap()
}

/// Consecutive boards differ by one slide, the path starts at `initial`,
/// ends at the goal, and has `moves + 1` entries.
fn assert_valid_path(solver: &Solver, initial: &Board) {
    let boards = solver.solution().expect("solvable board has a solution");
    let directions = solver.directions().unwrap();

    assert_eq!(&boards[0], initial);
    assert!(boards.last().unwrap().is_goal());
    assert_eq!(boards.len() as isize - 1, solver.moves());
    assert_eq!(directions.len(), boards.len() - 1);

    for (pair, &dir) in boards.windows(2).zip(directions) {
        assert!(pair[0].neighbors().contains(&pair[1]));
        assert_eq!(pair[0].apply(dir).as_ref(), Some(&pair[1]));
    }
}

#[test]
fn goal_board_needs_no_moves() {
    let goal = board3([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    assert!(goal.is_goal());

    let solver = Solver::new(goal.clone());
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 0);
    assert_eq!(solver.solution().unwrap(), &[goal]);
    assert_eq!(solver.directions().unwrap(), &[] as &[Move]);
}

#[test]
fn swapped_pair_is_unsolvable() {
    let initial = board3([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
    let solver = Solver::new(initial.clone());
    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), -1);
    assert!(solver.solution().is_none());
    assert!(solver.directions().is_none());
    assert_eq!(solver.initial(), &initial);
}

#[test]
fn classic_board_solves_in_fourteen() {
    let initial = board3([[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
    let solver = Solver::new(initial.clone());
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 14);
    assert_valid_path(&solver, &initial);
}

#[test]
fn deep_board_solves_in_twenty_six() {
    let initial = board3([[0, 1, 2], [3, 5, 4], [6, 8, 7]]);
    let config = SolverConfig {
        closed_set: true,
        ..SolverConfig::default()
    };
    let solver = Solver::with_config(initial.clone(), config).unwrap();
    assert_eq!(solver.moves(), 26);
    assert_valid_path(&solver, &initial);
}

#[test]
fn four_by_four_board() {
    let initial = Board::new(&[
        [1u32, 2, 0, 4],
        [5, 6, 3, 8],
        [9, 10, 7, 15],
        [13, 14, 12, 11],
    ])
    .unwrap();
    let solver = Solver::new(initial.clone());
    assert_eq!(solver.moves(), 8);
    assert_valid_path(&solver, &initial);
}

#[test]
fn two_by_two_boards() {
    let one_move = Board::new(&[[1u32, 2], [0, 3]]).unwrap();
    let solver = Solver::new(one_move.clone());
    assert_eq!(solver.moves(), 1);
    assert_eq!(solver.directions().unwrap(), &[Move::Right]);
    assert_valid_path(&solver, &one_move);

    let unsolvable = Board::new(&[[2u32, 1], [3, 0]]).unwrap();
    assert_eq!(Solver::new(unsolvable).moves(), -1);
}

#[test]
fn unsolvable_board_with_closed_set() {
    let initial = board3([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
    let config = SolverConfig {
        closed_set: true,
        ..SolverConfig::default()
    };
    let solver = Solver::with_config(initial, config).unwrap();
    assert!(!solver.is_solvable());
}

#[test]
fn text_input_round_trip_through_solver() {
    let initial: Board = "3\n 0  1  3\n 4  2  5\n 7  8  6\n".parse().unwrap();
    let solver = Solver::new(initial.clone());
    assert_eq!(solver.moves(), 4);
    assert_eq!(
        solver.solution().unwrap().last().unwrap().to_string(),
        "3\n 1  2  3\n 4  5  6\n 7  8  0\n"
    );
}
