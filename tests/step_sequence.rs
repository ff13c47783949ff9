use rstest::rstest;

use n_queens_visualizer::{Board, Cell, Error, Safety, Solver, Step, StepKind};

fn run(n: usize, lock: Option<usize>) -> Vec<Step> {
    Solver::new(n, lock)
        .expect("valid configuration")
        .collect()
}

fn solutions(steps: &[Step]) -> Vec<&Step> {
    steps
        .iter()
        .filter(|s| s.kind() == StepKind::FoundSolution)
        .collect()
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(5)]
#[case(6)]
#[case(7)]
#[case(8)]
fn finds_exactly_one_valid_solution(#[case] n: usize) {
    let steps = run(n, None);
    let found = solutions(&steps);
    assert_eq!(found.len(), 1);
    assert!(found[0].board().is_solution(), "{}", found[0].board());
    assert_eq!(steps.last().map(Step::kind), Some(StepKind::FoundSolution));
}

#[rstest]
#[case(2)]
#[case(3)]
fn unsolvable_sizes_exhaust(#[case] n: usize) {
    let steps = run(n, None);
    assert!(!steps.is_empty());
    assert!(solutions(&steps).is_empty());
    assert_eq!(steps.last().map(Step::kind), Some(StepKind::Backtracking));
}

#[test]
fn four_queens_backtracks_to_the_first_solution() {
    let steps = run(4, None);
    let found = solutions(&steps);
    assert_eq!(found[0].board(), &Board::from_columns(&[1, 3, 0, 2]));
    assert!(steps.iter().any(|s| s.kind() == StepKind::Backtracking));
}

#[test]
fn eight_queens_first_solution() {
    let steps = run(8, None);
    assert_eq!(
        solutions(&steps)[0].board(),
        &Board::from_columns(&[0, 4, 7, 5, 2, 6, 1, 3])
    );
}

#[test]
fn single_square() {
    let steps = run(1, None);
    let kinds: Vec<_> = steps.iter().map(Step::kind).collect();
    assert_eq!(
        kinds,
        vec![StepKind::Placing, StepKind::Safe, StepKind::FoundSolution]
    );
    assert_eq!(steps[2].board(), &Board::from_columns(&[0]));
}

#[rstest]
#[case(4, 1, Some(&[1, 3, 0, 2][..]))]
#[case(4, 2, Some(&[2, 0, 3, 1][..]))]
#[case(4, 0, None)]
#[case(6, 0, None)]
#[case(6, 1, Some(&[1, 3, 5, 0, 2, 4][..]))]
#[case(6, 5, None)]
fn first_row_lock(#[case] n: usize, #[case] lock: usize, #[case] expected: Option<&[usize]>) {
    let steps = run(n, Some(lock));
    for step in &steps {
        let row0 = step.board().get(0);
        assert!(row0.is_none() || row0 == Some(lock), "row 0 was {row0:?}");
    }
    let found = solutions(&steps);
    match expected {
        Some(cols) => {
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].board(), &Board::from_columns(cols));
        }
        None => assert!(found.is_empty()),
    }
}

#[rstest]
#[case(4)]
#[case(6)]
#[case(8)]
fn checks_agree_with_the_preceding_snapshot(#[case] n: usize) {
    let steps = run(n, None);
    for pair in steps.windows(2) {
        let (prev, step) = (&pair[0], &pair[1]);
        match step.kind() {
            StepKind::Safe | StepKind::Conflict => {
                assert_eq!(prev.kind(), StepKind::Placing);
                let cell = step.cell().unwrap();
                assert_eq!(prev.cell(), Some(cell));
                let expected = match step.conflicting() {
                    Some(with) => Safety::Conflict(with),
                    None => Safety::Safe,
                };
                assert_eq!(prev.board().is_safe(cell.row, cell.col), expected);
            }
            _ => {}
        }
    }
}

#[rstest]
#[case(4)]
#[case(5)]
fn every_placement_resolves(#[case] n: usize) {
    let steps = run(n, None);
    for (i, step) in steps.iter().enumerate() {
        let cell = step.cell();
        match step.kind() {
            StepKind::Placing => {
                let next = &steps[i + 1];
                assert!(matches!(next.kind(), StepKind::Safe | StepKind::Conflict));
                assert_eq!(next.cell(), cell);
            }
            StepKind::Conflict => {
                let next = &steps[i + 1];
                assert_eq!(next.kind(), StepKind::Backtracking);
                assert_eq!(next.cell(), cell);
            }
            _ => {}
        }
    }
}

#[rstest]
#[case(4)]
#[case(6)]
fn rows_below_the_search_depth_stay_unplaced(#[case] n: usize) {
    for step in run(n, None) {
        let Some(Cell { row, col }) = step.cell() else {
            continue;
        };
        assert_eq!(step.board().get(row), Some(col));
        assert!(step.board().rows()[row + 1..].iter().all(Option::is_none));
        assert!(step.board().rows()[..row].iter().all(Option::is_some));
    }
}

#[test]
fn backtracking_closes_every_failed_branch() {
    // Each placement either leads to the solution or is backtracked.
    let steps = run(6, None);
    let count = |kind| steps.iter().filter(|s| s.kind() == kind).count();
    assert_eq!(
        count(StepKind::Placing),
        count(StepKind::Backtracking) + 6
    );
}

#[rstest]
#[case(5, None)]
#[case(6, Some(3))]
fn identical_configurations_are_deterministic(#[case] n: usize, #[case] lock: Option<usize>) {
    assert_eq!(run(n, lock), run(n, lock));
}

#[test]
fn invalid_configurations_fail_at_construction() {
    assert_eq!(Solver::new(0, None).unwrap_err(), Error::EmptyBoard);
    assert_eq!(
        Solver::new(5, Some(7)).unwrap_err(),
        Error::LockOutOfRange { lock: 7, n: 5 }
    );
}
