//! Whole-search properties and reference scenarios.

use std::collections::BTreeSet;

use crossing_config::{CrossingConfig, TieBreak, Traversal};
use crossing_core::{CrossingError, CrossingKind, Roster};
use crossing_solver::{run_solver, SolveOutcome};

fn solve(config: &CrossingConfig) -> SolveOutcome {
    run_solver(config).unwrap()
}

fn configs() -> Vec<CrossingConfig> {
    vec![
        CrossingConfig::new(vec![1, 2, 5, 10]),
        CrossingConfig::new(vec![1, 2, 5, 10]).with_num_limit(3),
        CrossingConfig::new(vec![1, 2, 5, 10]).with_time_limit(12),
        CrossingConfig::new(vec![2, 3, 3, 7, 9])
            .with_num_limit(3)
            .with_time_limit(20),
        CrossingConfig::new(vec![4, 1, 6]).with_traversal(Traversal::Recursive),
    ]
}

#[test]
fn crossings_alternate_forward_and_return() {
    for config in configs() {
        let limit = config.group_limit();
        let outcome = solve(&config);
        for solution in &outcome.solutions {
            for (step, crossing) in solution.path().iter().enumerate() {
                if step % 2 == 0 {
                    assert_eq!(crossing.kind(), CrossingKind::Forward);
                    assert!((2..=limit).contains(&crossing.len()));
                } else {
                    assert_eq!(crossing.kind(), CrossingKind::Return);
                    assert_eq!(crossing.len(), 1);
                }
            }
            assert_eq!(
                solution.path().last().map(|c| c.kind()),
                Some(CrossingKind::Forward)
            );
        }
    }
}

#[test]
fn total_time_is_sum_of_costs() {
    for config in configs() {
        let outcome = solve(&config);
        for solution in &outcome.solutions {
            let sum: u64 = solution.path().iter().map(|c| c.cost()).sum();
            assert_eq!(solution.total_time(), sum);
        }
    }
}

#[test]
fn horse_time_is_sum_of_its_crossings() {
    for config in configs() {
        let outcome = solve(&config);
        let roster = &outcome.roster;

        let mut ids: Vec<_> = roster.iter().map(|(id, _)| id).collect();
        ids.sort_by(|a, b| roster.label(*a).cmp(roster.label(*b)));

        for solution in &outcome.solutions {
            let expected: Vec<u64> = ids
                .iter()
                .map(|&id| {
                    solution
                        .path()
                        .iter()
                        .filter(|c| c.contains(id))
                        .map(|c| c.cost())
                        .sum()
                })
                .collect();
            assert_eq!(solution.horses_time(), expected.as_slice());
        }
    }
}

#[test]
fn every_solution_ends_with_all_horses_across_within_budget() {
    for config in configs() {
        let outcome = solve(&config);
        for solution in &outcome.solutions {
            let mut roster: Roster = outcome.roster.clone();
            roster.replay(solution.path()).unwrap();
            assert!(roster.all_on_far_bank());
            assert!(roster
                .iter()
                .all(|(_, h)| config.budget().admits(h.spent(), 0)));
        }
    }
}

#[test]
fn solutions_are_sorted_by_total_time() {
    for config in configs() {
        let outcome = solve(&config);
        assert!(outcome
            .report
            .solutions
            .windows(2)
            .all(|w| w[0].total_time <= w[1].total_time));
    }
}

#[test]
fn reruns_yield_the_same_solution_set() {
    for config in configs() {
        let first = solve(&config).report;
        let second = solve(&config.clone().with_traversal(Traversal::Recursive)).report;
        let third = solve(&config.clone().with_tie_break(TieBreak::Lexicographic)).report;

        let as_set = |report: &crossing_solver::CrossingReport| {
            report
                .solutions
                .iter()
                .map(|s| (s.total_time, s.horses_time.clone(), s.path.clone()))
                .collect::<BTreeSet<_>>()
        };
        assert_eq!(first, second);
        assert_eq!(as_set(&first), as_set(&third));
        assert_eq!(first.num_of_solutions, as_set(&first).len());
    }
}

#[test]
fn scenario_a_classic_bridge_minimum_is_17() {
    let outcome = solve(&CrossingConfig::new(vec![1, 2, 5, 10]));

    assert_eq!(outcome.report.num_of_solutions, 108);
    let best = &outcome.report.solutions[0];
    assert_eq!(best.total_time, 17);
    assert_eq!(
        best.path,
        vec![
            vec!["A", "B"],
            vec!["A"],
            vec!["C", "D"],
            vec!["B"],
            vec!["A", "B"],
        ]
    );
    assert_eq!(best.horses_time, vec![5, 6, 10, 10]);
}

#[test]
fn scenario_b_budget_below_every_schedule_gives_no_solution() {
    // A pair must cross together, so each horse spends at least 4.
    let outcome = solve(&CrossingConfig::new(vec![3, 4]).with_time_limit(3));
    assert_eq!(outcome.report.num_of_solutions, 0);
    assert!(outcome.report.solutions.is_empty());

    // The slowest horse alone needs 10.
    let outcome = solve(&CrossingConfig::new(vec![1, 2, 5, 10]).with_time_limit(9));
    assert_eq!(outcome.report.num_of_solutions, 0);
    assert_eq!(outcome.statistics.crossings_pruned, 25);
}

#[test]
fn scenario_c_group_limit_of_one_is_rejected() {
    let config = CrossingConfig::new(vec![1, 2, 5, 10]).with_num_limit(1);
    let err = run_solver(&config).unwrap_err();
    assert!(matches!(err, CrossingError::Config(_)));
}

#[test]
fn scenario_d_single_horse_has_no_solution() {
    let outcome = solve(&CrossingConfig::new(vec![5]));
    assert_eq!(outcome.report.num_of_solutions, 0);
}

#[test]
fn tie_break_orders_equal_times() {
    let config = CrossingConfig::new(vec![1, 2, 5, 10]).with_num_limit(3);

    let discovery = solve(&config).report;
    assert_eq!(discovery.solutions[4].total_time, 16);
    assert_eq!(
        discovery.solutions[4].path,
        vec![vec!["A", "C"], vec!["A"], vec!["A", "B", "D"]]
    );

    let lexicographic = solve(&config.with_tie_break(TieBreak::Lexicographic)).report;
    assert_eq!(lexicographic.solutions[4].total_time, 16);
    assert_eq!(
        lexicographic.solutions[4].path,
        vec![vec!["A", "B", "C"], vec!["A"], vec!["A", "D"]]
    );
}

#[test]
fn report_serializes_to_expected_json() {
    let outcome = solve(&CrossingConfig::new(vec![3, 4]));
    let json = serde_json::to_value(&outcome.report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "num_of_solutions": 1,
            "solutions": [
                { "total_time": 4, "horses_time": [4, 4], "path": [["A", "B"]] }
            ]
        })
    );
}
