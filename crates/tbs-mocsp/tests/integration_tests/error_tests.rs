//! Malformed networks, queries and configurations through the public API.

use std::collections::BTreeMap;

use tbs_mocsp::{solve, EdgeCost, MocspError, Network, Query, RawGraph, SearchConfig, TbsSearch};

use crate::common::fixtures::two_objective_network;

fn raw(edges: &[(usize, usize, Vec<f64>, Vec<f64>)], node_count: usize) -> RawGraph {
    let mut graph: RawGraph = (0..node_count).map(|n| (n, BTreeMap::new())).collect();
    for (from, to, objective, constraint) in edges {
        graph
            .entry(*from)
            .or_default()
            .insert(*to, EdgeCost::new(objective.clone(), constraint.clone()));
    }
    graph
}

#[test]
fn test_solve_rejects_gap_in_node_keys() {
    let mut graph = raw(&[(0, 1, vec![1.0], vec![1.0])], 2);
    graph.insert(3, BTreeMap::new());

    let result = solve(&graph, 0, 1, &[5.0]);
    assert!(matches!(result, Err(MocspError::MissingNode(2))), "{:?}", result);
}

#[test]
fn test_solve_rejects_dangling_edge() {
    let graph = raw(&[(0, 7, vec![1.0], vec![1.0])], 2);
    let result = solve(&graph, 0, 1, &[5.0]);
    assert!(
        matches!(result, Err(MocspError::NodeNotFound { from: 0, to: 7 })),
        "{:?}",
        result
    );
}

#[test]
fn test_solve_rejects_ragged_cost_vectors() {
    let graph = raw(
        &[
            (0, 1, vec![1.0, 2.0], vec![1.0]),
            (1, 2, vec![1.0], vec![1.0]),
        ],
        3,
    );
    let result = solve(&graph, 0, 2, &[5.0]);
    assert!(
        matches!(
            result,
            Err(MocspError::DimensionMismatch {
                vector: "objective",
                expected: 2,
                actual: 1,
                ..
            })
        ),
        "{:?}",
        result
    );
}

#[test]
fn test_solve_rejects_negative_and_non_finite_costs() {
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let graph = raw(&[(0, 1, vec![1.0], vec![bad])], 2);
        let result = solve(&graph, 0, 1, &[5.0]);
        assert!(matches!(result, Err(MocspError::InvalidCost { .. })), "{:?}", result);
    }
}

#[test]
fn test_query_node_out_of_range() {
    let network = two_objective_network();
    for query in [Query::new(9, 4, vec![10.0]), Query::new(0, 5, vec![10.0])] {
        let result = TbsSearch::new(&network).run(&query);
        assert!(
            matches!(result, Err(MocspError::NodeOutOfRange { node_count: 5, .. })),
            "{:?}",
            result
        );
    }
}

#[test]
fn test_query_source_without_edges() {
    let network = Network::builder(3)
        .edge(1, 2, vec![1.0], vec![1.0])
        .build()
        .expect("build failed");
    let result = TbsSearch::new(&network).run(&Query::new(0, 2, vec![5.0]));
    assert!(matches!(result, Err(MocspError::SourceHasNoEdges(0))), "{:?}", result);
}

#[test]
fn test_query_budget_length_mismatch() {
    let network = two_objective_network();
    let result = TbsSearch::new(&network).run(&Query::new(0, 4, vec![10.0, 10.0]));
    assert!(
        matches!(
            result,
            Err(MocspError::BudgetDimensionMismatch {
                expected: 1,
                actual: 2
            })
        ),
        "{:?}",
        result
    );
}

#[test]
fn test_query_nan_budget() {
    let network = two_objective_network();
    let result = TbsSearch::new(&network).run(&Query::new(0, 4, vec![f64::NAN]));
    assert!(matches!(result, Err(MocspError::InvalidBudget(_))), "{:?}", result);
}

#[test]
fn test_negative_budget_is_empty_not_error() {
    let network = two_objective_network();
    let outcome = TbsSearch::new(&network)
        .run(&Query::new(0, 4, vec![-1.0]))
        .expect("negative budget is a valid, unsatisfiable query");
    assert!(outcome.is_empty());
}

#[test]
fn test_all_zero_objective_dimension_is_degenerate() {
    let network = Network::builder(2)
        .edge(0, 1, vec![0.0, 0.0], vec![1.0])
        .build()
        .expect("build failed");
    let result = TbsSearch::new(&network).run(&Query::new(0, 1, vec![5.0]));
    assert!(matches!(result, Err(MocspError::DegenerateSpreadingRate)), "{:?}", result);
}

#[test]
fn test_forced_surrogate_out_of_range() {
    let network = two_objective_network();
    let result = TbsSearch::new(&network)
        .with_config(SearchConfig::default().surrogate_dimension(2))
        .run(&Query::new(0, 4, vec![10.0]));
    assert!(matches!(result, Err(MocspError::InvalidConfig(_))), "{:?}", result);
}

#[test]
fn test_config_file_errors() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let missing = SearchConfig::from_file(&dir.path().join("absent.toml"));
    assert!(missing.is_err());

    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "retire_exhausted_ripples = \"yes\"\n").expect("write failed");
    let result = SearchConfig::from_file(&path);
    assert!(matches!(result, Err(MocspError::ConfigParse(_))), "{:?}", result);
}

#[test]
fn test_error_messages_name_the_input() {
    let graph = raw(&[(0, 1, vec![1.0], vec![-2.0])], 2);
    let err = solve(&graph, 0, 1, &[5.0]).expect_err("negative cost must fail");
    let msg = err.to_string();
    assert!(msg.contains("0 -> 1"), "{}", msg);
    assert!(msg.contains("-2"), "{}", msg);
}
