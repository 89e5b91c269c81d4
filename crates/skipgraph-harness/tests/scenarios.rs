//! Scenario-level tests against the golden behaviors the routing core
//! promises: singleton and small hand-built graphs, bootstrap-constructed
//! graphs of increasing size, and both search outcomes (a found hop and a
//! self-terminating fallback).

use skipgraph::{check_invariants, count_components, Cx, Direction, SearchRequest, MAX_LEVEL};
use skipgraph_harness::{
    five_hundred_node_bootstrap, five_node_bootstrap, right_search_overshoot_fallback,
    search_exact_match_multi_level, search_fallback_no_progress, singleton, two_node_zero_prefix,
};

#[test]
fn s1_singleton_has_no_neighbors_and_one_component() {
    let node = singleton();
    let cx = Cx::new();
    assert_eq!(node.get_neighbor(&cx, Direction::Left, 0).unwrap(), None);
    assert_eq!(node.get_neighbor(&cx, Direction::Right, 0).unwrap(), None);
    assert_eq!(count_components(std::slice::from_ref(&node), 0).unwrap(), 1);
}

#[test]
fn s2_zero_prefix_pair_links_only_at_level_zero() {
    let (left, right) = two_node_zero_prefix();
    let cx = Cx::new();

    assert_eq!(
        left.get_neighbor(&cx, Direction::Right, 0).unwrap().map(|i| i.identifier()),
        Some(right.identifier())
    );
    assert_eq!(
        right.get_neighbor(&cx, Direction::Left, 0).unwrap().map(|i| i.identifier()),
        Some(left.identifier())
    );
    assert_eq!(left.get_neighbor(&cx, Direction::Right, 1).unwrap(), None);

    let report = check_invariants(&[left, right]).unwrap();
    assert!(report.is_valid(), "violations: {:?}", report.violations);
}

#[test]
fn s3_five_node_bootstrap_is_internally_consistent() {
    let nodes = five_node_bootstrap(42);
    assert_eq!(nodes.len(), 5);

    let report = check_invariants(&nodes).unwrap();
    assert!(report.is_valid(), "violations: {:?}", report.violations);
    assert_eq!(count_components(&nodes, 0).unwrap(), 1);
}

#[test]
fn s4_search_reports_the_higher_of_two_matching_levels() {
    let (origin, neighbor) = search_exact_match_multi_level();
    let cx = Cx::new();
    let response = origin
        .search_by_id(
            &cx,
            SearchRequest {
                target: neighbor,
                max_level: 3,
                direction: Direction::Right,
            },
        )
        .unwrap();
    assert_eq!(response.termination_level, 2);
    assert_eq!(response.result, neighbor);
}

#[test]
fn s5_search_falls_back_to_self_when_every_left_neighbor_undershoots() {
    let (origin, target) = search_fallback_no_progress();
    let cx = Cx::new();
    let response = origin
        .search_by_id(
            &cx,
            SearchRequest {
                target,
                max_level: MAX_LEVEL - 1,
                direction: Direction::Left,
            },
        )
        .unwrap();
    assert_eq!(response.termination_level, 0);
    assert_eq!(response.result, origin.identifier());
}

#[test]
fn right_overshoot_fallback_terminates_at_self() {
    let (origin, target) = right_search_overshoot_fallback();
    let cx = Cx::new();
    let response = origin
        .search_by_id(
            &cx,
            SearchRequest {
                target,
                max_level: 0,
                direction: Direction::Right,
            },
        )
        .unwrap();
    assert_eq!(response.termination_level, 0);
    assert_eq!(response.result, origin.identifier());
}

#[test]
fn s6_five_hundred_node_graph_stays_a_single_component() {
    let nodes = five_hundred_node_bootstrap(7);
    assert_eq!(nodes.len(), 500);
    assert_eq!(count_components(&nodes, 0).unwrap(), 1);

    let report = check_invariants(&nodes).unwrap();
    assert!(report.is_valid(), "violations: {:?}", report.violations);
}

#[test]
fn search_rejects_a_max_level_at_or_above_the_ceiling() {
    let node = singleton();
    let cx = Cx::new();
    let err = node
        .search_by_id(
            &cx,
            SearchRequest {
                target: node.identifier(),
                max_level: MAX_LEVEL,
                direction: Direction::Right,
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        skipgraph::SkipGraphError::InvalidLevel { level, max } if level == MAX_LEVEL && max == MAX_LEVEL
    ));
}
