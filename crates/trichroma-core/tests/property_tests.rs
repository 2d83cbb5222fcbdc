//! # Property-Based Tests
//!
//! Determinism, agreement and round-trip invariants checked with proptest.
//!
//! The complete searches (`ExhaustiveSolver`, `PropagatingSolver`) are held
//! against each other here; the walk-based `BacktrackingSolver` keeps its
//! documented incompleteness and is exercised by its behavioral unit tests
//! instead.

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;
use trichroma_core::formats::{parse_graph, render_graph};
use trichroma_core::{certificate, ExhaustiveSolver, Graph, PropagatingSolver, Solver};

// =============================================================================
// GENERATORS
// =============================================================================

/// Build a graph from index pairs over a small label pool, skipping
/// self-loops (the reduction never generates any and a self-loop makes every
/// coloring invalid).
fn graph_from_pairs(pairs: &[(usize, usize)], pool: usize) -> Graph {
    let mut graph = Graph::new();
    for &(a, b) in pairs {
        let (a, b) = (a % pool, b % pool);
        if a == b {
            continue;
        }
        let u = graph.intern(&format!("v{}", a));
        let v = graph.intern(&format!("v{}", b));
        graph.add_edge(u, v);
    }
    graph
}

fn label_edges(graph: &Graph) -> BTreeSet<(String, String)> {
    graph
        .edges()
        .filter_map(|(u, v)| {
            let mut pair = [graph.label_of(u)?, graph.label_of(v)?];
            pair.sort_unstable();
            Some((pair[0].to_string(), pair[1].to_string()))
        })
        .collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Applying add_edge twice produces the same neighbor sets as once.
    #[test]
    fn add_edge_is_idempotent(pairs in vec((0usize..8, 0usize..8), 1..20)) {
        let once = graph_from_pairs(&pairs, 8);

        let mut doubled = pairs.clone();
        doubled.extend(pairs.iter().copied());
        let twice = graph_from_pairs(&doubled, 8);

        prop_assert_eq!(once.vertex_count(), twice.vertex_count());
        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(label_edges(&once), label_edges(&twice));
    }

    /// Same construction sequence, same graph.
    #[test]
    fn construction_is_deterministic(pairs in vec((0usize..8, 0usize..8), 0..20)) {
        let first = graph_from_pairs(&pairs, 8);
        let second = graph_from_pairs(&pairs, 8);

        prop_assert_eq!(
            first.vertices().collect::<Vec<_>>(),
            second.vertices().collect::<Vec<_>>()
        );
        prop_assert_eq!(label_edges(&first), label_edges(&second));
    }

    /// Export then import preserves the vertex set and the edge set
    /// (for graphs without isolated vertices; the format carries edges only).
    #[test]
    fn text_round_trip(pairs in vec((0usize..8, 0usize..8), 1..20)) {
        let original = graph_from_pairs(&pairs, 8);
        let restored = parse_graph(&render_graph(&original)).expect("parse");

        let original_labels: BTreeSet<String> = original
            .vertices()
            .filter_map(|v| original.label_of(v).map(str::to_string))
            .collect();
        let restored_labels: BTreeSet<String> = restored
            .vertices()
            .filter_map(|v| restored.label_of(v).map(str::to_string))
            .collect();

        prop_assert_eq!(original_labels, restored_labels);
        prop_assert_eq!(label_edges(&original), label_edges(&restored));
    }

    /// The exhaustive baseline and the complete backtracking variant agree on
    /// colorability for every small graph, and every witness they produce
    /// passes the certificate checker fully colored.
    #[test]
    fn complete_solvers_agree(pairs in vec((0usize..8, 0usize..8), 0..16)) {
        let graph = graph_from_pairs(&pairs, 8);

        let exhaustive = ExhaustiveSolver.solve(&graph);
        let propagating = PropagatingSolver.solve(&graph);

        prop_assert_eq!(exhaustive.is_colored(), propagating.is_colored());

        for outcome in [&exhaustive, &propagating] {
            if let Some(coloring) = outcome.coloring() {
                prop_assert!(certificate::is_valid(&graph, coloring));
                prop_assert!(certificate::all_colored(&graph, coloring));
            }
        }
    }

    /// Solving never mutates the graph.
    #[test]
    fn solving_leaves_the_graph_intact(pairs in vec((0usize..6, 0usize..6), 0..12)) {
        let graph = graph_from_pairs(&pairs, 6);
        let vertices_before: Vec<_> = graph.vertices().collect();
        let edges_before = label_edges(&graph);

        let _ = PropagatingSolver.solve(&graph);
        let _ = ExhaustiveSolver.solve(&graph);

        prop_assert_eq!(graph.vertices().collect::<Vec<_>>(), vertices_before);
        prop_assert_eq!(label_edges(&graph), edges_before);
    }
}
