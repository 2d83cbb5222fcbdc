//! # Certificate Checker
//!
//! Validates a candidate coloring against a graph in time polynomial in the
//! instance size. Works on partial colorings: uncolored vertices impose no
//! constraint, which is what lets the backtracking search prune incrementally.

use crate::{Coloring, Graph};

/// Check that no edge joins two same-colored vertices.
///
/// Returns `false` on the first violation found. Uncolored endpoints are
/// skipped, so a partial coloring that has not yet gone wrong is valid.
#[must_use]
pub fn is_valid(graph: &Graph, coloring: &Coloring) -> bool {
    for vertex in graph.vertices() {
        let Some(color) = coloring.color_of(vertex) else {
            continue;
        };
        for neighbor in graph.neighbors(vertex) {
            if coloring.color_of(neighbor) == Some(color) {
                return false;
            }
        }
    }
    true
}

/// Check that every vertex of the graph has an assigned color.
#[must_use]
pub fn all_colored(graph: &Graph, coloring: &Coloring) -> bool {
    graph.vertices().all(|v| coloring.color_of(v).is_some())
}

// =============================================================================
// TESTS
// =============================================================================
