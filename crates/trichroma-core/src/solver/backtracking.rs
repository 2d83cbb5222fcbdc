//! # Backtracking Solvers
//!
//! [`BacktrackingSolver`] is the walk-based depth-first search: commit a trial
//! color, validate the whole partial coloring, recurse into the neighbors,
//! retract on failure. A visited-on-this-path guard bounds the recursion by
//! the vertex count.
//!
//! The guard has a known consequence: colored vertices always form a single
//! walk from the start vertex, so the search only ever succeeds on graphs that
//! admit a spanning walk from there. Stars, disconnected graphs and most
//! larger graphs are reported exhausted even when a 3-coloring exists. The
//! behavior is kept as-is; [`PropagatingSolver`] is the complete alternative,
//! which orders all vertices up front and checks a candidate color against the
//! already-colored neighbors directly before committing.

use crate::solver::{SolveOutcome, Solver};
use crate::{certificate, Color, Coloring, Graph, VertexId};
use std::collections::BTreeSet;

// =============================================================================
// WALK-BASED SEARCH
// =============================================================================

/// Depth-first search that extends a walk from the first vertex, one trial
/// color per step. Sound but incomplete (see module docs).
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl Solver for BacktrackingSolver {
    fn name(&self) -> &'static str {
        "back-tracking"
    }

    fn solve(&self, graph: &Graph) -> SolveOutcome {
        let Some(start) = graph.vertices().next() else {
            return SolveOutcome::Colored(Coloring::new());
        };

        let mut visited = BTreeSet::new();
        let mut coloring = Coloring::new();
        if Self::walk(graph, start, &mut visited, &mut coloring, None) {
            SolveOutcome::Colored(coloring)
        } else {
            SolveOutcome::Exhausted
        }
    }
}

impl BacktrackingSolver {
    /// One search step: try every color but the hint on `current`, keep the
    /// partial coloring valid, recurse into every neighbor.
    ///
    /// On every return without success the vertex is unvisited and uncolored
    /// again, so the caller observes its pre-call state. On success the
    /// coloring is left in place as the certificate.
    ///
    /// The hint is the color the immediately preceding neighbor took — an
    /// optimization that skips one doomed candidate, not a full constraint.
    fn walk(
        graph: &Graph,
        current: VertexId,
        visited: &mut BTreeSet<VertexId>,
        coloring: &mut Coloring,
        hint: Option<Color>,
    ) -> bool {
        // Cycle guard: never re-enter a vertex on the same path.
        if !visited.insert(current) {
            return false;
        }

        for color in Color::ALL {
            if hint == Some(color) {
                continue;
            }
            if coloring.assign(current, color).is_err() {
                // Colored vertices are exactly the visited path, and
                // `current` joined it uncolored.
                continue;
            }

            if certificate::is_valid(graph, coloring) {
                if certificate::all_colored(graph, coloring) {
                    return true;
                }
                for neighbor in graph.neighbors(current) {
                    if Self::walk(graph, neighbor, visited, coloring, Some(color)) {
                        return true;
                    }
                }
            }

            coloring.unassign(current);
        }

        visited.remove(&current);
        false
    }
}

// =============================================================================
// COMPLETE SEARCH
// =============================================================================

/// Complete depth-first search over the vertex list in order.
///
/// A candidate color is checked against all already-colored neighbors before
/// committing, so invalid partial colorings are never entered; backtracking
/// retracts by [`Coloring::unassign`]. Always terminates with the correct
/// answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropagatingSolver;

impl Solver for PropagatingSolver {
    fn name(&self) -> &'static str {
        "propagating"
    }

    fn solve(&self, graph: &Graph) -> SolveOutcome {
        let order: Vec<_> = graph.vertices().collect();
        let mut coloring = Coloring::new();
        if Self::extend(graph, &order, 0, &mut coloring) {
            SolveOutcome::Colored(coloring)
        } else {
            SolveOutcome::Exhausted
        }
    }
}

impl PropagatingSolver {
    /// Color `order[index..]`, leaving the coloring untouched on failure.
    fn extend(graph: &Graph, order: &[VertexId], index: usize, coloring: &mut Coloring) -> bool {
        let Some(&vertex) = order.get(index) else {
            return true;
        };

        for color in Color::ALL {
            let conflict = graph
                .neighbors(vertex)
                .any(|n| coloring.color_of(n) == Some(color));
            if conflict {
                continue;
            }
            if coloring.assign(vertex, color).is_err() {
                // Vertices in `order` are distinct and retracted on failure.
                return false;
            }
            if Self::extend(graph, order, index + 1, coloring) {
                return true;
            }
            coloring.unassign(vertex);
        }

        false
    }
}

// =============================================================================
// TESTS
// =============================================================================
