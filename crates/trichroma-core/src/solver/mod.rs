//! # Solvers
//!
//! Two search strategies that decide 3-colorability of an arbitrary undirected
//! graph, plus a corrected variant of the backtracking search. Both consume a
//! read-only [`Graph`] and produce either a witness [`Coloring`] or a
//! definitive "no 3-coloring exists" answer.
//!
//! Search exhaustion is a first-class result, never an error: callers must be
//! able to tell "no solution" apart from a failure.

use crate::{Coloring, Graph};

pub mod backtracking;
pub mod exhaustive;

pub use backtracking::{BacktrackingSolver, PropagatingSolver};
pub use exhaustive::ExhaustiveSolver;

// =============================================================================
// OUTCOME
// =============================================================================

/// The definitive answer of a solve attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A valid full coloring was found; the coloring is the certificate.
    Colored(Coloring),
    /// The search space is exhausted for this strategy without a solution.
    Exhausted,
}

impl SolveOutcome {
    /// Whether a coloring was found.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        matches!(self, SolveOutcome::Colored(_))
    }

    /// The witness coloring, if any.
    #[must_use]
    pub const fn coloring(&self) -> Option<&Coloring> {
        match self {
            SolveOutcome::Colored(coloring) => Some(coloring),
            SolveOutcome::Exhausted => None,
        }
    }
}

// =============================================================================
// SOLVER TRAIT
// =============================================================================

/// A 3-coloring decision procedure.
///
/// Implementations are single-threaded and synchronous; they run to completion
/// or exhaustion before returning. They never mutate the graph.
pub trait Solver {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Decide 3-colorability, returning the same outcome for the same graph
    /// on every run.
    fn solve(&self, graph: &Graph) -> SolveOutcome;
}
