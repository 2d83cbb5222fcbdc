//! # Exhaustive Solver
//!
//! Generate-and-test: enumerate all 3^n total colorings in a fixed vertex
//! order and return the first one the certificate checker accepts.
//!
//! Exponential by construction. This is the correctness baseline the other
//! strategies are measured against, not a scalable solver.

use crate::solver::{SolveOutcome, Solver};
use crate::{certificate, Color, Coloring, Graph};

/// Generate-and-test over the full 3^n assignment space.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "generate-and-test"
    }

    fn solve(&self, graph: &Graph) -> SolveOutcome {
        let order: Vec<_> = graph.vertices().collect();
        if order.is_empty() {
            return SolveOutcome::Colored(Coloring::new());
        }

        // Mixed-radix counter over {0, 1, 2}^n; digit i picks the color of
        // order[i]. The enumeration order is fixed, so the witness is too.
        let mut digits = vec![0usize; order.len()];
        loop {
            let mut coloring = Coloring::new();
            for (&vertex, &digit) in order.iter().zip(digits.iter()) {
                // Vertices in `order` are distinct, so assignment cannot clash.
                let _ = coloring.assign(vertex, Color::ALL[digit]);
            }

            if certificate::is_valid(graph, &coloring) {
                return SolveOutcome::Colored(coloring);
            }

            let mut position = 0;
            loop {
                if position == digits.len() {
                    return SolveOutcome::Exhausted;
                }
                if digits[position] == Color::ALL.len() - 1 {
                    digits[position] = 0;
                    position += 1;
                } else {
                    digits[position] += 1;
                    break;
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
