//! # Core Type Definitions
//!
//! This module contains all core types for the Trichroma engine:
//! - Graph identifiers (`VertexId`) and the color alphabet (`Color`)
//! - The 3-SAT input side (`Literal`, `Clause`, `Formula`)
//! - Error types (`TrichromaError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// GRAPH IDENTIFIERS & COLORS
// =============================================================================

/// Unique identifier for a vertex in the graph arena.
///
/// Ids are assigned monotonically at interning time, so iterating a
/// `BTreeMap<VertexId, _>` visits vertices in insertion order. String labels
/// exist only at the construction/import/export boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

/// One of the three colors of the 3-coloring problem.
///
/// No color is privileged: a coloring is meaningful up to relabeling, and the
/// "true" color of a reduction graph is recovered by reading the color the
/// constant-truth vertex received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// The full color alphabet, in the fixed order both solvers enumerate it.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Lowercase name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// 3-SAT INPUT SIDE
// =============================================================================

/// A propositional variable or its negation.
///
/// Variables are 1-based indices, matching the instance text format where
/// token `5` is variable 5 and token `-5` is its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// 1-based variable index.
    pub variable: u32,
    /// Polarity: `true` for a negated occurrence.
    pub negated: bool,
}

impl Literal {
    /// Create a positive literal for the given variable.
    #[must_use]
    pub const fn positive(variable: u32) -> Self {
        Self {
            variable,
            negated: false,
        }
    }

    /// Create a negated literal for the given variable.
    #[must_use]
    pub const fn negative(variable: u32) -> Self {
        Self {
            variable,
            negated: true,
        }
    }

    /// The vertex label this literal occupies in a reduction graph:
    /// `"5"` for variable 5, `"not5"` for its negation.
    ///
    /// Labels are reused across clauses so that shared literals constrain
    /// every clause they appear in.
    #[must_use]
    pub fn vertex_label(&self) -> String {
        if self.negated {
            format!("not{}", self.variable)
        } else {
            format!("{}", self.variable)
        }
    }

    /// Evaluate the literal under a truth value for its variable.
    #[must_use]
    pub const fn evaluate(&self, value: bool) -> bool {
        value != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬x{}", self.variable)
        } else {
            write!(f, "x{}", self.variable)
        }
    }
}

/// An ordered triple of exactly three literals.
///
/// The arity is load-bearing: the clause gadget of the reduction is wired for
/// exactly three literal vertices, so the type enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause(pub [Literal; 3]);

impl Clause {
    /// Create a clause from its three literals.
    #[must_use]
    pub const fn new(first: Literal, second: Literal, third: Literal) -> Self {
        Self([first, second, third])
    }

    /// The three literals in clause order.
    #[must_use]
    pub const fn literals(&self) -> &[Literal; 3] {
        &self.0
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} ∨ {} ∨ {})", self.0[0], self.0[1], self.0[2])
    }
}

/// A parsed 3-SAT instance: the declared variable count and the clause list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// Number of propositional variables, 1..=variable_count.
    pub variable_count: u32,
    /// The clauses, in instance order.
    pub clauses: Vec<Clause>,
}

impl Formula {
    /// Create a formula from a variable count and clauses.
    #[must_use]
    pub const fn new(variable_count: u32, clauses: Vec<Clause>) -> Self {
        Self {
            variable_count,
            clauses,
        }
    }

    /// Evaluate the formula under a full assignment.
    ///
    /// `assignment[i]` is the truth value of variable `i + 1`. Used as the
    /// ground-truth oracle in equivalence tests.
    #[must_use]
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause.literals().iter().any(|literal| {
                let index = (literal.variable as usize).saturating_sub(1);
                assignment.get(index).is_some_and(|&v| literal.evaluate(v))
            })
        })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Trichroma system.
///
/// "No valid coloring exists" is deliberately NOT here: search exhaustion is a
/// first-class result (`SolveOutcome::Exhausted`), never an error.
#[derive(Debug, Error)]
pub enum TrichromaError {
    /// The instance file does not match the expected format.
    /// Parsing errors abort the whole run; the reduction assumes well-formed
    /// input.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// Attempt to assign a second color to an already-colored vertex.
    /// Used as a normal control signal by the backtracking search; callers
    /// must check it and retract or retry.
    #[error("vertex already colored: {0:?}")]
    AlreadyColored(VertexId),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
