//! # trichroma-core
//!
//! The deterministic reduction and solving engine for Trichroma - THE LOGIC.
//!
//! This crate implements the classic complexity-theory construction: a
//! polynomial-time reduction from 3-SAT to graph 3-coloring, two search
//! strategies that decide 3-colorability of an arbitrary undirected graph,
//! and the certificate checker that validates a candidate coloring.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network dependencies
//! - Deterministic: `BTreeMap`/`BTreeSet` only, no `HashMap`, no randomness;
//!   the same input produces the same graph, the same witness, the same
//!   answer on every run
//! - Single-threaded: both solvers run to completion or exhaustion before
//!   returning; a search that finds nothing reports `Exhausted`, it never
//!   errors
//! - I/O only at the boundary: the `formats` module holds the two flat text
//!   formats, everything else is in-memory

// =============================================================================
// MODULES
// =============================================================================

pub mod certificate;
pub mod coloring;
pub mod formats;
pub mod graph;
pub mod reduction;
pub mod solver;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Clause, Color, Formula, Literal, TrichromaError, VertexId};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use coloring::Coloring;
pub use graph::Graph;
pub use reduction::{
    decode_assignment, reduce, ReductionBuilder, FALSE_LABEL, OTHER_LABEL, TRUE_LABEL,
};
pub use solver::{
    BacktrackingSolver, ExhaustiveSolver, PropagatingSolver, SolveOutcome, Solver,
};

// =============================================================================
// RE-EXPORTS: Formats
// =============================================================================

pub use formats::{export_graph, load_graph, load_instance, parse_graph, parse_instance};
