//! # Coloring
//!
//! Partial assignment from vertex to one of the three colors.
//!
//! A coloring is created empty per search attempt, mutated by the solvers
//! through [`Coloring::assign`] / [`Coloring::unassign`], and discarded when
//! the search terminates. Assigning to an already-colored vertex fails rather
//! than overwriting: an overwrite would corrupt the undo discipline of the
//! backtracking search.

use crate::{Color, TrichromaError, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A partial vertex coloring. Vertices absent from the map are uncolored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    assignments: BTreeMap<VertexId, Color>,
}

impl Coloring {
    /// Create a new empty coloring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a color for an uncolored vertex.
    ///
    /// Returns [`TrichromaError::AlreadyColored`] if the vertex already has a
    /// color. The caller must check the result and retract or retry; the
    /// existing color is never overwritten.
    pub fn assign(&mut self, vertex: VertexId, color: Color) -> Result<(), TrichromaError> {
        if self.assignments.contains_key(&vertex) {
            return Err(TrichromaError::AlreadyColored(vertex));
        }
        self.assignments.insert(vertex, color);
        Ok(())
    }

    /// Remove a vertex's color, reporting whether one was actually removed.
    ///
    /// Used exclusively to undo a trial assignment on backtrack.
    pub fn unassign(&mut self, vertex: VertexId) -> bool {
        self.assignments.remove(&vertex).is_some()
    }

    /// The color of a vertex, or `None` if uncolored. Never fails.
    #[must_use]
    pub fn color_of(&self, vertex: VertexId) -> Option<Color> {
        self.assignments.get(&vertex).copied()
    }

    /// Number of colored vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no vertex is colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All assignments in vertex-id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Color)> + '_ {
        self.assignments.iter().map(|(&v, &c)| (v, c))
    }
}

// =============================================================================
// TESTS
// =============================================================================
