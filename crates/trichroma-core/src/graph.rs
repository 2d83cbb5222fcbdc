//! # Graph Arena
//!
//! Mutable undirected-graph container with adjacency storage.
//!
//! Vertices live in an arena addressed by [`VertexId`]; string labels are
//! interned once and used only at the construction/import/export boundary, so
//! the solvers never hash strings. All storage uses `BTreeMap`/`BTreeSet` for
//! deterministic iteration.
//!
//! Invariants, enforced at the single mutation point [`Graph::add_edge`]:
//! - symmetry: if `v` is a neighbor of `u`, `u` is a neighbor of `v`
//! - no duplicate entries in a neighbor set

use crate::VertexId;
use std::collections::{BTreeMap, BTreeSet};

/// The undirected graph.
///
/// Created empty or from an edge-list import; mutated only through
/// [`Graph::add_edge`] / [`Graph::link`]; read-only for the solvers and the
/// certificate checker.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex labels: VertexId -> label.
    labels: BTreeMap<VertexId, String>,

    /// Reverse lookup: label -> VertexId.
    label_index: BTreeMap<String, VertexId>,

    /// Adjacency: vertex -> neighbor set. Symmetric by construction.
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,

    /// Next available VertexId.
    next_vertex_id: u64,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a label, returning its VertexId.
    ///
    /// If the label is already known, returns the existing id; otherwise a
    /// fresh vertex with an empty neighbor set is created.
    pub fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.label_index.get(label) {
            return id;
        }

        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id = self.next_vertex_id.saturating_add(1);

        self.labels.insert(id, label.to_string());
        self.label_index.insert(label.to_string(), id);
        self.adjacency.insert(id, BTreeSet::new());

        id
    }

    /// Add an undirected edge between two interned vertices.
    ///
    /// Idempotent: repeated calls with the same pair (in either order) leave
    /// the neighbor sets unchanged. Unknown endpoints are silently ignored;
    /// queries against absent vertices are valid during construction.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        if !self.labels.contains_key(&u) || !self.labels.contains_key(&v) {
            return;
        }
        self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
    }

    /// Intern `label` and link it to every label in `links`.
    ///
    /// Semantically equivalent to repeated [`Graph::add_edge`] with all
    /// endpoints interned first. This is the one entry point the reduction
    /// builder and the text importer use.
    pub fn link(&mut self, label: &str, links: &[&str]) -> VertexId {
        let id = self.intern(label);
        for other in links {
            let other_id = self.intern(other);
            self.add_edge(id, other_id);
        }
        id
    }

    /// Look up a vertex by its label.
    #[must_use]
    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.label_index.get(label).copied()
    }

    /// The label of a vertex, if it exists.
    #[must_use]
    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// Neighbors of a vertex in id order. Empty for an absent vertex,
    /// never fails.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// All vertices, in insertion order (ids are assigned monotonically).
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.labels.keys().copied()
    }

    /// Check whether an undirected edge exists.
    #[must_use]
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// Total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(BTreeSet::len).sum();
        directed / 2
    }

    /// Each undirected edge exactly once, as `(u, v)` with `u < v`, in order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency.iter().flat_map(|(&u, set)| {
            set.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_same_id_for_same_label() {
        let mut graph = Graph::new();
        let a = graph.intern("a");
        let again = graph.intern("a");

        assert_eq!(a, again);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = Graph::new();
        let a = graph.intern("a");
        let b = graph.intern("b");
        graph.add_edge(a, b);

        assert!(graph.contains_edge(a, b));
        assert!(graph.contains_edge(b, a));
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(graph.neighbors(b).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.intern("a");
        let b = graph.intern("b");

        graph.add_edge(a, b);
        graph.add_edge(a, b);
        graph.add_edge(b, a);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(a).count(), 1);
        assert_eq!(graph.neighbors(b).count(), 1);
    }

    #[test]
    fn add_edge_ignores_unknown_endpoints() {
        let mut graph = Graph::new();
        let a = graph.intern("a");
        let ghost = VertexId(999);

        graph.add_edge(a, ghost);
        graph.add_edge(ghost, a);

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(a).count(), 0);
    }

    #[test]
    fn neighbors_of_absent_vertex_is_empty() {
        let graph = Graph::new();
        assert_eq!(graph.neighbors(VertexId(0)).count(), 0);
    }

    #[test]
    fn link_interns_and_wires_in_one_call() {
        let mut graph = Graph::new();
        let t = graph.link("T", &["F", "O"]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(t).count(), 2);
        assert!(graph.vertex_by_label("F").is_some());
        assert!(graph.vertex_by_label("O").is_some());
    }

    #[test]
    fn vertices_iterate_in_insertion_order() {
        let mut graph = Graph::new();
        let t = graph.intern("T");
        let f = graph.intern("F");
        let o = graph.intern("O");

        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![t, f, o]);
        assert_eq!(graph.label_of(t), Some("T"));
    }

    #[test]
    fn edges_lists_each_pair_once() {
        let mut graph = Graph::new();
        let a = graph.intern("a");
        let b = graph.intern("b");
        let c = graph.intern("c");
        graph.add_edge(a, b);
        graph.add_edge(b, c);
        graph.add_edge(c, a);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(a, b), (a, c), (b, c)]);
    }
}
