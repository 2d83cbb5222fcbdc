//! # Reduction: 3-SAT → 3-COLORING
//!
//! Builds, from a formula F, a graph G that is 3-colorable if and only if F is
//! satisfiable. The construction is the classic gadget reduction:
//!
//! 1. A base triangle over the constant vertices T (truth), F (falsehood) and
//!    O (the third color). Any 3-coloring assigns these three distinct colors;
//!    the color T receives is read back as the "true" color.
//! 2. Per variable i, the pair `i` / `not{i}`: linked to each other and both
//!    to O. This forces one of the pair onto T's color and the other onto F's
//!    color — a boolean assignment encoded as a coloring.
//! 3. Per clause (ℓ1 ∨ ℓ2 ∨ ℓ3), an OR-gadget of five fresh vertices
//!    S1..S5:
//!
//!    ```text
//!    ℓ1 - S1     S3 - S4 - T
//!         |  \  /  |    |
//!    ℓ2 - S2 -/    S5 - T
//!                  |
//!                  ℓ3
//!    ```
//!
//!    Edges: S1-S2, S1-S3, S2-S3 (the inner triangle), S3-S4, S4-S5,
//!    ℓ1-S1, ℓ2-S2, ℓ3-S5, T-S4, T-S5.
//!
//!    The inner triangle forces S3 onto F's color exactly when ℓ1 and ℓ2 are
//!    both false; {T, S4, S5} form a second triangle, so S4 and S5 split F's
//!    and O's colors, and S3-S4 plus ℓ3-S5 then leave S4, S5 no legal split.
//!    The gadget is colorable consistently with the rest of the graph iff at
//!    least one literal carries the true color.
//!
//! Gadget vertices are freshly numbered across the whole formula and never
//! reused; literal vertices are shared, so one variable constrains every
//! clause it appears in.

use crate::{Clause, Coloring, Formula, Graph};
use std::collections::BTreeMap;

// =============================================================================
// CONSTANT VERTICES
// =============================================================================

/// Label of the constant-truth vertex.
pub const TRUE_LABEL: &str = "T";

/// Label of the constant-falsehood vertex.
pub const FALSE_LABEL: &str = "F";

/// Label of the third base-triangle vertex.
pub const OTHER_LABEL: &str = "O";

// =============================================================================
// BUILDER
// =============================================================================

/// Incremental builder for the reduction graph.
///
/// Owns the graph during construction; [`ReductionBuilder::finish`] releases
/// it. The one-shot [`reduce`] covers the common case.
#[derive(Debug)]
pub struct ReductionBuilder {
    graph: Graph,
    /// Number the next gadget vertex will take. Monotonic, seeded at 1,
    /// advanced by five per clause.
    next_gadget_number: u64,
}

impl ReductionBuilder {
    /// Create a builder holding only the base triangle T-F-O.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = Graph::new();
        graph.link(TRUE_LABEL, &[FALSE_LABEL, OTHER_LABEL]);
        graph.link(FALSE_LABEL, &[TRUE_LABEL, OTHER_LABEL]);
        graph.link(OTHER_LABEL, &[FALSE_LABEL, TRUE_LABEL]);

        Self {
            graph,
            next_gadget_number: 1,
        }
    }

    /// Add the literal pair for every variable `1..=count`.
    ///
    /// Vertex labels for the same (variable, polarity) pair are reused across
    /// the whole formula, so this runs once before any clause is added.
    pub fn add_variables(&mut self, count: u32) {
        for variable in 1..=count {
            let positive = format!("{}", variable);
            let negative = format!("not{}", variable);
            self.graph.link(&positive, &[negative.as_str()]);
            self.graph
                .link(OTHER_LABEL, &[positive.as_str(), negative.as_str()]);
        }
    }

    /// Wire one clause gadget: five fresh vertices plus the links to the
    /// clause's literal vertices and to T.
    pub fn add_clause(&mut self, clause: &Clause) {
        let start = self.next_gadget_number;
        self.next_gadget_number = self.next_gadget_number.saturating_add(5);

        let gadget: Vec<String> = (start..start + 5).map(|n| format!("S{}", n)).collect();
        let [s1, s2, s3, s4, s5] = [
            gadget[0].as_str(),
            gadget[1].as_str(),
            gadget[2].as_str(),
            gadget[3].as_str(),
            gadget[4].as_str(),
        ];
        let [lit1, lit2, lit3] = clause.literals().map(|l| l.vertex_label());

        // Inner triangle S1, S2, S3
        self.graph.link(s1, &[s2, s3]);
        self.graph.link(s2, &[s3]);
        // Tail S3 - S4 - S5
        self.graph.link(s3, &[s4]);
        self.graph.link(s4, &[s5]);
        // Literal taps
        self.graph.link(&lit1, &[s1]);
        self.graph.link(&lit2, &[s2]);
        self.graph.link(&lit3, &[s5]);
        // Close the {T, S4, S5} triangle
        self.graph.link(TRUE_LABEL, &[s4, s5]);
    }

    /// Release the finished graph.
    #[must_use]
    pub fn finish(self) -> Graph {
        self.graph
    }
}

impl Default for ReductionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full reduction graph for a formula.
///
/// The output is deterministic: a formula with `v` variables and `c` clauses
/// always yields `3 + 2v + 5c` vertices and `3 + 3v + 10c` edges, with
/// identical labels and wiring on every run.
#[must_use]
pub fn reduce(formula: &Formula) -> Graph {
    let mut builder = ReductionBuilder::new();
    builder.add_variables(formula.variable_count);
    for clause in &formula.clauses {
        builder.add_clause(clause);
    }
    builder.finish()
}

// =============================================================================
// ASSIGNMENT DECODING
// =============================================================================

/// Reinterpret a coloring of a reduction graph as a boolean assignment.
///
/// Colorings are meaningful up to relabeling: whatever color the T vertex
/// received is the "true" color, and a variable is true exactly when its
/// positive-literal vertex carries it. Returns `None` when the graph has no
/// colored T vertex (i.e. it is not a colored reduction graph).
#[must_use]
pub fn decode_assignment(graph: &Graph, coloring: &Coloring) -> Option<BTreeMap<u32, bool>> {
    let t = graph.vertex_by_label(TRUE_LABEL)?;
    let true_color = coloring.color_of(t)?;

    let mut assignment = BTreeMap::new();
    for vertex in graph.vertices() {
        let Some(label) = graph.label_of(vertex) else {
            continue;
        };
        if let Ok(variable) = label.parse::<u32>() {
            assignment.insert(variable, coloring.color_of(vertex) == Some(true_color));
        }
    }
    Some(assignment)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Literal};

    fn single_clause_formula() -> Formula {
        Formula::new(
            3,
            vec![Clause::new(
                Literal::positive(1),
                Literal::positive(2),
                Literal::positive(3),
            )],
        )
    }

    fn edge(graph: &Graph, a: &str, b: &str) -> bool {
        match (graph.vertex_by_label(a), graph.vertex_by_label(b)) {
            (Some(u), Some(v)) => graph.contains_edge(u, v),
            _ => false,
        }
    }

    #[test]
    fn base_triangle_is_a_three_clique() {
        let graph = ReductionBuilder::new().finish();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(edge(&graph, "T", "F"));
        assert!(edge(&graph, "T", "O"));
        assert!(edge(&graph, "F", "O"));
    }

    #[test]
    fn literal_pair_forms_triangle_with_other() {
        let mut builder = ReductionBuilder::new();
        builder.add_variables(1);
        let graph = builder.finish();

        assert!(edge(&graph, "1", "not1"));
        assert!(edge(&graph, "1", "O"));
        assert!(edge(&graph, "not1", "O"));
        assert!(!edge(&graph, "1", "T"));
    }

    #[test]
    fn single_clause_graph_has_expected_shape() {
        let graph = reduce(&single_clause_formula());

        // 3 base + 6 literal + 5 gadget
        assert_eq!(graph.vertex_count(), 14);
        // 3 base + 3 per variable + 10 per clause
        assert_eq!(graph.edge_count(), 22);
    }

    #[test]
    fn gadget_wiring_is_exact() {
        let graph = reduce(&single_clause_formula());

        for (a, b) in [
            ("S1", "S2"),
            ("S1", "S3"),
            ("S2", "S3"),
            ("S3", "S4"),
            ("S4", "S5"),
            ("1", "S1"),
            ("2", "S2"),
            ("3", "S5"),
            ("T", "S4"),
            ("T", "S5"),
        ] {
            assert!(edge(&graph, a, b), "missing edge {}-{}", a, b);
        }

        // The tail is not a triangle with S3.
        assert!(!edge(&graph, "S3", "S5"));
        assert!(!edge(&graph, "T", "S3"));
    }

    #[test]
    fn gadget_numbering_is_fresh_per_clause() {
        let formula = Formula::new(
            2,
            vec![
                Clause::new(
                    Literal::positive(1),
                    Literal::positive(2),
                    Literal::negative(1),
                ),
                Clause::new(
                    Literal::negative(2),
                    Literal::positive(1),
                    Literal::positive(2),
                ),
            ],
        );
        let graph = reduce(&formula);

        for n in 1..=10 {
            assert!(
                graph.vertex_by_label(&format!("S{}", n)).is_some(),
                "missing S{}",
                n
            );
        }
        assert!(graph.vertex_by_label("S11").is_none());
        // Second clause's gadget taps the shared literal vertices.
        assert!(edge(&graph, "not2", "S6"));
        assert!(edge(&graph, "1", "S7"));
        assert!(edge(&graph, "2", "S10"));
    }

    #[test]
    fn reduction_is_deterministic() {
        let formula = single_clause_formula();
        let first = reduce(&formula);
        let second = reduce(&formula);

        assert_eq!(
            first.vertices().collect::<Vec<_>>(),
            second.vertices().collect::<Vec<_>>()
        );
        assert_eq!(
            first.edges().collect::<Vec<_>>(),
            second.edges().collect::<Vec<_>>()
        );
    }

    #[test]
    fn decode_reads_truth_off_the_t_vertex() {
        let mut builder = ReductionBuilder::new();
        builder.add_variables(2);
        let graph = builder.finish();

        let mut coloring = Coloring::new();
        for (label, color) in [
            ("T", Color::Green),
            ("F", Color::Red),
            ("O", Color::Blue),
            ("1", Color::Green),
            ("not1", Color::Red),
            ("2", Color::Red),
            ("not2", Color::Green),
        ] {
            let v = graph.vertex_by_label(label).expect(label);
            coloring.assign(v, color).expect("assign");
        }

        let assignment = decode_assignment(&graph, &coloring).expect("decode");
        assert_eq!(assignment.get(&1), Some(&true));
        assert_eq!(assignment.get(&2), Some(&false));
    }

    #[test]
    fn decode_without_colored_t_is_none() {
        let graph = reduce(&single_clause_formula());
        assert!(decode_assignment(&graph, &Coloring::new()).is_none());
    }
}
