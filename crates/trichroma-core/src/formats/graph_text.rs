//! # Graph Text Format
//!
//! ```text
//! Graph{
//! T F O 1 not1
//! T-F
//! T-O
//! F-O
//! 1-not1
//! }
//! ```
//!
//! Line 1 is the literal `Graph{`; line 2 lists all vertex labels separated by
//! spaces; each following line encodes one undirected edge as
//! `<vertex1>-<vertex2>` with every unordered pair written exactly once; the
//! final line is the literal `}`.
//!
//! The importer skips header, label list and trailer and rebuilds the graph
//! from the edge lines alone, so isolated vertices do not survive a
//! round-trip. The reduction never produces any.

use crate::{Graph, TrichromaError};
use std::path::Path;

/// First line of the format.
pub const HEADER: &str = "Graph{";

/// Last line of the format.
pub const TRAILER: &str = "}";

/// Render a graph to the text format.
#[must_use]
pub fn render_graph(graph: &Graph) -> String {
    let labels: Vec<&str> = graph
        .vertices()
        .filter_map(|v| graph.label_of(v))
        .collect();

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&labels.join(" "));
    out.push('\n');

    for (u, v) in graph.edges() {
        if let (Some(a), Some(b)) = (graph.label_of(u), graph.label_of(v)) {
            out.push_str(a);
            out.push('-');
            out.push_str(b);
            out.push('\n');
        }
    }

    out.push_str(TRAILER);
    out
}

/// Render a graph and write it to `path`.
pub fn export_graph(graph: &Graph, path: &Path) -> Result<(), TrichromaError> {
    std::fs::write(path, render_graph(graph))
        .map_err(|e| TrichromaError::Io(format!("cannot write {}: {}", path.display(), e)))?;

    tracing::info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph exported"
    );
    Ok(())
}

/// Parse a graph from its full text.
pub fn parse_graph(text: &str) -> Result<Graph, TrichromaError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 3 {
        return Err(TrichromaError::MalformedInstance(format!(
            "expected header, label and trailer lines, got {} lines",
            lines.len()
        )));
    }

    let mut graph = Graph::new();
    for line in &lines[2..lines.len() - 1] {
        let Some((first, second)) = line.split_once('-') else {
            return Err(TrichromaError::MalformedInstance(format!(
                "edge line '{}' must be '<vertex1>-<vertex2>'",
                line
            )));
        };
        graph.link(first, &[second]);
    }

    Ok(graph)
}

/// Read and parse a graph file.
pub fn load_graph(path: &Path) -> Result<Graph, TrichromaError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| TrichromaError::Io(format!("cannot read {}: {}", path.display(), e)))?;
    let graph = parse_graph(&text)?;
    tracing::info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

// =============================================================================
// TESTS
// =============================================================================
