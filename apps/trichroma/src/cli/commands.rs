//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use std::collections::BTreeMap;
use std::path::PathBuf;
use trichroma_core::{
    certificate, decode_assignment, export_graph, load_graph, load_instance, reduce,
    BacktrackingSolver, Coloring, ExhaustiveSolver, Graph, PropagatingSolver, SolveOutcome,
    Solver, TrichromaError,
};

// =============================================================================
// PATH VALIDATION
// =============================================================================

/// Validate an input file path.
///
/// Canonicalizes the path to resolve symlinks and "..", ensures it exists and
/// is a regular file.
fn validate_file_path(path: &std::path::Path) -> Result<PathBuf, TrichromaError> {
    let canonical = path.canonicalize().map_err(|e| {
        TrichromaError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(TrichromaError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output file path.
///
/// The parent directory must already exist; the file itself need not.
fn validate_output_path(path: &std::path::Path) -> Result<PathBuf, TrichromaError> {
    let parent = path.parent().unwrap_or(std::path::Path::new("."));

    let canonical_parent = parent.canonicalize().map_err(|e| {
        TrichromaError::Io(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(TrichromaError::Io(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| TrichromaError::Io("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// SOLVER SELECTION
// =============================================================================

/// Resolve a strategy name to a solver.
fn solver_for(strategy: &str) -> Result<Box<dyn Solver>, TrichromaError> {
    match strategy {
        "generate-and-test" => Ok(Box::new(ExhaustiveSolver)),
        "back-tracking" => Ok(Box::new(BacktrackingSolver)),
        "propagating" => Ok(Box::new(PropagatingSolver)),
        _ => Err(TrichromaError::MalformedInstance(format!(
            "unknown strategy '{}'. Use: generate-and-test, back-tracking, propagating",
            strategy
        ))),
    }
}

/// Witness coloring keyed by vertex label, for human and JSON output.
fn coloring_by_label(graph: &Graph, coloring: &Coloring) -> BTreeMap<String, String> {
    coloring
        .iter()
        .filter_map(|(vertex, color)| {
            graph
                .label_of(vertex)
                .map(|label| (label.to_string(), color.as_str().to_string()))
        })
        .collect()
}

// =============================================================================
// REDUCE COMMAND
// =============================================================================

/// Reduce a 3-SAT instance file to a 3-coloring graph file.
pub fn cmd_reduce(
    json_mode: bool,
    input: &std::path::Path,
    output: &std::path::Path,
) -> Result<(), TrichromaError> {
    let validated_input = validate_file_path(input)?;
    let validated_output = validate_output_path(output)?;

    let formula = load_instance(&validated_input)?;
    let graph = reduce(&formula);
    export_graph(&graph, &validated_output)?;

    if json_mode {
        let out = serde_json::json!({
            "input": validated_input.to_string_lossy(),
            "output": validated_output.to_string_lossy(),
            "variables": formula.variable_count,
            "clauses": formula.clauses.len(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count()
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    println!("Formula: {}", formula);
    println!(
        "Reduced {} variables, {} clauses to a graph with {} vertices, {} edges",
        formula.variable_count,
        formula.clauses.len(),
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("Written to {:?}", validated_output);

    Ok(())
}

// =============================================================================
// SOLVE COMMAND
// =============================================================================

/// Decide 3-colorability of a graph file with the chosen strategy.
pub fn cmd_solve(
    json_mode: bool,
    input: &std::path::Path,
    strategy: &str,
    show: bool,
) -> Result<(), TrichromaError> {
    let validated_input = validate_file_path(input)?;
    let solver = solver_for(strategy)?;

    let graph = load_graph(&validated_input)?;

    tracing::info!(
        strategy = solver.name(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "solving"
    );
    let outcome = solver.solve(&graph);

    let witness = match &outcome {
        SolveOutcome::Colored(coloring) => Some(coloring),
        SolveOutcome::Exhausted => None,
    };
    let certified = witness.is_some_and(|coloring| {
        certificate::is_valid(&graph, coloring) && certificate::all_colored(&graph, coloring)
    });
    let assignment = witness.and_then(|coloring| decode_assignment(&graph, coloring));

    if json_mode {
        let out = serde_json::json!({
            "input": validated_input.to_string_lossy(),
            "strategy": solver.name(),
            "colorable": witness.is_some(),
            "certified": certified,
            "coloring": witness.map(|c| coloring_by_label(&graph, c)),
            "assignment": assignment
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    println!("Strategy: {}", solver.name());
    match witness {
        Some(coloring) => {
            println!("Graph is 3-colorable");
            println!(
                "Certificate: {}",
                if certified { "valid" } else { "INVALID" }
            );

            if show {
                for (label, color) in coloring_by_label(&graph, coloring) {
                    println!("  {} = {}", label, color);
                }
            }
            if let Some(assignment) = assignment {
                println!("Decoded assignment:");
                for (variable, value) in assignment {
                    println!("  x{} = {}", variable, value);
                }
            }
        }
        None => {
            println!("No 3-coloring exists (search exhausted)");
        }
    }

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Print a graph file.
pub fn cmd_show(json_mode: bool, input: &std::path::Path) -> Result<(), TrichromaError> {
    let validated_input = validate_file_path(input)?;
    let graph = load_graph(&validated_input)?;

    let labels: Vec<String> = graph
        .vertices()
        .filter_map(|v| graph.label_of(v).map(str::to_string))
        .collect();
    let edges: Vec<(String, String)> = graph
        .edges()
        .filter_map(|(u, v)| {
            Some((
                graph.label_of(u)?.to_string(),
                graph.label_of(v)?.to_string(),
            ))
        })
        .collect();

    if json_mode {
        let out = serde_json::json!({
            "input": validated_input.to_string_lossy(),
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "vertices": labels,
            "edges": edges
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    println!("Graph {:?}", validated_input);
    println!("Vertices ({}): {}", graph.vertex_count(), labels.join(" "));
    println!("Edges ({}):", graph.edge_count());
    for (a, b) in edges {
        println!("  {}-{}", a, b);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE: &str = "c test instance\n3 2\n1 -2 3\n-1 2 -3\n0\n";

    fn write_instance(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("instance.txt");
        std::fs::write(&path, INSTANCE).expect("write instance");
        path
    }

    #[test]
    fn reduce_writes_a_loadable_graph() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_instance(&dir);
        let output = dir.path().join("graph.txt");

        cmd_reduce(false, &input, &output).expect("reduce");

        let graph = load_graph(&output).expect("load");
        // 3 base + 6 literal + 10 gadget
        assert_eq!(graph.vertex_count(), 19);
        assert_eq!(graph.edge_count(), 32);
    }

    #[test]
    fn solve_runs_every_strategy() {
        // generate-and-test enumerates 3^n colorings, so it only gets the
        // triangle; the reduced 19-vertex graph goes to the search strategies.
        let dir = tempfile::tempdir().expect("tempdir");
        let triangle = dir.path().join("triangle.txt");
        std::fs::write(&triangle, "Graph{\na b c\na-b\na-c\nb-c\n}").expect("write triangle");

        cmd_solve(true, &triangle, "generate-and-test", true).expect("generate-and-test");

        let input = write_instance(&dir);
        let output = dir.path().join("graph.txt");
        cmd_reduce(true, &input, &output).expect("reduce");

        for strategy in ["back-tracking", "propagating"] {
            cmd_solve(true, &output, strategy, true).expect(strategy);
        }
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(matches!(
            solver_for("guess"),
            Err(TrichromaError::MalformedInstance(_))
        ));
        for strategy in ["generate-and-test", "back-tracking", "propagating"] {
            assert_eq!(solver_for(strategy).expect(strategy).name(), strategy);
        }
    }

    #[test]
    fn show_prints_a_graph_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, "Graph{\na b c\na-b\na-c\nb-c\n}").expect("write graph");

        cmd_show(false, &path).expect("show");
        cmd_show(true, &path).expect("show json");
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.txt");

        let err = cmd_show(false, &missing).expect_err("missing file");
        assert!(matches!(err, TrichromaError::Io(_)));
    }

    #[test]
    fn reduce_rejects_an_unwritable_output_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_instance(&dir);
        let output = dir.path().join("no-such-dir").join("graph.txt");

        let err = cmd_reduce(false, &input, &output).expect_err("bad output dir");
        assert!(matches!(err, TrichromaError::Io(_)));
    }
}
