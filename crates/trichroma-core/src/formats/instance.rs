//! # 3-SAT Instance Format
//!
//! ```text
//! c a comment header, always skipped
//! 3 2
//! 1 -2 3
//! -1 2 -3
//! 0
//! ```
//!
//! Line 1 is a header (skipped); line 2 carries `<literal_count> <clause_count>`;
//! each following line up to the last encodes one clause as three
//! whitespace-separated literal tokens (`k` or `-k`); the final line is a
//! trailer (skipped). Clause arity is fixed at three — the gadget construction
//! depends on it — so any other arity is malformed, as is a variable outside
//! `1..=literal_count`.

use crate::{Clause, Formula, Literal, TrichromaError};
use std::path::Path;

/// Parse an instance from its full text.
pub fn parse_instance(text: &str) -> Result<Formula, TrichromaError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 3 {
        return Err(TrichromaError::MalformedInstance(format!(
            "expected header, counts and trailer lines, got {} lines",
            lines.len()
        )));
    }

    let (variable_count, clause_count) = parse_counts(lines[1])?;

    let clause_lines = &lines[2..lines.len() - 1];
    if clause_lines.len() != clause_count {
        return Err(TrichromaError::MalformedInstance(format!(
            "declared {} clauses but found {}",
            clause_count,
            clause_lines.len()
        )));
    }

    let mut clauses = Vec::with_capacity(clause_count);
    for line in clause_lines {
        clauses.push(parse_clause(line, variable_count)?);
    }

    tracing::debug!(
        variables = variable_count,
        clauses = clauses.len(),
        "instance parsed"
    );
    Ok(Formula::new(variable_count, clauses))
}

/// Read and parse an instance file.
pub fn load_instance(path: &Path) -> Result<Formula, TrichromaError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| TrichromaError::Io(format!("cannot read {}: {}", path.display(), e)))?;
    let formula = parse_instance(&text)?;
    tracing::info!(path = %path.display(), formula = %formula, "instance loaded");
    Ok(formula)
}

fn parse_counts(line: &str) -> Result<(u32, usize), TrichromaError> {
    let mut tokens = line.split_whitespace();
    let (Some(literals), Some(clauses), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(TrichromaError::MalformedInstance(format!(
            "counts line must be '<literal_count> <clause_count>', got '{}'",
            line
        )));
    };

    let literal_count: u32 = literals.parse().map_err(|_| {
        TrichromaError::MalformedInstance(format!("bad literal count '{}'", literals))
    })?;
    let clause_count: usize = clauses
        .parse()
        .map_err(|_| TrichromaError::MalformedInstance(format!("bad clause count '{}'", clauses)))?;

    Ok((literal_count, clause_count))
}

fn parse_clause(line: &str, variable_count: u32) -> Result<Clause, TrichromaError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[first, second, third] = tokens.as_slice() else {
        return Err(TrichromaError::MalformedInstance(format!(
            "clause '{}' must have exactly three literals",
            line
        )));
    };

    Ok(Clause::new(
        parse_literal(first, variable_count)?,
        parse_literal(second, variable_count)?,
        parse_literal(third, variable_count)?,
    ))
}

fn parse_literal(token: &str, variable_count: u32) -> Result<Literal, TrichromaError> {
    let (negated, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let variable: u32 = digits
        .parse()
        .map_err(|_| TrichromaError::MalformedInstance(format!("bad literal token '{}'", token)))?;

    if variable == 0 || variable > variable_count {
        return Err(TrichromaError::MalformedInstance(format!(
            "variable {} outside 1..={}",
            variable, variable_count
        )));
    }

    Ok(if negated {
        Literal::negative(variable)
    } else {
        Literal::positive(variable)
    })
}

// =============================================================================
// TESTS
// =============================================================================
