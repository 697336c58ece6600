//! Direct solving command
//!
//! Finds the shortest idiom chain between two characters given on the
//! command line.

use super::CommandError;
use crate::core::Question;
use crate::solver::{IdiomGraph, Path, solve};

/// Result of solving a question directly
pub struct SolveResult {
    pub question: Question,
    /// `None` when no chain links the two characters
    pub path: Option<Path>,
}

/// Parse a single-character argument
///
/// # Errors
///
/// Returns `CommandError::InvalidSymbol` unless `text` is exactly one character.
pub fn parse_symbol(text: &str) -> Result<char, CommandError> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(CommandError::InvalidSymbol(text.to_string())),
    }
}

/// Solve the chain from `start` to `end`
///
/// # Errors
///
/// Returns `CommandError::InvalidSymbol` if either argument is not a single
/// character. An unreachable end is not an error.
pub fn solve_pair(graph: &IdiomGraph, start: &str, end: &str) -> Result<SolveResult, CommandError> {
    let question = Question::new(parse_symbol(start)?, parse_symbol(end)?);
    let path = solve(graph, question.start, question.end);

    match &path {
        Some(path) => tracing::info!(%question, idioms = path.len() - 1, "found chain"),
        None => tracing::info!(%question, "no chain found"),
    }

    Ok(SolveResult { question, path })
}
