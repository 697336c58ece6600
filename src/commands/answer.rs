//! Answer posting command
//!
//! Scores the day's attempts and posts the results, optionally followed by
//! the solver's own chain.

use super::CommandError;
use crate::chat::{ChatClient, UserDirectory};
use crate::core::{Message, Question, Timestamp};
use crate::output::{format_results, format_solution};
use crate::scoring::{Scoreboard, extract_question, parse_attempts};
use crate::solver::{IdiomGraph, solve};

/// A scored day ready to be posted
pub struct AnswerResult {
    pub question: Question,
    pub scoreboard: Scoreboard,
    pub text: String,
}

/// Score a message history and render the results post
///
/// When `graph` is given, the solver's shortest chain is appended.
///
/// # Errors
///
/// Returns `CommandError::Scoring` if the history holds no question.
pub fn compose_answer(
    messages: &[Message],
    users: &UserDirectory,
    graph: Option<&IdiomGraph>,
) -> Result<AnswerResult, CommandError> {
    let question = extract_question(messages)?;
    let attempts = parse_attempts(&question, messages);
    tracing::info!(%question, attempts = attempts.len(), "scored attempts");

    let scoreboard = Scoreboard::new(attempts);
    let mut text = format_results(&scoreboard, users);

    if let Some(graph) = graph {
        let path = solve(graph, question.start, question.end);
        text.push('\n');
        text.push_str(&format_solution(path.as_ref()));
    }

    Ok(AnswerResult {
        question,
        scoreboard,
        text,
    })
}

/// Fetch the history since `oldest`, score it, and post the results
///
/// # Errors
///
/// Returns an error if fetching or posting fails, or no question was asked.
pub fn post_answer<C: ChatClient + ?Sized>(
    client: &C,
    channel: &str,
    oldest: Timestamp,
    graph: Option<&IdiomGraph>,
) -> Result<AnswerResult, CommandError> {
    let users = client.user_names()?;
    let messages = client.history(channel, oldest)?;

    let result = compose_answer(&messages, &users, graph)?;
    client.post(channel, &result.text)?;
    Ok(result)
}
