//! Question extraction, attempt parsing and ranking
//!
//! Pure functions over already-fetched messages.

mod extractor;
mod parser;
mod ranking;

use thiserror::Error;

pub use extractor::{extract_question, parse_announcement};
pub use parser::{Attempt, extract_tokens, is_valid_chain, parse_attempt, parse_attempts};
pub use ranking::{Scoreboard, Standing, first_blood_index, rank};

/// Errors that stop a scoring run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("no question message found in history")]
    NoQuestion,
}
