//! Command implementations

pub mod answer;
pub mod question;
pub mod solve;

use crate::chat::ChatError;
use crate::scoring::ScoringError;
use thiserror::Error;

pub use answer::{AnswerResult, compose_answer, post_answer};
pub use question::{draw_question, post_question};
pub use solve::{SolveResult, parse_symbol, solve_pair};

/// Errors returned by command handlers
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("expected a single character, got `{0}`")]
    InvalidSymbol(String),
    #[error("kanji pool is empty")]
    EmptyKanjiPool,
}
