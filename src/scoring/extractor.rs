//! Question extraction from channel history

use super::ScoringError;
use crate::core::{ANNOUNCEMENT_PREFIX, Message, Question};
use regex::Regex;
use std::sync::LazyLock;

/// A single character enclosed in square brackets
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.)\]").expect("Invalid bracketed symbol regex"));

/// Find the day's question in a message history
///
/// Scans in the given order and stops at the first bot message whose text
/// starts with the announcement prefix. The first two bracketed characters
/// of that message are the start and the end.
///
/// # Errors
///
/// Returns `ScoringError::NoQuestion` if no announcement exists or the
/// first one holds fewer than two bracketed characters.
///
/// # Examples
/// ```
/// use jukugo_chain::core::{Message, Question, Timestamp};
/// use jukugo_chain::scoring::extract_question;
///
/// let messages = vec![Message::bot(
///     "B01",
///     "今日の問題： [誘]から[赦]まで繋げてください",
///     Timestamp::from_secs(1_642_125_292.0),
/// )];
/// assert_eq!(extract_question(&messages).unwrap(), Question::new('誘', '赦'));
/// ```
pub fn extract_question(messages: &[Message]) -> Result<Question, ScoringError> {
    let text = messages
        .iter()
        .filter(|message| message.bot_id().is_some())
        .filter_map(Message::text)
        .find(|text| text.starts_with(ANNOUNCEMENT_PREFIX))
        .ok_or(ScoringError::NoQuestion)?;

    parse_announcement(text).ok_or_else(|| {
        tracing::warn!(text, "announcement has fewer than two bracketed characters");
        ScoringError::NoQuestion
    })
}

/// Read the first two bracketed characters of an announcement
#[must_use]
pub fn parse_announcement(text: &str) -> Option<Question> {
    let mut symbols = BRACKETED
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .filter_map(|symbol| symbol.as_str().chars().next());

    Some(Question::new(symbols.next()?, symbols.next()?))
}
