//! Attempt parsing and validation
//!
//! Pulls `AB → BC → CD` chains out of free-form chat text and keeps only
//! those that link the question's start to its end without a break.

use crate::core::{Idiom, Message, Question, Timestamp};
use std::fmt::Display;
use std::sync::LazyLock;

/// Any recognized chain delimiter
static DELIMITER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new("→|->|,").expect("Invalid delimiter regex"));

/// Two characters right before a delimiter, or right after one
static TOKEN: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"..\s*(?=→|->|,)|(?:(?<=→)|(?<=->)|(?<=,))\s*..")
        .expect("Invalid chain token regex")
});

/// A user's validated answer chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    message: Message,
    idioms: Vec<Idiom>,
}

impl Attempt {
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    #[must_use]
    pub fn idioms(&self) -> &[Idiom] {
        &self.idioms
    }

    /// Number of idioms in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.idioms.len()
    }

    /// Always false: a valid chain holds at least two idioms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idioms.is_empty()
    }

    #[must_use]
    pub const fn ts(&self) -> Timestamp {
        self.message.ts()
    }

    /// Author of the attempt
    #[must_use]
    pub fn user(&self) -> &str {
        self.message.user().unwrap_or_default()
    }
}

/// Collect every valid attempt from a message history
///
/// Messages that are not a valid chain are skipped silently. The result
/// keeps the input order.
#[must_use]
pub fn parse_attempts(question: &Question, messages: &[Message]) -> Vec<Attempt> {
    messages
        .iter()
        .filter_map(|message| parse_attempt(question, message))
        .collect()
}

/// Validate a single message as an attempt
#[must_use]
pub fn parse_attempt(question: &Question, message: &Message) -> Option<Attempt> {
    if !message.is_message() {
        return None;
    }
    message.user()?;

    let text = message.text().filter(|text| !text.is_empty())?;
    if !DELIMITER.is_match(text) {
        return None;
    }

    let tokens = extract_tokens(text);
    if tokens.len() < 2 {
        return None;
    }

    let idioms = tokens
        .into_iter()
        .map(Idiom::parse)
        .collect::<Option<Vec<_>>>()?;

    if !is_valid_chain(question, &idioms) {
        tracing::trace!(text, "rejected broken chain");
        return None;
    }

    Some(Attempt {
        message: message.clone(),
        idioms,
    })
}

/// Candidate tokens around the delimiters, trimmed of whitespace
///
/// A text the matcher gives up on yields no tokens at all.
///
/// # Examples
/// ```
/// use jukugo_chain::scoring::extract_tokens;
///
/// assert_eq!(
///     extract_tokens("あー 誘導,導入,入手とかか"),
///     vec!["誘導", "導入", "入手"]
/// );
/// ```
#[must_use]
pub fn extract_tokens(text: &str) -> Vec<&str> {
    trimmed_tokens(TOKEN.find_iter(text).map(|token| token.map(|token| token.as_str())))
}

/// All matches trimmed, or nothing if any match failed
fn trimmed_tokens<'t, E: Display>(
    matches: impl Iterator<Item = Result<&'t str, E>>,
) -> Vec<&'t str> {
    matches
        .map(|token| token.map(str::trim))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "token matching aborted");
            Vec::new()
        })
}

/// Check endpoints and continuity of a chain
#[must_use]
pub fn is_valid_chain(question: &Question, idioms: &[Idiom]) -> bool {
    let (Some(first), Some(last)) = (idioms.first(), idioms.last()) else {
        return false;
    };

    first.first() == question.start
        && last.second() == question.end
        && idioms.windows(2).all(|pair| pair[0].links_to(pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new('誘', '赦')
    }

    fn message(text: &str) -> Message {
        Message::plain("XXXXXXXXX", text, Timestamp::from_secs(1_642_126_149.0))
    }

    fn texts(attempt: &Attempt) -> Vec<String> {
        attempt.idioms().iter().map(Idiom::to_string).collect()
    }

    #[test]
    fn arrow_chain_is_parsed() {
        let attempt = parse_attempt(
            &question(),
            &message("誘引 → 引責 → 責任 → 任官 → 官許 → 許容 → 容赦"),
        )
        .unwrap();

        assert_eq!(
            texts(&attempt),
            vec!["誘引", "引責", "責任", "任官", "官許", "許容", "容赦"]
        );
        assert_eq!(attempt.len(), 7);
        assert_eq!(attempt.user(), "XXXXXXXXX");
    }

    #[test]
    fn comma_chain_inside_chatter() {
        let attempt =
            parse_attempt(&question(), &message("あー 誘導,導入,入手,手形,形容,容赦とかか")).unwrap();

        assert_eq!(
            texts(&attempt),
            vec!["誘導", "導入", "入手", "手形", "形容", "容赦"]
        );
    }

    #[test]
    fn ascii_arrow_chain() {
        assert!(parse_attempt(&question(), &message("誘惑->惑星->星空")).is_none());

        let question = Question::new('誘', '空');
        let attempt = parse_attempt(&question, &message("誘惑->惑星->星空")).unwrap();
        assert_eq!(texts(&attempt), vec!["誘惑", "惑星", "星空"]);
    }

    #[test]
    fn broken_chain_is_rejected() {
        assert!(parse_attempt(&question(), &message("誘導,容赦はズル")).is_none());
        assert!(parse_attempt(&question(), &message("誘引 → 責任 → 任官 → 許容 → 容赦")).is_none());
    }

    #[test]
    fn wrong_endpoints_are_rejected() {
        assert!(parse_attempt(&question(), &message("引責 → 責任")).is_none());
        assert!(parse_attempt(&question(), &message("誘引 → 引責")).is_none());
    }

    #[test]
    fn single_token_is_rejected() {
        assert!(parse_attempt(&Question::new('誘', '引'), &message("誘引,")).is_none());
        assert!(parse_attempt(&question(), &message("容赦")).is_none());
    }

    #[test]
    fn messages_without_user_or_text_are_skipped() {
        let bot = Message::bot("B01", "誘引 → 引責 → 容赦", Timestamp::from_secs(1.0));
        assert!(parse_attempt(&question(), &bot).is_none());

        let empty = message("");
        assert!(parse_attempt(&question(), &empty).is_none());

        let other = Message::Other {
            kind: "reaction".to_string(),
            ts: Timestamp::from_secs(1.0),
        };
        assert!(parse_attempt(&question(), &other).is_none());
    }

    #[test]
    fn bot_message_with_user_is_considered() {
        let relayed = Message::Bot {
            bot_id: "B01".to_string(),
            user: Some("U1".to_string()),
            text: Some("誘導,導入,入手,手形,形容,容赦".to_string()),
            ts: Timestamp::from_secs(1.0),
        };

        let attempt = parse_attempt(&question(), &relayed).unwrap();
        assert_eq!(attempt.user(), "U1");
        assert_eq!(attempt.len(), 6);
    }

    #[test]
    fn system_message_with_user_is_considered() {
        let broadcast = Message::System {
            subtype: "thread_broadcast".to_string(),
            user: Some("U1".to_string()),
            text: Some("誘導,導入,入手,手形,形容,容赦".to_string()),
            ts: Timestamp::from_secs(1.0),
        };
        assert!(parse_attempt(&question(), &broadcast).is_some());
    }

    #[test]
    fn extract_tokens_trims_whitespace() {
        assert_eq!(extract_tokens("誘引 → 引責 →　責任"), vec!["誘引", "引責", "責任"]);
    }

    #[test]
    fn failed_match_discards_all_tokens() {
        let matches = [Ok("誘導"), Ok(" 導入"), Err("backtrack limit exceeded"), Ok("容赦")];
        assert!(trimmed_tokens(matches.into_iter()).is_empty());

        let matches: [Result<&str, &str>; 2] = [Ok("誘導 "), Ok(" 導入")];
        assert_eq!(trimmed_tokens(matches.into_iter()), vec!["誘導", "導入"]);
    }

    #[test]
    fn extract_tokens_without_delimiter() {
        assert!(extract_tokens("誘引引責").is_empty());
    }

    #[test]
    fn parse_attempts_keeps_input_order() {
        let messages = vec![
            message("誘導,導入,入手,手形,形容,容赦"),
            message("おはよう"),
            message("誘引 → 引責 → 責任 → 任官 → 官許 → 許容 → 容赦"),
        ];

        let attempts = parse_attempts(&question(), &messages);
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].len(), 6);
        assert_eq!(attempts[1].len(), 7);
    }

    #[test]
    fn is_valid_chain_checks_every_link() {
        let chain = [Idiom::new('誘', '引'), Idiom::new('引', '責'), Idiom::new('責', '赦')];
        assert!(is_valid_chain(&question(), &chain));

        let broken = [Idiom::new('誘', '引'), Idiom::new('責', '任'), Idiom::new('任', '赦')];
        assert!(!is_valid_chain(&question(), &broken));
        assert!(!is_valid_chain(&question(), &[]));
    }
}
