//! The day's puzzle: link a start character to an end character

use std::fmt;

/// Prefix of every question announcement posted by the bot
pub const ANNOUNCEMENT_PREFIX: &str = "今日の問題";

/// A puzzle question as an ordered (start, end) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Question {
    pub start: char,
    pub end: char,
}

impl Question {
    #[must_use]
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    /// Announcement text posted to the channel
    ///
    /// # Examples
    /// ```
    /// use jukugo_chain::core::Question;
    ///
    /// let question = Question::new('誘', '赦');
    /// assert_eq!(question.announcement(), "今日の問題： [誘]から[赦]まで繋げて下さい");
    /// ```
    #[must_use]
    pub fn announcement(&self) -> String {
        format!(
            "{ANNOUNCEMENT_PREFIX}： [{}]から[{}]まで繋げて下さい",
            self.start, self.end
        )
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_starts_with_prefix() {
        let question = Question::new('天', '餅');
        assert!(question.announcement().starts_with(ANNOUNCEMENT_PREFIX));
        assert!(question.announcement().contains("[天]"));
        assert!(question.announcement().contains("[餅]"));
    }

    #[test]
    fn display_shows_endpoints() {
        assert_eq!(Question::new('天', '餅').to_string(), "天 → 餅");
    }
}
