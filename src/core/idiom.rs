//! Two-character idiom representation
//!
//! An idiom is the unit of a chain: its second character must be the first
//! character of the next idiom.

use std::fmt;

/// A two-character idiom such as `誘引`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idiom {
    first: char,
    second: char,
}

impl Idiom {
    #[must_use]
    pub const fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    /// Parse an idiom from text that is exactly two characters long
    ///
    /// # Examples
    /// ```
    /// use jukugo_chain::core::Idiom;
    ///
    /// let idiom = Idiom::parse("誘引").unwrap();
    /// assert_eq!(idiom.first(), '誘');
    /// assert_eq!(idiom.second(), '引');
    ///
    /// assert!(Idiom::parse("誘").is_none());
    /// assert!(Idiom::parse("誘引責").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let first = chars.next()?;
        let second = chars.next()?;

        if chars.next().is_some() {
            return None;
        }

        Some(Self::new(first, second))
    }

    #[inline]
    #[must_use]
    pub const fn first(self) -> char {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn second(self) -> char {
        self.second
    }

    /// Check whether `next` can follow this idiom in a chain
    #[inline]
    #[must_use]
    pub const fn links_to(self, next: Self) -> bool {
        self.second == next.first
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}
