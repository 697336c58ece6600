//! Attempt ranking
//!
//! Shorter chains beat longer ones and earlier answers break ties. The
//! fastest answer overall earns a separate "first blood" mark.

use super::parser::Attempt;

/// Sort attempts best first: fewest idioms, then earliest timestamp
///
/// The sort is stable, so attempts with equal length and timestamp keep
/// their relative order.
pub fn rank(attempts: &mut [Attempt]) {
    attempts.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.ts().cmp(&b.ts())));
}

/// Index of the attempt with the earliest timestamp
///
/// Searches the slice as given, independent of how it was sorted. Ties go
/// to the lowest index. Returns `None` for an empty slice.
#[must_use]
pub fn first_blood_index(attempts: &[Attempt]) -> Option<usize> {
    attempts
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.ts().cmp(&b.ts()))
        .map(|(index, _)| index)
}

/// A ranked attempt with its distinctions
#[derive(Debug, Clone, Copy)]
pub struct Standing<'a> {
    pub attempt: &'a Attempt,
    /// Shortest-then-fastest attempt
    pub is_best: bool,
    /// Fastest attempt regardless of length
    pub is_first_blood: bool,
}

/// Ranked attempts together with the first blood position
#[derive(Debug, Clone)]
pub struct Scoreboard {
    attempts: Vec<Attempt>,
    first_blood: Option<usize>,
}

impl Scoreboard {
    /// Rank the attempts and locate first blood in the ranked order
    #[must_use]
    pub fn new(mut attempts: Vec<Attempt>) -> Self {
        rank(&mut attempts);
        let first_blood = first_blood_index(&attempts);

        Self {
            attempts,
            first_blood,
        }
    }

    /// Attempts in ranked order
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn best(&self) -> Option<&Attempt> {
        self.attempts.first()
    }

    #[must_use]
    pub fn first_blood(&self) -> Option<&Attempt> {
        self.first_blood.and_then(|index| self.attempts.get(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Ranked attempts with their marks
    pub fn standings(&self) -> impl Iterator<Item = Standing<'_>> {
        self.attempts
            .iter()
            .enumerate()
            .map(move |(index, attempt)| Standing {
                attempt,
                is_best: index == 0,
                is_first_blood: self.first_blood == Some(index),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Message, Question, Timestamp};
    use crate::scoring::parse_attempt;

    const SEVEN: &str = "誘引 → 引責 → 責任 → 任官 → 官許 → 許容 → 容赦";
    const SIX: &str = "誘導,導入,入手,手形,形容,容赦";

    fn attempt(user: &str, text: &str, ts: f64) -> Attempt {
        let message = Message::plain(user, text, Timestamp::from_secs(ts));
        parse_attempt(&Question::new('誘', '赦'), &message).unwrap()
    }

    #[test]
    fn shorter_chain_ranks_first() {
        let mut attempts = vec![attempt("U1", SEVEN, 149.0), attempt("U2", SIX, 151.0)];
        rank(&mut attempts);

        assert_eq!(attempts[0].user(), "U2");
        assert_eq!(attempts[1].user(), "U1");
    }

    #[test]
    fn earlier_answer_breaks_ties() {
        let mut attempts = vec![attempt("U1", SIX, 152.0), attempt("U2", SIX, 151.0)];
        rank(&mut attempts);

        assert_eq!(attempts[0].user(), "U2");
    }

    #[test]
    fn first_blood_ignores_rank() {
        let mut attempts = vec![
            attempt("U3", SIX, 151.0),
            attempt("U2", SIX, 151.0),
            attempt("U1", SEVEN, 149.0),
        ];
        rank(&mut attempts);

        let index = first_blood_index(&attempts).unwrap();
        assert_eq!(index, 2);
        assert_eq!(attempts[index].user(), "U1");
    }

    #[test]
    fn first_blood_takes_lowest_index_on_ties() {
        let attempts = vec![attempt("U1", SIX, 151.0), attempt("U2", SEVEN, 151.0)];
        assert_eq!(first_blood_index(&attempts), Some(0));
    }

    #[test]
    fn first_blood_of_nothing() {
        assert_eq!(first_blood_index(&[]), None);
    }

    #[test]
    fn scoreboard_marks_best_and_first_blood() {
        let scoreboard = Scoreboard::new(vec![
            attempt("U3", SIX, 152.0),
            attempt("U1", SEVEN, 149.0),
            attempt("U2", SIX, 151.0),
        ]);

        let marks: Vec<(&str, bool, bool)> = scoreboard
            .standings()
            .map(|s| (s.attempt.user(), s.is_best, s.is_first_blood))
            .collect();

        assert_eq!(
            marks,
            vec![("U2", true, false), ("U3", false, false), ("U1", false, true)]
        );
        assert_eq!(scoreboard.best().map(Attempt::user), Some("U2"));
        assert_eq!(scoreboard.first_blood().map(Attempt::user), Some("U1"));
    }

    #[test]
    fn single_attempt_holds_both_marks() {
        let scoreboard = Scoreboard::new(vec![attempt("U1", SIX, 151.0)]);
        let standing = scoreboard.standings().next().unwrap();

        assert!(standing.is_best);
        assert!(standing.is_first_blood);
        assert_eq!(scoreboard.len(), 1);
    }

    #[test]
    fn empty_scoreboard() {
        let scoreboard = Scoreboard::new(Vec::new());
        assert!(scoreboard.is_empty());
        assert!(scoreboard.best().is_none());
        assert!(scoreboard.first_blood().is_none());
        assert_eq!(scoreboard.standings().count(), 0);
    }
}
