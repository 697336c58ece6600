//! Question posting command
//!
//! Draws today's start and end characters and announces them.

use super::CommandError;
use crate::chat::ChatClient;
use crate::core::Question;
use rand::Rng;

/// Draw a question with both endpoints picked uniformly from `pool`
///
/// The end is drawn from the kanji other than the start, so the two only
/// coincide when `pool` holds a single kanji.
///
/// # Errors
///
/// Returns `CommandError::EmptyKanjiPool` if `pool` is empty.
pub fn draw_question<R: Rng>(rng: &mut R, pool: &[char]) -> Result<Question, CommandError> {
    if pool.is_empty() {
        return Err(CommandError::EmptyKanjiPool);
    }

    let start_index = rng.random_range(0..pool.len());
    let end_index = match pool.len() {
        1 => start_index,
        len => (start_index + rng.random_range(1..len)) % len,
    };

    let (start, end) = (pool[start_index], pool[end_index]);

    Ok(Question::new(start, end))
}

/// Draw a question and post its announcement
///
/// # Errors
///
/// Returns an error if the pool is empty or the post is rejected.
pub fn post_question<C, R>(
    client: &C,
    channel: &str,
    rng: &mut R,
    pool: &[char],
) -> Result<Question, CommandError>
where
    C: ChatClient + ?Sized,
    R: Rng,
{
    let question = draw_question(rng, pool)?;
    tracing::info!(start = %question.start, end = %question.end, "drew question");

    client.post(channel, &question.announcement())?;
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MemoryClient;
    use crate::core::{Message, Timestamp};
    use crate::idioms::{KANJI, load_embedded};
    use crate::scoring::extract_question;
    use crate::solver::solve;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draw_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ['天', '餅', '誘'];

        for _ in 0..20 {
            let question = draw_question(&mut rng, &pool).unwrap();
            assert!(pool.contains(&question.start));
            assert!(pool.contains(&question.end));
        }
    }

    #[test]
    fn endpoints_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let question = draw_question(&mut rng, &['天', '餅']).unwrap();
            assert_ne!(question.start, question.end);
        }
    }

    #[test]
    fn drawn_questions_are_solvable() {
        let graph = load_embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(2022);

        for _ in 0..100 {
            let question = draw_question(&mut rng, KANJI).unwrap();
            let path = solve(&graph, question.start, question.end);
            assert!(path.is_some(), "no chain for {question}");
        }
    }

    #[test]
    fn single_kanji_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let question = draw_question(&mut rng, &['天']).unwrap();
        assert_eq!(question, Question::new('天', '天'));
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            draw_question(&mut rng, &[]),
            Err(CommandError::EmptyKanjiPool)
        ));
    }

    #[test]
    fn posted_question_is_extractable() {
        let client = MemoryClient::default();
        let mut rng = StdRng::seed_from_u64(42);

        let question = post_question(&client, "C1", &mut rng, KANJI).unwrap();

        let posts = client.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "C1");

        let echoed = Message::bot("B01", posts[0].1.clone(), Timestamp::from_secs(1.0));
        assert_eq!(extract_question(&[echoed]).unwrap(), question);
    }
}
