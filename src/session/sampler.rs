//! Random question selection.

use rand::seq::index;
use rand::Rng;

use crate::models::Question;

use super::SessionError;

/// Draw up to `count` distinct questions from `pool`, uniformly at random
/// and without replacement. Returns fewer than `count` questions when the
/// pool is smaller. The random source is supplied by the caller so draws
/// can be reproduced with a seeded generator.
pub fn sample<R: Rng + ?Sized>(
    pool: &[Question],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, SessionError> {
    if count == 0 {
        return Err(SessionError::InvalidCount(count));
    }

    let amount = count.min(pool.len());
    let picked = index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();

    Ok(picked)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::{AnswerOption, Question};

    use super::*;

    fn pool(size: usize) -> Vec<Question> {
        (0..size)
            .map(|i| Question {
                id: i as u32 + 1,
                category: "General".to_string(),
                prompt: format!("Question {}", i + 1),
                options: vec![
                    AnswerOption {
                        key: "A".to_string(),
                        label: "first".to_string(),
                    },
                    AnswerOption {
                        key: "B".to_string(),
                        label: "second".to_string(),
                    },
                ],
                answer: "A".to_string(),
            })
            .collect()
    }

    #[test]
    fn draws_exactly_count_distinct_questions() {
        let pool = pool(15);
        let mut rng = StdRng::seed_from_u64(1);

        let drawn = sample(&pool, 10, &mut rng).unwrap();

        assert_eq!(drawn.len(), 10);
        let ids: HashSet<u32> = drawn.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 10);
        assert!(ids.iter().all(|id| (1..=15).contains(id)));
    }

    #[test]
    fn clamps_to_pool_size() {
        let pool = pool(5);
        let mut rng = StdRng::seed_from_u64(1);

        let drawn = sample(&pool, 10, &mut rng).unwrap();

        assert_eq!(drawn.len(), 5);
    }

    #[test]
    fn deterministic_with_seeded_rng() {
        let pool = pool(15);

        let first: Vec<u32> = sample(&pool, 10, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        let second: Vec<u32> = sample(&pool, 10, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn zero_count_is_rejected() {
        let pool = pool(5);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            sample(&pool, 0, &mut rng),
            Err(SessionError::InvalidCount(0))
        );
    }
}
