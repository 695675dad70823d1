//! Pure score computation over a session's questions and recorded answers.

use crate::models::Question;

/// Count the positions whose recorded answer key matches the question's
/// correct key. Unanswered positions count zero; never fails.
pub fn score(questions: &[Question], answers: &[Option<String>]) -> usize {
    questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| answer.as_deref() == Some(question.answer.as_str()))
        .count()
}

/// Score as a percentage of `total`, `0.0` for an empty question set.
pub fn percent(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
