//! Question bank loading and validation.
//!
//! The bank is a JSON file of records shaped like the storage schema:
//! `{"id": 1, "category": "...", "question": "...",
//!   "options": {"A": "...", "B": "..."}, "answer": "A"}`.
//! Records are validated here so the rest of the crate can trust every
//! `Question` it holds.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{AnswerOption, Question};

/// Failure to read the question bank. Fatal to starting a session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("question bank {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("question bank {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
}

/// A bank record as stored on disk.
#[derive(Deserialize)]
struct RawQuestion {
    id: u32,
    category: String,
    question: String,
    options: BTreeMap<String, String>,
    answer: String,
}

/// Load and validate every record from a JSON bank file.
pub fn load_question_bank<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| LoadError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_bank(&text).map_err(|reason| LoadError::Corrupt {
        path: path.to_path_buf(),
        reason,
    })?;

    log::info!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

fn parse_bank(text: &str) -> Result<Vec<Question>, String> {
    let raw: Vec<RawQuestion> = serde_json::from_str(text).map_err(|err| err.to_string())?;

    if raw.is_empty() {
        return Err("the bank contains no questions".to_string());
    }

    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(format!("duplicate question id {}", record.id));
            }
            validate_record(record)
        })
        .collect()
}

fn validate_record(raw: RawQuestion) -> Result<Question, String> {
    if raw.options.len() < 2 {
        return Err(format!("question {} has fewer than two options", raw.id));
    }
    if !raw.options.contains_key(&raw.answer) {
        return Err(format!(
            "question {} answer key {:?} is not one of its options",
            raw.id, raw.answer
        ));
    }

    let options = raw
        .options
        .into_iter()
        .map(|(key, label)| AnswerOption { key, label })
        .collect();

    Ok(Question {
        id: raw.id,
        category: raw.category,
        prompt: raw.question,
        options,
        answer: raw.answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
        {
            "id": 1,
            "category": "Numerical Ability",
            "question": "The average of first 50 natural numbers is ?",
            "options": {"A": "25.30", "B": "25.5", "C": "25.00", "D": "12.25"},
            "answer": "B"
        },
        {
            "id": 2,
            "category": "Verbal Ability",
            "question": "Find the correctly spelt word.",
            "options": {"A": "Ommineous", "B": "Ominous"},
            "answer": "B"
        }
    ]"#;

    #[test]
    fn parses_valid_bank() {
        let questions = parse_bank(VALID).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].category, "Numerical Ability");
        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].option_label("B"), Some("25.5"));
        assert_eq!(questions[0].answer, "B");
        assert_eq!(questions[1].options.len(), 2);
    }

    #[test]
    fn rejects_undecodable_json() {
        assert!(parse_bank("not json").is_err());
    }

    #[test]
    fn rejects_empty_bank() {
        let err = parse_bank("[]").unwrap_err();
        assert!(err.contains("no questions"));
    }

    #[test]
    fn rejects_answer_key_outside_options() {
        let text = r#"[{
            "id": 1, "category": "c", "question": "q",
            "options": {"A": "a", "B": "b"}, "answer": "E"
        }]"#;
        let err = parse_bank(text).unwrap_err();
        assert!(err.contains("answer key"));
    }

    #[test]
    fn rejects_too_few_options() {
        let text = r#"[{
            "id": 1, "category": "c", "question": "q",
            "options": {"A": "a"}, "answer": "A"
        }]"#;
        let err = parse_bank(text).unwrap_err();
        assert!(err.contains("fewer than two"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = r#"[
            {"id": 1, "category": "c", "question": "q1",
             "options": {"A": "a", "B": "b"}, "answer": "A"},
            {"id": 1, "category": "c", "question": "q2",
             "options": {"A": "a", "B": "b"}, "answer": "B"}
        ]"#;
        let err = parse_bank(text).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_question_bank("definitely/not/a/bank.json").unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { .. }));
    }
}
