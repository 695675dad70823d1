/// A single option a question can be answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    /// Short key the answer is recorded under, e.g. "A".
    pub key: String,
    /// Display text shown next to the key.
    pub label: String,
}

/// A multiple-choice question from the bank. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub prompt: String,
    /// Ordered options; keys are unique within a question.
    pub options: Vec<AnswerOption>,
    /// Key of the correct option. Guaranteed by the loader to be present
    /// in `options`.
    pub answer: String,
}

impl Question {
    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|option| option.key == key)
    }

    /// Display text for an option key, if the question has that option.
    pub fn option_label(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.label.as_str())
    }

    /// Display text of the correct option.
    pub fn correct_label(&self) -> &str {
        self.option_label(&self.answer).unwrap_or(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: 1,
            category: "General".to_string(),
            prompt: "Pick B".to_string(),
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
            answer: "B".to_string(),
        }
    }

    #[test]
    fn option_lookup() {
        let q = question();
        assert!(q.has_option("A"));
        assert!(!q.has_option("E"));
        assert_eq!(q.option_label("A"), Some("first"));
        assert_eq!(q.option_label("E"), None);
        assert_eq!(q.correct_label(), "second");
    }
}
