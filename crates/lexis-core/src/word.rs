use std::fmt;

use serde::{Deserialize, Serialize};

/// A single vocabulary entry. Also the on-disk schema of a user store record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Word {
    /// Original-language form, unique per vocabulary ignoring case
    pub term: String,
    pub translation: String,
    pub category: String,
    pub learned: bool,
}

impl Word {
    pub fn new(
        term: impl Into<String>,
        translation: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            category: category.into(),
            learned: false,
        }
    }

    pub fn mark_learned(&mut self) {
        self.learned = true;
    }

    pub fn describe(&self) -> String {
        let status = if self.learned { "Learned" } else { "Not learned" };
        format!("{} - {} ({})", self.term, self.translation, status)
    }

    pub fn matches_term(&self, term: &str) -> bool {
        term_key(&self.term) == term_key(term)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Case-insensitive identity of a term
pub(crate) fn term_key(term: &str) -> String {
    term.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_is_not_learned() {
        let word = Word::new("gato", "cat", "animals");
        assert!(!word.learned);
        assert_eq!(word.describe(), "gato - cat (Not learned)");
    }

    #[test]
    fn mark_learned_is_idempotent() {
        let mut word = Word::new("gato", "cat", "animals");
        word.mark_learned();
        word.mark_learned();
        assert!(word.learned);
        assert_eq!(word.to_string(), "gato - cat (Learned)");
    }

    #[test]
    fn term_match_ignores_case() {
        let word = Word::new("Árbol", "tree", "nature");
        assert!(word.matches_term("árbol"));
        assert!(word.matches_term("ÁRBOL"));
        assert!(!word.matches_term("arbol"));
    }

    #[test]
    fn schema_requires_all_four_fields() {
        let missing = r#"{"term":"gato","translation":"cat","category":"animals"}"#;
        assert!(serde_json::from_str::<Word>(missing).is_err());

        let extra = r#"{"term":"gato","translation":"cat","category":"animals","learned":false,"notes":""}"#;
        assert!(serde_json::from_str::<Word>(extra).is_err());

        let wrong_type = r#"{"term":"gato","translation":"cat","category":"animals","learned":"yes"}"#;
        assert!(serde_json::from_str::<Word>(wrong_type).is_err());
    }
}
