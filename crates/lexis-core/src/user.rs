use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::VocabError;
use crate::store;
use crate::word::{Word, term_key};

/// Shown in place of an empty listing
pub const NO_WORDS_MESSAGE: &str = "No words yet.";

/// One user's ordered word list, flushed to its own store on every change
#[derive(Debug)]
pub struct UserVocabulary {
    owner_name: String,
    words: Vec<Word>,
    path: PathBuf,
}

impl UserVocabulary {
    /// Restore from `path`. Missing or unreadable stores start empty.
    pub fn load(owner_name: impl Into<String>, path: PathBuf) -> Self {
        let owner_name = owner_name.into();

        let words = match store::read_records::<Word>(&path) {
            Ok(Some(words)) => {
                tracing::debug!("Loaded {} words for {}", words.len(), owner_name);
                dedup_terms(&owner_name, words)
            }
            Ok(None) => {
                tracing::debug!("No saved vocabulary for {}, starting empty", owner_name);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Could not load vocabulary for {}: {}. Starting empty", owner_name, e);
                Vec::new()
            }
        };

        Self {
            owner_name,
            words,
            path,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    pub fn get(&self, term: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.matches_term(term))
    }

    pub fn add(&mut self, word: Word) -> Result<(), VocabError> {
        if self.contains(&word.term) {
            tracing::debug!("{} already has '{}'", self.owner_name, word.term);
            return Err(VocabError::DuplicateEntry { term: word.term });
        }

        tracing::info!("Added '{}' to {}", word.term, self.owner_name);
        self.words.push(word);
        self.save()
    }

    /// Descriptions in insertion order
    pub fn list(&self) -> Vec<String> {
        self.words.iter().map(Word::describe).collect()
    }

    pub fn clear(&mut self) -> Result<(), VocabError> {
        tracing::info!("Clearing {} words for {}", self.words.len(), self.owner_name);
        self.words.clear();
        self.save()
    }

    pub fn remove(&mut self, term: &str) -> Result<(), VocabError> {
        let index = self
            .words
            .iter()
            .position(|w| w.matches_term(term))
            .ok_or_else(|| VocabError::NotFound {
                term: term.to_string(),
            })?;

        let removed = self.words.remove(index);
        tracing::info!("Removed '{}' from {}", removed.term, self.owner_name);
        self.save()
    }

    pub fn learned_words(&self) -> Vec<&Word> {
        self.words.iter().filter(|w| w.learned).collect()
    }

    /// Flip a word to learned. Saves only when the flag actually changed.
    pub fn mark_learned(&mut self, term: &str) -> Result<(), VocabError> {
        let word = self
            .words
            .iter_mut()
            .find(|w| w.matches_term(term))
            .ok_or_else(|| VocabError::NotFound {
                term: term.to_string(),
            })?;

        if word.learned {
            return Ok(());
        }

        word.mark_learned();
        self.save()
    }

    /// (learned, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.learned_words().len(), self.words.len())
    }

    pub fn save(&self) -> Result<(), VocabError> {
        store::write_records(&self.path, &self.words).map_err(|e| {
            tracing::error!("Failed to save vocabulary for {}: {}", self.owner_name, e);
            VocabError::from(e)
        })
    }
}

/// Stores edited by hand can carry case variants of one term; the first wins
fn dedup_terms(owner_name: &str, words: Vec<Word>) -> Vec<Word> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|w| {
            let fresh = seen.insert(term_key(&w.term));
            if !fresh {
                tracing::warn!("Dropping duplicate '{}' from {}'s store", w.term, owner_name);
            }
            fresh
        })
        .collect()
}
