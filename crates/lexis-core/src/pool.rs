use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::VocabError;
use crate::store;
use crate::user::UserVocabulary;
use crate::word::{Word, term_key};

/// A pool entry. Learned state is per user and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalRecord {
    pub term: String,
    pub translation: String,
    pub category: String,
}

impl GlobalRecord {
    pub fn describe(&self) -> String {
        format!("{} - {} ({})", self.term, self.translation, self.category)
    }

    /// Fresh, unlearned copy for a user's vocabulary
    pub fn to_word(&self) -> Word {
        Word::new(&self.term, &self.translation, &self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub records: Vec<GlobalRecord>,
}

/// Cross-user registry of every term anyone has added
#[derive(Debug)]
pub struct GlobalPool {
    records: Vec<GlobalRecord>,
    /// Lowercased terms of `records`
    keys: HashSet<String>,
    path: PathBuf,
}

impl GlobalPool {
    /// Records are kept exactly as stored, including case variants left by older files.
    pub fn load(path: PathBuf) -> Self {
        let records = match store::read_records::<GlobalRecord>(&path) {
            Ok(Some(records)) => {
                tracing::debug!("Loaded {} global records", records.len());
                records
            }
            Ok(None) => {
                tracing::debug!("No global pool at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Could not load global pool: {}. Starting empty", e);
                Vec::new()
            }
        };

        let keys = records.iter().map(|r| term_key(&r.term)).collect();

        Self {
            records,
            keys,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[GlobalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.keys.contains(&term_key(term))
    }

    /// Returns whether a record was appended
    pub fn add_if_new(
        &mut self,
        term: &str,
        translation: &str,
        category: &str,
    ) -> Result<bool, VocabError> {
        if !self.keys.insert(term_key(term)) {
            tracing::debug!("'{}' already in the global pool", term);
            return Ok(false);
        }

        self.records.push(GlobalRecord {
            term: term.to_string(),
            translation: translation.to_string(),
            category: category.to_string(),
        });
        tracing::info!("Added '{}' to the global pool", term);

        store::write_records(&self.path, &self.records).map_err(|e| {
            tracing::error!("Failed to save global pool: {}", e);
            VocabError::from(e)
        })?;
        Ok(true)
    }

    /// One line per distinct term in first-seen order. Distinctness here is
    /// exact string equality, unlike the case-insensitive check on insertion.
    pub fn list_all(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.term.as_str()))
            .map(GlobalRecord::describe)
            .collect()
    }

    /// Categories in lexicographic order, records in each sorted by term
    pub fn list_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: BTreeMap<&str, Vec<GlobalRecord>> = BTreeMap::new();
        for record in &self.records {
            groups
                .entry(record.category.as_str())
                .or_default()
                .push(record.clone());
        }

        groups
            .into_iter()
            .map(|(category, mut records)| {
                records.sort_by(|a, b| a.term.cmp(&b.term));
                CategoryGroup {
                    category: category.to_string(),
                    records,
                }
            })
            .collect()
    }

    /// Add every pool term the user lacks. Returns the copied terms in pool order.
    pub fn copy_into(&self, user: &mut UserVocabulary) -> Vec<String> {
        let mut copied = Vec::new();

        for record in &self.records {
            if user.contains(&record.term) {
                continue;
            }

            match user.add(record.to_word()) {
                Ok(()) => copied.push(record.term.clone()),
                Err(e) if e.is_applied() => {
                    tracing::warn!("Copied '{}' but it was not saved: {}", record.term, e);
                    copied.push(record.term.clone());
                }
                Err(e) => tracing::warn!("Skipped '{}': {}", record.term, e),
            }
        }

        tracing::info!(
            "Copied {} global words into {}",
            copied.len(),
            user.owner_name()
        );
        copied
    }
}
