use std::collections::HashMap;
use std::sync::Arc;

use lexis_translator::{LanguageCode, Translator};
use rand::Rng;

use crate::error::VocabError;
use crate::pool::{CategoryGroup, GlobalPool};
use crate::store::Store;
use crate::user::UserVocabulary;
use crate::word::Word;

/// Shown when a translation could not be fetched
pub const NO_TRANSLATION_MESSAGE: &str = "No translation available.";

/// Outcome of starting a practice round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeRound {
    /// Terminal, nothing was selected
    NoWordsAvailable,
    AwaitingAnswer(Prompt),
}

/// The word a practice round is asking about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeOutcome {
    Correct,
    Incorrect { expected: String },
}

struct TranslatorHandle {
    provider: Arc<dyn Translator>,
    from: LanguageCode,
    to: LanguageCode,
}

/// Owns every loaded user vocabulary and the global pool for the process lifetime
pub struct VocabularySession {
    users: HashMap<String, UserVocabulary>,
    pool: GlobalPool,
    store: Store,
    translator: Option<TranslatorHandle>,
}

impl VocabularySession {
    pub fn open(store: Store) -> Self {
        let pool = GlobalPool::load(store.global_path());
        tracing::info!(
            "Session opened at {} with {} global words",
            store.root().display(),
            pool.len()
        );

        Self {
            users: HashMap::new(),
            pool,
            store,
            translator: None,
        }
    }

    pub fn with_translator(
        mut self,
        provider: Arc<dyn Translator>,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Self {
        self.translator = Some(TranslatorHandle { provider, from, to });
        self
    }

    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// The in-memory instance wins over the store once a name has been seen
    pub fn register_user(&mut self, name: &str) -> &mut UserVocabulary {
        let store = &self.store;
        self.users.entry(name.to_string()).or_insert_with(|| {
            let vocabulary = UserVocabulary::load(name, store.user_path(name));
            tracing::info!("Registered user {} with {} words", name, vocabulary.len());
            vocabulary
        })
    }

    pub fn user(&self, name: &str) -> Option<&UserVocabulary> {
        self.users.get(name)
    }

    pub fn user_names(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn pool(&self) -> &GlobalPool {
        &self.pool
    }

    fn vocabulary(&self, user: &str) -> Result<&UserVocabulary, VocabError> {
        self.users
            .get(user)
            .ok_or_else(|| VocabError::UnknownUser(user.to_string()))
    }

    fn vocabulary_mut(&mut self, user: &str) -> Result<&mut UserVocabulary, VocabError> {
        self.users
            .get_mut(user)
            .ok_or_else(|| VocabError::UnknownUser(user.to_string()))
    }

    /// Add to the user first, then offer the term to the global pool.
    ///
    /// A duplicate for the user never reaches the pool. Pool failures are
    /// logged and do not change the result.
    pub fn add_word(
        &mut self,
        user: &str,
        term: &str,
        translation: &str,
        category: &str,
    ) -> Result<(), VocabError> {
        let result = self
            .vocabulary_mut(user)?
            .add(Word::new(term, translation, category));

        if matches!(&result, Err(e) if !e.is_applied()) {
            return result;
        }

        if let Err(e) = self.pool.add_if_new(term, translation, category) {
            tracing::warn!("Global pool not updated with '{}': {}", term, e);
        }

        result
    }

    pub fn list_words(&self, user: &str) -> Result<Vec<String>, VocabError> {
        Ok(self.vocabulary(user)?.list())
    }

    pub fn learned_words(&self, user: &str) -> Result<Vec<String>, VocabError> {
        Ok(self
            .vocabulary(user)?
            .learned_words()
            .into_iter()
            .map(Word::describe)
            .collect())
    }

    pub fn clear(&mut self, user: &str) -> Result<(), VocabError> {
        self.vocabulary_mut(user)?.clear()
    }

    pub fn remove_word(&mut self, user: &str, term: &str) -> Result<(), VocabError> {
        self.vocabulary_mut(user)?.remove(term)
    }

    pub fn list_global(&self) -> Vec<String> {
        self.pool.list_all()
    }

    pub fn list_global_by_category(&self) -> Vec<CategoryGroup> {
        self.pool.list_by_category()
    }

    pub fn copy_global_to(&mut self, user: &str) -> Result<Vec<String>, VocabError> {
        let target = self
            .users
            .get_mut(user)
            .ok_or_else(|| VocabError::UnknownUser(user.to_string()))?;
        Ok(self.pool.copy_into(target))
    }

    /// Pick one word uniformly from the whole vocabulary, learned ones included
    pub fn start_practice(
        &self,
        user: &str,
        rng: &mut impl Rng,
    ) -> Result<PracticeRound, VocabError> {
        let words = self.vocabulary(user)?.words();
        if words.is_empty() {
            return Ok(PracticeRound::NoWordsAvailable);
        }

        let word = &words[rng.random_range(0..words.len())];
        tracing::debug!("Practicing '{}' with {}", word.term, user);

        Ok(PracticeRound::AwaitingAnswer(Prompt {
            term: word.term.clone(),
        }))
    }

    /// Compare ignoring case. A correct answer marks the word learned; a
    /// failed save is logged and still counts as correct.
    pub fn answer_practice(
        &mut self,
        user: &str,
        prompt: &Prompt,
        answer: &str,
    ) -> Result<PracticeOutcome, VocabError> {
        let vocabulary = self.vocabulary_mut(user)?;
        let expected = vocabulary
            .get(&prompt.term)
            .map(|w| w.translation.clone())
            .ok_or_else(|| VocabError::NotFound {
                term: prompt.term.clone(),
            })?;

        if answer.to_lowercase() != expected.to_lowercase() {
            return Ok(PracticeOutcome::Incorrect { expected });
        }

        if let Err(e) = vocabulary.mark_learned(&prompt.term) {
            tracing::warn!("'{}' learned but not saved: {}", prompt.term, e);
        }
        Ok(PracticeOutcome::Correct)
    }

    /// `None` when no provider is configured or the provider failed
    pub async fn translate(&self, term: &str) -> Option<String> {
        let Some(handle) = &self.translator else {
            tracing::warn!("No translation provider configured");
            return None;
        };

        match handle
            .provider
            .translate(term, handle.from.clone(), handle.to.clone())
            .await
        {
            Ok(translation) => {
                tracing::debug!("'{}' translated by {}", term, translation.provider);
                Some(translation.text)
            }
            Err(e) => {
                tracing::warn!(
                    "Translation of '{}' via {} failed: {}",
                    term,
                    handle.provider.metadata().name,
                    e
                );
                None
            }
        }
    }
}
