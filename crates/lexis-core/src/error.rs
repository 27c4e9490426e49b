use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt store {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of vocabulary operations. None of them are fatal to a session.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// Nothing was changed
    #[error("'{term}' already exists")]
    DuplicateEntry { term: String },

    #[error("'{term}' not found")]
    NotFound { term: String },

    /// The in-memory change was applied but could not be written to disk
    #[error("change kept in memory but not saved: {0}")]
    Persistence(#[from] StoreError),

    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

impl VocabError {
    /// Whether the operation's in-memory effect took place despite the error
    pub fn is_applied(&self) -> bool {
        matches!(self, VocabError::Persistence(_))
    }
}
