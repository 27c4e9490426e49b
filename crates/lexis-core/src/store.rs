//! Flat-file JSON persistence.
//!
//! ```text
//! <data_dir>/
//! ├── global.json        # shared pool, no learned state
//! └── users/
//!     └── <name>.json    # one vocabulary per user
//! ```
//!
//! Every write replaces the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn global_path(&self) -> PathBuf {
        self.root.join("global.json")
    }

    pub fn user_path(&self, name: &str) -> PathBuf {
        self.root
            .join("users")
            .join(format!("{}.json", file_safe_name(name)))
    }
}

/// Map a user name onto a file stem, one stem per name.
///
/// Lowercase ASCII letters, digits and `-_.~` stay as they are. Everything
/// else, ASCII capitals included, becomes `%XX` escapes of its UTF-8 bytes, so
/// names differing only in case stay apart on case-insensitive filesystems.
/// The empty name maps to a lone `%`, which no other name produces.
pub fn file_safe_name(name: &str) -> String {
    if name.is_empty() {
        return "%".to_string();
    }

    let mut stem = String::with_capacity(name.len());
    let mut buf = [0u8; 4];
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            stem.push_str(&format!("%{:02X}", c as u8));
        } else {
            stem.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    stem
}

/// Read a record array. A missing file is `Ok(None)`.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)?;

    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::word::Word;

    #[test]
    fn user_names_become_safe_file_stems() {
        assert_eq!(file_safe_name("ana"), "ana");
        assert_eq!(file_safe_name("ana-maria_2.x~"), "ana-maria_2.x~");
        assert_eq!(file_safe_name("Ana"), "%41na");
        assert_eq!(file_safe_name("../etc/passwd"), "..%2Fetc%2Fpasswd");
        assert_eq!(file_safe_name("josé"), "jos%C3%A9");
        assert_eq!(file_safe_name("100%"), "100%25");
        assert_eq!(file_safe_name(""), "%");
    }

    #[test]
    fn distinct_names_get_distinct_stems() {
        let names = [
            "josé", "josè", "jos_", "jos%C3%A9", "Jose", "jose", "JOSE", "", "%", "_", "a b",
            "a+b", "a/b", "a\\b",
        ];

        let stems: std::collections::HashSet<String> =
            names.iter().map(|name| file_safe_name(name)).collect();
        assert_eq!(stems.len(), names.len());

        let folded: std::collections::HashSet<String> =
            stems.iter().map(|stem| stem.to_lowercase()).collect();
        assert_eq!(folded.len(), names.len(), "stems must differ ignoring case too");
    }

    #[test]
    fn layout_under_root() {
        let store = Store::new("/data");
        assert_eq!(store.global_path(), PathBuf::from("/data/global.json"));
        assert_eq!(store.user_path("ana"), PathBuf::from("/data/users/ana.json"));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let result: Option<Vec<Word>> = read_records(&dir.path().join("nope.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn garbage_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let result = read_records::<Word>(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users").join("ana.json");
        let words = vec![Word::new("gato", "cat", "animals")];

        write_records(&path, &words).unwrap();

        let loaded: Vec<Word> = read_records(&path).unwrap().unwrap();
        assert_eq!(loaded, words);
    }

    #[test]
    fn write_into_a_file_path_fails_with_io() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("users");
        fs::write(&blocker, "").unwrap();

        let result = write_records(&blocker.join("ana.json"), &[Word::new("a", "b", "c")]);
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
