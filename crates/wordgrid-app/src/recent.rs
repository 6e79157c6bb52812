//! Recently searched words, most recent first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors from loading or saving recent searches.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the file failed.
    #[error("recent searches I/O: {0}")]
    Io(#[from] io::Error),
    /// The file is not a JSON list of strings.
    #[error("recent searches file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bounded list of recent search terms.
///
/// # Examples
///
/// ```
/// use wordgrid_app::RecentSearches;
///
/// let mut recent = RecentSearches::in_memory(2);
/// recent.record("apple").unwrap();
/// recent.record("pear").unwrap();
/// recent.record("plum").unwrap();
///
/// assert_eq!(recent.iter().collect::<Vec<_>>(), ["plum", "pear"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearches {
    terms: Vec<String>,
    capacity: usize,
    path: Option<PathBuf>,
}

impl RecentSearches {
    /// Default number of terms kept.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// A store that is never persisted.
    #[must_use]
    pub const fn in_memory(capacity: usize) -> Self {
        Self {
            terms: Vec::new(),
            capacity,
            path: None,
        }
    }

    /// An empty store that saves to `path`, ignoring what is there now.
    pub fn empty_at(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            terms: Vec::new(),
            capacity,
            path: Some(path.into()),
        }
    }

    /// Open the store persisted at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, StoreError> {
        let path = path.into();
        let mut terms: Vec<String> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        terms.truncate(capacity);
        debug!(path = %path.display(), count = terms.len(), "opened recent searches");

        Ok(Self {
            terms,
            capacity,
            path: Some(path),
        })
    }

    /// Record a search.
    ///
    /// Blank input is ignored. An earlier entry differing only in case is
    /// replaced, and the oldest entry is evicted past capacity.
    pub fn record(&mut self, term: &str) -> Result<(), StoreError> {
        let term = term.trim();
        if term.is_empty() || self.capacity == 0 {
            return Ok(());
        }

        let lowered = term.to_lowercase();
        self.terms.retain(|t| t.to_lowercase() != lowered);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.capacity);

        self.save()
    }

    /// Forget every term.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.terms.clear();
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec(&self.terms)?)?;
        debug!(path = %path.display(), count = self.terms.len(), "saved recent searches");
        Ok(())
    }

    /// Term at `index`, 0 being the most recent.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Terms from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of terms kept.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if no term has been recorded.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Maximum number of terms kept.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Backing file, if persisted.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::in_memory(Self::DEFAULT_CAPACITY)
    }
}
