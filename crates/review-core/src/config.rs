//! Session configuration.
//!
//! Precedence for the store directory: explicit value, then the
//! `DOC_REVIEW_HOME` environment variable, then `./.doc-review`.

use std::path::PathBuf;

use review_corpus::DEFAULT_CORPUS_SIZE;

use crate::display::DateStyle;

/// Environment variable for overriding the store directory.
pub const STORE_DIR_ENV_VAR: &str = "DOC_REVIEW_HOME";

/// Store directory used when nothing else is configured.
pub const DEFAULT_STORE_DIR: &str = ".doc-review";

/// Get the default store directory.
///
/// Checks the `DOC_REVIEW_HOME` environment variable first, then falls back
/// to `.doc-review` in the working directory.
pub fn default_store_dir() -> PathBuf {
    store_dir_from(std::env::var(STORE_DIR_ENV_VAR).ok())
}

fn store_dir_from(env_value: Option<String>) -> PathBuf {
    env_value
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Number of documents to generate.
    pub corpus_size: usize,
    /// Directory holding the coding store.
    pub store_dir: PathBuf,
    /// How dates are displayed.
    pub date_style: DateStyle,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            corpus_size: DEFAULT_CORPUS_SIZE,
            store_dir: default_store_dir(),
            date_style: DateStyle::default(),
        }
    }
}

impl ReviewConfig {
    #[must_use]
    pub fn with_corpus_size(mut self, size: usize) -> Self {
        self.corpus_size = size;
        self
    }

    #[must_use]
    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = style;
        self
    }
}
