//! Review session core.
//!
//! Composes the generated corpus, the filter engine, the coding store and the
//! CSV exporter into a single [`ReviewSession`] that presentation layers
//! drive with commands and read back as observable state.

pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod session;
pub mod shortcuts;

pub use config::{DEFAULT_STORE_DIR, ReviewConfig, STORE_DIR_ENV_VAR, default_store_dir};
pub use display::{DateStyle, format_date, format_saved_at};
pub use error::{Result, ReviewError};
pub use filter::{filter_documents, filter_indices, matches};
pub use session::{ReviewSession, SessionStats, UNCODED_SUMMARY};
pub use shortcuts::{Focus, NEXT_KEY, NavCommand, PREV_KEY, shortcut};

use review_corpus::Corpus;
use review_store::{CodingStore, FileBlobStore};

/// Open a session over a freshly generated corpus, with coding persisted in
/// `config.store_dir`.
pub fn open_file_session(config: &ReviewConfig) -> ReviewSession<FileBlobStore> {
    let corpus = Corpus::generate(config.corpus_size);
    let store = CodingStore::open(FileBlobStore::new(&config.store_dir));
    ReviewSession::new(corpus, store)
}
