//! Deterministic synthetic corpus for review training.
//!
//! Regenerating with the same size always reproduces byte-identical
//! documents; nothing here reads the clock or a random source.

pub mod corpus;
pub mod generator;
pub mod hash;
pub mod pools;

pub use corpus::{Corpus, Facets};
pub use generator::{DEFAULT_CORPUS_SIZE, generate_document, generate_documents};
pub use hash::fnv1a_32;
