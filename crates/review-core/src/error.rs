use thiserror::Error;

use review_model::{DocId, ModelError};
use review_output::ExportError;
use review_store::StoreError;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("document {0} is not in the corpus")]
    UnknownDocument(DocId),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ReviewError {
    /// Message suitable for showing to the reviewer.
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(error) => error.user_message(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;
