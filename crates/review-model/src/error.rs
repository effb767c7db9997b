use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid document id: {0:?} (expected DOC-####)")]
    InvalidDocId(String),
    #[error("unknown {kind}: {value}")]
    UnknownCode { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
