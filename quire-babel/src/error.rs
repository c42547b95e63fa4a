//! Errors raised while selecting a format or rendering a document

use quire_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
