//! Error types for Seqline operations.
//!
//! [`SeqlineError`] wraps every error condition of the pipeline.

use std::io;

use thiserror::Error;

use seqline_parser::error::ParseError;

use crate::layout::LayoutError;

/// The main error type for Seqline operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics, so callers can render snippets for each of them.
#[derive(Debug, Error)]
pub enum SeqlineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SeqlineError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SeqlineError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
