//! Writing a resolved [`Layout`] out in a concrete format.
//!
//! The only backend is [`svg`]. Failures are reported as [`Error`] and
//! surface as [`SeqlineError::Export`] from the builder API.
//!
//! [`SeqlineError::Export`]: crate::SeqlineError::Export

/// SVG export backend.
pub mod svg;

use crate::layout::Layout;

/// An output backend for resolved layouts.
pub trait Exporter {
    /// Writes `layout` in the backend's output format.
    ///
    /// # Errors
    ///
    /// [`Error::Render`] when the layout has no representation in the
    /// format, [`Error::Io`] when the writer fails.
    fn export_layout(&mut self, layout: &Layout) -> Result<(), Error>;
}

/// Export failure.
#[derive(Debug)]
pub enum Error {
    /// The document could not be produced.
    Render(String),
    /// Writing the document failed.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
