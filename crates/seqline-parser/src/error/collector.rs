//! Collector for accumulating diagnostics over a whole input.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so a parse can report every problem instead of
/// stopping at the first one.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic; an error makes [`finish`](Self::finish) fail.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `Err` with all diagnostics if any error was emitted.
    ///
    /// On success, warnings are written to the log.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            warn!(diagnostic:% = diagnostic; "Input warning");
        }
        Ok(())
    }
}
