//! The core diagnostic type.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// ```text
/// error[E101]: not enough values for step at line 4
///   --> diagram.cfg:4:1
///    |
///  4 | @step Bob
///    | ^^^^^ `@step` needs a source and a target
///    |
///    = help: write `@step source, target[, description[, color]]`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E100]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_error() {
        let diag = Diagnostic::error("unreadable line 7");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "unreadable line 7");
        assert_eq!(diag.code(), None);
        assert_eq!(diag.labels().len(), 0);
        assert_eq!(diag.help(), None);
    }

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::warning("invalid color `blurple` at line 2")
            .with_code(ErrorCode::E103)
            .with_label(Span::new(20..27), "not a CSS color")
            .with_secondary_label(Span::new(0..6), "in this directive")
            .with_help("use a name like `red` or a hex value like `#ff0000`");

        assert_eq!(diag.code(), Some(ErrorCode::E103));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("bad").with_code(ErrorCode::E100);
        assert_eq!(with_code.to_string(), "error[E100]: bad");

        let warning = Diagnostic::warning("odd");
        assert_eq!(warning.to_string(), "warning: odd");
    }
}
