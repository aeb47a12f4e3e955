//! Error codes for input-file diagnostics.
//!
//! - `E0xx` - Line structure errors
//! - `E1xx` - Directive errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Line Errors (E0xx)
    // =========================================================================
    /// Unreadable line.
    ///
    /// The line could not be split into a directive, a setting or a comment.
    E001,

    // =========================================================================
    // Directive Errors (E1xx)
    // =========================================================================
    /// Unknown directive.
    ///
    /// A line starts with `@` but the word is not `@actors`, `@start`,
    /// `@end` or `@step`.
    E100,

    /// Missing step endpoints.
    ///
    /// `@step` needs at least a source and a target actor.
    E101,

    /// Missing section name.
    ///
    /// `@start` needs a section name.
    E102,

    /// Invalid color.
    ///
    /// A color value is not a valid CSS color. Reported as a warning; the
    /// default color is used instead.
    E103,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unreadable line",
            ErrorCode::E100 => "unknown directive",
            ErrorCode::E101 => "not enough values for step",
            ErrorCode::E102 => "section needs a name",
            ErrorCode::E103 => "invalid color",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E103.to_string(), "E103");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "unknown directive");
        assert_eq!(ErrorCode::E101.description(), "not enough values for step");
        assert_eq!(ErrorCode::E102.description(), "section needs a name");
    }
}
