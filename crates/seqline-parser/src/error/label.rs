//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the source.
///
/// Primary labels mark the offending text; secondary labels add context,
/// such as the directive a bad value belongs to.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kinds() {
        let primary = Label::primary(Span::new(0..4), "here");
        let secondary = Label::secondary(Span::new(5..9), "context");

        assert!(primary.is_primary());
        assert!(!primary.is_secondary());
        assert!(secondary.is_secondary());
        assert_eq!(secondary.message(), "context");
        assert_eq!(secondary.span(), Span::new(5..9));
    }
}
