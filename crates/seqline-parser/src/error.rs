//! Diagnostics reported while reading the input format.
//!
//! A [`Diagnostic`] is a single error or warning with an optional
//! [`ErrorCode`], labeled source spans and help text. All diagnostics of a
//! parse are returned together in a [`ParseError`], so a file with several
//! mistakes reports every one of them at once.
//!
//! ```
//! # use seqline_parser::error::{Diagnostic, ErrorCode};
//! # use seqline_parser::Span;
//! let diag = Diagnostic::error("unknown directive `@stpe` at line 3")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(24..29), "unknown directive")
//!     .with_help("expected one of `@actors`, `@start`, `@end`, `@step`");
//! assert_eq!(diag.to_string(), "error[E100]: unknown directive `@stpe` at line 3");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
