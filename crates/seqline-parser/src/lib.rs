//! # Seqline Parser
//!
//! Reader for the line-oriented Seqline input format:
//!
//! ```text
//! # comments and blank lines are ignored
//! distance_between_actors = 200
//! width = 800px
//!
//! @actors Bob, Maria
//! @start Greeting, teal
//! @step Bob, Maria, Hello Maria!
//! @step Maria, Bob, Hi Bob!\nHow are you?, #aa3300
//! @end
//! ```
//!
//! ## Usage
//!
//! ```
//! # use seqline_parser::{parse, ParseError};
//! # use seqline_core::semantic::SequenceOptions;
//! fn main() -> Result<(), ParseError> {
//!     let source = "@step Bob, Maria, Hi\n@step Maria, Bob, Hello\n";
//!     let sequence = parse(source, SequenceOptions::default())?;
//!     assert_eq!(sequence.steps().len(), 2);
//!     Ok(())
//! }
//! ```

mod elaborate;
pub mod error;
mod lexer;
mod span;

pub use error::ParseError;
pub use span::{Span, Spanned};

use log::info;

use seqline_core::semantic::{Sequence, SequenceOptions};

use elaborate::Builder;

/// Parse source text into a sequence.
///
/// `options` are the starting display options; settings in the source
/// override them. Every line is checked before failing, so the returned
/// [`ParseError`] lists all problems in source order.
pub fn parse(source: &str, options: SequenceOptions) -> Result<Sequence, ParseError> {
    info!(bytes = source.len(); "Parsing sequence input");
    Builder::new(options, source).build()
}
