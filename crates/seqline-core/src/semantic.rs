//! Sequence model types.
//!
//! The model is built incrementally by a caller (API user or the input-file
//! parser) and later resolved into concrete geometry by the layout crate.
//!
//! ```text
//! Input file / API calls
//!     ↓ set_actor_order, open_section, add_step, close_section
//! Sequence (these types) - actors, sequenced steps, section lifecycle
//!     ↓ layout
//! Resolved geometry
//!     ↓ export
//! SVG
//! ```
//!
//! # Organization
//!
//! - [`actors`] - Ordered actor registry
//! - [`step`] - Step requests and their sequencing records
//! - [`section`] - Section lifecycle
//! - [`sequence`] - The [`Sequence`] aggregate and its [`SequenceOptions`]
//! - [`constants`] - Fixed layout and rendering metrics

pub mod actors;
pub mod constants;
pub mod section;
pub mod sequence;
pub mod step;

pub use actors::ActorRegistry;
pub use section::{Section, SectionState};
pub use sequence::{Sequence, SequenceOptions};
pub use step::{Step, StepRequest};
