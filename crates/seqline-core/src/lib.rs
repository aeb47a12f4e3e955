//! Seqline Core Types and Definitions
//!
//! This crate provides the foundational types for Seqline sequence diagrams:
//!
//! - **Identifiers**: String-interned actor identifiers ([`identifier::Id`])
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Draw**: Drawable primitives rendered to SVG layers ([`draw`] module)
//! - **Semantic**: The sequence model built by callers before layout ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod semantic;
