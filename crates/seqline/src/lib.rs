//! Seqline - sequence diagrams rendered to SVG.
//!
//! A diagram is built either through the [`semantic::Sequence`] API or from
//! the line-oriented source format, resolved into a [`layout::Layout`] and
//! exported as an SVG document.
//!
//! ```text
//! source ──parse──▶ Sequence ──resolve──▶ Layout ──export──▶ SVG
//! ```

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use seqline_core::{color, draw, geometry, identifier, semantic};

pub use error::SeqlineError;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::Layout;
use semantic::Sequence;

/// Builder for parsing and rendering Seqline diagrams.
///
/// # Examples
///
/// ```rust
/// use seqline::{DiagramBuilder, config::AppConfig};
///
/// let source = "@step Bob, Maria, Hello\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let sequence = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&sequence).expect("Failed to render");
/// assert!(svg.contains(">Maria<"));
///
/// // Or use the default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a sequence.
    ///
    /// The configuration provides the initial options; settings in the
    /// source override them.
    ///
    /// # Errors
    ///
    /// Returns [`SeqlineError::Config`] for an invalid configured color and
    /// [`SeqlineError::Parse`] with every collected diagnostic for invalid
    /// source lines.
    pub fn parse(&self, source: &str) -> Result<Sequence, SeqlineError> {
        info!("Parsing sequence");

        let options = self
            .config
            .sequence_options()
            .map_err(SeqlineError::Config)?;

        let sequence = seqline_parser::parse(source, options)
            .map_err(|err| SeqlineError::new_parse_error(err, source))?;

        debug!(
            actors = sequence.actors().len(),
            steps = sequence.steps().len();
            "Sequence parsed successfully"
        );
        trace!(sequence:?; "Parsed sequence");

        Ok(sequence)
    }

    /// Resolve the geometry of a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SeqlineError::Layout`] if the sequence is incomplete or
    /// still has an open section.
    pub fn layout(&self, sequence: &Sequence) -> Result<Layout, SeqlineError> {
        Ok(Layout::resolve(sequence)?)
    }

    /// Render a sequence to an SVG string.
    ///
    /// Either a complete document is returned or an error; nothing is
    /// produced for a sequence that fails to resolve.
    ///
    /// # Errors
    ///
    /// Returns [`SeqlineError`] for layout or rendering errors.
    pub fn render_svg(&self, sequence: &Sequence) -> Result<String, SeqlineError> {
        let layout = self.layout(sequence)?;

        let mut buffer = Vec::new();
        let mut exporter = export::svg::SvgBuilder::new(&mut buffer)
            .with_style(self.config.style())
            .build()?;
        exporter.export_layout(&layout)?;

        let svg = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(err.to_string()))?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
