//! Configuration types for Seqline diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional; missing fields fall back to the
//! built-in defaults.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Lane distance, step height and section label orientation.
//! - [`StyleConfig`] - Canvas size and colors.
//!
//! Settings written in a diagram source override these values.
//!
//! # Example
//!
//! ```
//! # use seqline::config::AppConfig;
//! let config = AppConfig::default();
//! let options = config.sequence_options().expect("defaults are valid");
//! assert_eq!(options.distance(), 180);
//! assert_eq!(options.width(), "100%");
//! ```

use log::warn;
use serde::Deserialize;

use seqline_core::{
    color::Color,
    semantic::{
        SequenceOptions,
        constants::{DEFAULT_DISTANCE, DEFAULT_STEP_HEIGHT, MAX_DISTANCE, MAX_STEP_HEIGHT},
    },
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Builds the initial options of a sequence from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured default color cannot be parsed.
    pub fn sequence_options(&self) -> Result<SequenceOptions, String> {
        let mut options = SequenceOptions::default()
            .with_distance(self.layout.distance())
            .with_step_height(self.layout.step_height())
            .with_vertical_section_text(self.layout.vertical_section_text);

        if let Some(width) = &self.style.width {
            options = options.with_width(width.as_str());
        }
        if let Some(height) = &self.style.height {
            options = options.with_height(height.as_str());
        }
        if let Some(color) = self.style.default_color()? {
            options = options.with_default_color(color);
        }

        Ok(options)
    }
}

/// Geometry settings of the layout.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal distance between actor lanes.
    #[serde(default = "default_distance")]
    distance: u32,

    /// Base height of a single-line step.
    #[serde(default = "default_step_height")]
    step_height: u32,

    /// Write section names vertically along the left edge.
    #[serde(default)]
    vertical_section_text: bool,
}

fn default_distance() -> u32 {
    DEFAULT_DISTANCE
}

fn default_step_height() -> u32 {
    DEFAULT_STEP_HEIGHT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            step_height: DEFAULT_STEP_HEIGHT,
            vertical_section_text: false,
        }
    }
}

impl LayoutConfig {
    pub fn new(distance: u32, step_height: u32, vertical_section_text: bool) -> Self {
        Self {
            distance,
            step_height,
            vertical_section_text,
        }
    }

    /// Lane distance, or the default when the configured one is too large.
    pub fn distance(&self) -> u32 {
        bounded("distance", self.distance, DEFAULT_DISTANCE, MAX_DISTANCE)
    }

    /// Base step height, or the default when the configured one is too large.
    pub fn step_height(&self) -> u32 {
        bounded("step_height", self.step_height, DEFAULT_STEP_HEIGHT, MAX_STEP_HEIGHT)
    }

    pub fn vertical_section_text(&self) -> bool {
        self.vertical_section_text
    }
}

fn bounded(key: &str, value: u32, default: u32, max: u32) -> u32 {
    if value > max {
        warn!(key, value, max, default; "Layout setting too large, using default");
        default
    } else {
        value
    }
}

/// Visual styling configuration.
///
/// Colors are kept as strings and parsed on use, so an invalid color is
/// reported when the diagram is rendered.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// CSS width of the SVG element.
    #[serde(default)]
    width: Option<String>,

    /// CSS height of the SVG element.
    #[serde(default)]
    height: Option<String>,

    /// Color of steps and sections without an explicit color.
    #[serde(default)]
    default_color: Option<String>,

    /// Canvas background color.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    pub fn height(&self) -> Option<&str> {
        self.height.as_deref()
    }

    /// Returns the parsed default [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn default_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.default_color.as_deref(), "default color")
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.background_color.as_deref(), "background color")
    }
}

fn parse_color(value: Option<&str>, what: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {what} in config: {err}"))
}
