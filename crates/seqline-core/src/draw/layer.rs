//! Layer-based rendering for SVG output.
//!
//! Drawables tag each SVG node with a [`RenderLayer`]; [`LayeredOutput`]
//! groups the nodes per layer and emits the layers bottom to top.
//!
//! ```
//! # use seqline_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Rectangle};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Step, Box::new(Line::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! // Background renders first even though it was added last.
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of a sequence diagram.
///
/// The `Ord` derive follows declaration order: the first variant is drawn
/// first (bottom), the last variant is drawn last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill
    Background,
    /// Actor lifelines and their name labels
    Lifeline,
    /// Section boxes and section labels
    Section,
    /// Step arrows, self-call dots and descriptions
    Step,
}

impl RenderLayer {
    /// Returns the name used in the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Lifeline => "actors",
            Self::Section => "sections",
            Self::Step => "steps",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Within a layer nodes keep their insertion order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes of `other`, keeping their layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Empty
    /// layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
