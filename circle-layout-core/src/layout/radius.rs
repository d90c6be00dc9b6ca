//! Default node radius derived from the node's label and structural role.

/// The two things node sizing needs to know about a node.
pub trait LabeledNode {
    /// Rendered width of the node's label, in pixels.
    fn label_display_width(&self) -> f64;

    /// Number of direct children in the full hierarchy (before any folding
    /// or filtering).
    fn child_count(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusConfig {
    /// Space between the label's ends and the circle.
    pub text_padding: f64,
    /// Smallest radius a node with children may have.
    pub minimum_radius: f64,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            text_padding: 5.0,
            minimum_radius: 40.0,
        }
    }
}

/// Plain label width and child count, for callers without a node type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeMetrics {
    pub label_width: f64,
    pub child_count: usize,
}

impl LabeledNode for NodeMetrics {
    fn label_display_width(&self) -> f64 {
        self.label_width
    }

    fn child_count(&self) -> usize {
        self.child_count
    }
}

/// Radius with the default text padding and minimum.
pub fn calculate_default_radius(node: &impl LabeledNode) -> f64 {
    calculate_default_radius_with(node, &RadiusConfig::default())
}

/// Leaves hug their label; any node with children (one child included) is at
/// least `cfg.minimum_radius`.
pub fn calculate_default_radius_with(node: &impl LabeledNode, cfg: &RadiusConfig) -> f64 {
    let text_radius = node.label_display_width() / 2.0 + cfg.text_padding;
    if node.child_count() == 0 {
        text_radius
    } else {
        text_radius.max(cfg.minimum_radius)
    }
}
