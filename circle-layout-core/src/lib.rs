//! Circle layout core for hierarchical graph visualizations.
//!
//! - [`geometry`] — vectors and circles.
//! - [`layout`] — sibling packing, enclosing circles, default radii and the
//!   bottom-up hierarchy layout built on them.
//! - [`tree`] — indexed node hierarchy built from the caller's description.
//! - [`output`] — JSON records returned to the renderer.

pub mod geometry;
pub mod layout;
pub mod output;
pub mod tree;
mod wasm;

pub use geometry::{Circle, Positioned, Vector};
pub use layout::{
    calculate_default_radius, calculate_default_radius_with, layout_tree, pack, pack_radii,
    LabeledNode, LayoutConfig, LayoutResult, NodeMetrics, Packing, RadiusConfig,
};
pub use tree::{build_tree, NodeId, NodeInput, Tree, TreeError, TreeNode};
pub use wasm::{default_radius, layout_hierarchy, pack_circles};
