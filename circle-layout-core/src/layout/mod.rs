// Circle layout for a node hierarchy.
//
// Goals:
// - Deterministic: no randomness, same tree gives the same layout
// - Deepest-first: pack children, then treat the enclosing circle as the
//   parent's content
// - No overlap between siblings, at least `padding * 2` edge to edge
// - Every child circle lies inside its parent circle
//
// Submodules:
// - siblings: front-chain placement of one set of siblings
// - enclose: smallest enclosing circle
// - separate: pairwise separation sweeps
// - pack: the packing pipeline built from the three above
// - radius: default radius from label width and child count
//
// Output:
// - LayoutResult with local (relative to parent center) and world circles.

use std::collections::HashMap;

use crate::geometry::{Circle, Vector};
use crate::tree::{NodeId, Tree};

mod enclose;
mod pack;
mod radius;
mod separate;
mod siblings;

pub use enclose::enclose;
pub use pack::{pack, pack_radii, Packing};
pub use radius::{
    calculate_default_radius, calculate_default_radius_with, LabeledNode, NodeMetrics,
    RadiusConfig,
};
pub use separate::separate_overlaps;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Gap kept around every circle when packing siblings.
    pub padding: f64,
    pub radius: RadiusConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 1.0,
            radius: RadiusConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutResult {
    /// Circles relative to the parent's center. The root is at the origin.
    pub local: HashMap<NodeId, Circle>,
    /// Circles in world coordinates (after accumulation).
    pub world: HashMap<NodeId, Circle>,
}

pub fn layout_tree(tree: &Tree, cfg: &LayoutConfig) -> LayoutResult {
    let mut local: HashMap<NodeId, Circle> = HashMap::new();

    // First pass: children before parents, so each parent can be sized around
    // its packed children.
    for nid in tree.post_order() {
        let node = tree.node(nid);
        let default_radius = calculate_default_radius_with(node, &cfg.radius);

        let children = node.visible_children();
        if children.is_empty() {
            local.insert(nid, Circle::new(default_radius));
            continue;
        }

        let mut packed: Vec<Circle> = children
            .iter()
            .map(|cid| Circle::new(local.get(cid).map_or(0.0, |c| c.r)))
            .collect();
        let enclosing = pack(&mut packed, cfg.padding);

        // Child centers are stored relative to the parent's center.
        let origin = enclosing.center();
        for (&cid, mut circle) in children.iter().zip(packed) {
            circle.set_center(circle.center() - origin);
            local.insert(cid, circle);
        }
        local.insert(nid, Circle::new(default_radius.max(enclosing.r)));
    }

    // Second pass: parents before children, accumulating world centers.
    let mut world: HashMap<NodeId, Circle> = HashMap::new();
    for nid in tree.pre_order() {
        let node = tree.node(nid);
        let own = local.get(&nid).copied().unwrap_or_default();
        let parent_center = node
            .parent
            .and_then(|p| world.get(&p))
            .map_or(Vector::ZERO, |p| p.center());

        let mut placed = own;
        placed.set_center(parent_center + own.center());
        world.insert(nid, placed);
    }

    LayoutResult { local, world }
}
