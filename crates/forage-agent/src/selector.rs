//! Nearest-resource target selection.

use forage_core::{NodeId, ResourceNode, Vec3};

/// Picks which resource node the agent should head for.
///
/// Selection is sticky: a current target that still has resource is kept even when a closer node
/// exists, so the agent does not oscillate between neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetSelector;

impl TargetSelector {
    pub fn select_nearest(
        nodes: &[ResourceNode],
        reference: Vec3,
        current: Option<NodeId>,
    ) -> Option<NodeId> {
        if let Some(id) = current {
            if nodes.iter().any(|n| n.id == id && n.has_resource()) {
                return Some(id);
            }
        }

        let mut best: Option<(NodeId, f32)> = None;
        for node in nodes.iter().filter(|n| n.has_resource()) {
            let d = node.position.distance(reference);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((node.id, d)),
            }
        }
        best.map(|(id, _)| id)
    }
}
