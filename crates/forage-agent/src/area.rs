use forage_core::{NodeId, ResourceNode, Vec3};

/// The resource nodes of one environment instance.
///
/// Node order is stable; selection ties resolve to the earlier node.
#[derive(Debug, Clone, Default)]
pub struct ResourceArea {
    pub center: Vec3,
    nodes: Vec<ResourceNode>,
}

impl ResourceArea {
    pub fn new(center: Vec3, nodes: Vec<ResourceNode>) -> Self {
        Self { center, nodes }
    }

    pub fn nodes(&self) -> &[ResourceNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [ResourceNode] {
        &mut self.nodes
    }

    pub fn get(&self, id: NodeId) -> Option<&ResourceNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ResourceNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes that still have resource.
    pub fn available(&self) -> usize {
        self.nodes.iter().filter(|n| n.has_resource()).count()
    }

    pub fn reset_all(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
    }
}
