use forage_agent::TargetSelector;
use forage_core::{NodeId, ResourceNode, Vec3};

fn node(id: u32, x: f32) -> ResourceNode {
    ResourceNode::new(NodeId(id), Vec3::new(x, 0.0, 0.0), Vec3::UP)
}

#[test]
fn picks_nearest_node_with_resource() {
    let nodes = vec![node(0, 5.0), node(1, 1.0), node(2, 10.0)];
    let picked = TargetSelector::select_nearest(&nodes, Vec3::ZERO, None);
    assert_eq!(picked, Some(NodeId(1)));
}

#[test]
fn keeps_current_target_while_it_has_resource() {
    let nodes = vec![node(0, 5.0), node(1, 1.0), node(2, 10.0)];
    let picked = TargetSelector::select_nearest(&nodes, Vec3::ZERO, Some(NodeId(2)));
    assert_eq!(picked, Some(NodeId(2)));
}

#[test]
fn drained_current_target_is_replaced() {
    let mut nodes = vec![node(0, 5.0), node(1, 1.0), node(2, 10.0)];
    nodes[1].feed(1.0);
    assert!(!nodes[1].has_resource());

    let picked = TargetSelector::select_nearest(&nodes, Vec3::ZERO, Some(NodeId(1)));
    assert_eq!(picked, Some(NodeId(0)));
}

#[test]
fn unknown_current_target_falls_back_to_nearest() {
    let nodes = vec![node(0, 5.0), node(1, 1.0)];
    let picked = TargetSelector::select_nearest(&nodes, Vec3::ZERO, Some(NodeId(99)));
    assert_eq!(picked, Some(NodeId(1)));
}

#[test]
fn no_node_with_resource_yields_none() {
    let mut nodes = vec![node(0, 5.0), node(1, 1.0)];
    for n in nodes.iter_mut() {
        n.feed(1.0);
    }
    assert_eq!(TargetSelector::select_nearest(&nodes, Vec3::ZERO, None), None);
    assert_eq!(TargetSelector::select_nearest(&[], Vec3::ZERO, None), None);
}

#[test]
fn equal_distances_resolve_to_first_node() {
    let nodes = vec![node(4, -2.0), node(3, 2.0)];
    let picked = TargetSelector::select_nearest(&nodes, Vec3::ZERO, None);
    assert_eq!(picked, Some(NodeId(4)));
}
