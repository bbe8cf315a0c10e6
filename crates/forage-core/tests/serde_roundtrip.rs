#![cfg(feature = "serde")]

use forage_core::{
    Category, Depiction, NodeId, Quat, Receptacle, ReceptacleId, ResourceNode, Sample, SampleShape,
    Token, Vec3,
};

#[test]
fn resource_node_json_roundtrip_keeps_remaining() {
    let depiction = Depiction::new(vec![Sample::filled(SampleShape::new(2, 2, 1), 0.25)]);
    let position = Vec3::new(1.0, 2.0, -3.0);
    let mut node =
        ResourceNode::new(NodeId(4), position, Vec3::new(0.0, 0.0, 2.0)).with_depiction(depiction);
    node.feed(0.3);

    let json = serde_json::to_string(&node).expect("serialize");
    let roundtrip: ResourceNode = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(roundtrip, node);
    assert_eq!(roundtrip.remaining(), node.remaining());
    assert_eq!(roundtrip.up_axis, Vec3::FORWARD);
}

#[test]
fn receptacle_json_roundtrip_keeps_stack_and_drop_point() {
    let mut receptacle = Receptacle::new(ReceptacleId(2), Category(3), Vec3::new(3.0, 0.0, 0.0))
        .with_spacing(0.02);
    receptacle.deposit(Token::new(Category(3), NodeId(1)));
    receptacle.deposit(Token::new(Category(3), NodeId(7)));

    let json = serde_json::to_string(&receptacle).expect("serialize");
    let roundtrip: Receptacle = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(roundtrip, receptacle);
    assert_eq!(roundtrip.stack().len(), 2);
    assert_eq!(roundtrip.top().map(|t| t.source), Some(NodeId(7)));
    assert_eq!(roundtrip.drop_point(), receptacle.drop_point());
}

#[test]
fn ids_and_categories_serialize_as_plain_numbers() {
    assert_eq!(serde_json::to_value(Category(3)).expect("serialize"), 3);
    assert_eq!(serde_json::to_value(Category::INVALID).expect("serialize"), -1);
    assert_eq!(serde_json::to_value(NodeId(8)).expect("serialize"), 8);

    let token: Token = serde_json::from_str(r#"{"category":1,"source":5}"#).expect("deserialize");
    assert_eq!(token, Token::new(Category(1), NodeId(5)));
}

#[test]
fn rotation_json_roundtrip() {
    let rotation = Quat::from_pitch_yaw_degrees(30.0, -45.0);
    let json = serde_json::to_string(&rotation).expect("serialize");
    let roundtrip: Quat = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, rotation);
}
