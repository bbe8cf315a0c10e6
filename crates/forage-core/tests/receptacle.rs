use forage_core::{Category, DepositOutcome, NodeId, Receptacle, ReceptacleId, Token, Vec3};

#[test]
fn matching_tokens_stack_in_order() {
    let mut r = Receptacle::new(ReceptacleId(0), Category(5), Vec3::ZERO).with_spacing(0.02);

    assert_eq!(
        r.deposit(Token::new(Category(5), NodeId(1))),
        DepositOutcome::Accepted { stack_height: 1 }
    );
    assert_eq!(
        r.deposit(Token::new(Category(5), NodeId(2))),
        DepositOutcome::Accepted { stack_height: 2 }
    );

    let sources: Vec<NodeId> = r.stack().iter().map(|t| t.source).collect();
    assert_eq!(sources, vec![NodeId(1), NodeId(2)]);
    assert_eq!(r.top().map(|t| t.source), Some(NodeId(2)));
    assert!((r.drop_point().y - 0.04).abs() < 1e-6);
}

#[test]
fn mismatched_token_is_discarded() {
    let mut r = Receptacle::new(ReceptacleId(0), Category(5), Vec3::ZERO);
    assert_eq!(
        r.deposit(Token::new(Category(6), NodeId(1))),
        DepositOutcome::Rejected
    );
    assert!(r.stack().is_empty());
    assert_eq!(r.drop_point(), Vec3::ZERO);
}

#[test]
fn invalid_category_orders_before_valid_ones() {
    assert!(Category::INVALID < Category(0));
    assert!(!Category::INVALID.is_valid());
    assert_eq!(Category(3).ordinal(), Some(3));
    assert_eq!(Category::INVALID.ordinal(), None);
}
