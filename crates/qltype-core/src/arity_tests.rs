use crate::{DataKind, ParamArity};

#[test]
fn counts() {
    assert_eq!(ParamArity::Nullary.count(), 0);
    assert_eq!(ParamArity::Unary.count(), 1);
    assert_eq!(ParamArity::Binary.count(), 2);
}

#[test]
fn accepts_only_exact_count() {
    assert!(ParamArity::Nullary.accepts(0));
    assert!(!ParamArity::Nullary.accepts(1));
    assert!(ParamArity::Unary.accepts(1));
    assert!(!ParamArity::Unary.accepts(0));
    assert!(!ParamArity::Unary.accepts(2));
    assert!(ParamArity::Binary.accepts(2));
    assert!(!ParamArity::Binary.accepts(1));
    assert!(!ParamArity::Binary.accepts(3));
}

#[test]
fn is_leaf() {
    assert!(ParamArity::Nullary.is_leaf());
    assert!(!ParamArity::Unary.is_leaf());
    assert!(!ParamArity::Binary.is_leaf());
}

#[test]
fn kind_arities() {
    for kind in DataKind::PRIMITIVES {
        assert_eq!(kind.arity(), ParamArity::Nullary, "{kind}");
    }
    assert_eq!(DataKind::UserDefinedType.arity(), ParamArity::Nullary);
    assert_eq!(DataKind::List.arity(), ParamArity::Unary);
    assert_eq!(DataKind::Set.arity(), ParamArity::Unary);
    assert_eq!(DataKind::Frozen.arity(), ParamArity::Unary);
    assert_eq!(DataKind::Map.arity(), ParamArity::Binary);
}
