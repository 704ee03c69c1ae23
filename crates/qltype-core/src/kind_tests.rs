use crate::DataKind;

#[test]
fn from_i32_valid() {
    assert_eq!(DataKind::from_i32(1), Some(DataKind::Int8));
    assert_eq!(DataKind::from_i32(5), Some(DataKind::String));
    assert_eq!(DataKind::from_i32(14), Some(DataKind::List));
    assert_eq!(DataKind::from_i32(15), Some(DataKind::Map));
    assert_eq!(DataKind::from_i32(16), Some(DataKind::Set));
    assert_eq!(DataKind::from_i32(18), Some(DataKind::Timeuuid));
    assert_eq!(DataKind::from_i32(21), Some(DataKind::UserDefinedType));
    assert_eq!(DataKind::from_i32(22), Some(DataKind::Frozen));
    assert_eq!(DataKind::from_i32(25), Some(DataKind::Jsonb));
}

#[test]
fn from_i32_invalid() {
    // NULL_VALUE_TYPE, TUPLE, TYPEARGS and internal kinds are not descriptors.
    for v in [-1, 0, 19, 20, 26, 100, 999] {
        assert_eq!(DataKind::from_i32(v), None, "{v}");
    }
}

#[test]
fn discriminants_round_trip() {
    for v in 0..=30 {
        if let Some(kind) = DataKind::from_i32(v) {
            assert_eq!(kind.as_i32(), v);
        }
    }
}

#[test]
fn primitives_are_exactly_the_leaf_scalars() {
    for kind in DataKind::PRIMITIVES {
        assert!(kind.is_primitive(), "{kind}");
        assert!(!kind.is_parametric(), "{kind}");
        assert!(!kind.is_user_defined(), "{kind}");
    }
    for kind in [
        DataKind::List,
        DataKind::Set,
        DataKind::Map,
        DataKind::Frozen,
        DataKind::UserDefinedType,
    ] {
        assert!(!kind.is_primitive(), "{kind}");
    }
}

#[test]
fn is_collection() {
    assert!(DataKind::List.is_collection());
    assert!(DataKind::Set.is_collection());
    assert!(DataKind::Map.is_collection());
    assert!(!DataKind::Frozen.is_collection());
    assert!(!DataKind::UserDefinedType.is_collection());
    assert!(!DataKind::Int32.is_collection());
}

#[test]
fn is_parametric() {
    assert!(DataKind::Frozen.is_parametric());
    assert!(DataKind::Map.is_parametric());
    assert!(!DataKind::UserDefinedType.is_parametric());
    assert!(!DataKind::Uuid.is_parametric());
}

#[test]
fn cql_names_resolve_back() {
    for kind in DataKind::PRIMITIVES
        .into_iter()
        .chain([DataKind::List, DataKind::Set, DataKind::Map, DataKind::Frozen])
    {
        let name = kind.cql_name().unwrap();
        assert_eq!(DataKind::from_cql_name(name), Some(kind), "{name}");
    }
    assert_eq!(DataKind::UserDefinedType.cql_name(), None);
}

#[test]
fn cql_aliases() {
    assert_eq!(DataKind::from_cql_name("VARCHAR"), Some(DataKind::String));
    assert_eq!(DataKind::from_cql_name("integer"), Some(DataKind::Int32));
    assert_eq!(DataKind::from_cql_name("bool"), Some(DataKind::Bool));
    assert_eq!(DataKind::from_cql_name("binary"), Some(DataKind::Binary));
    assert_eq!(DataKind::from_cql_name("address"), None);
}

#[test]
fn wire_names() {
    assert_eq!(DataKind::UserDefinedType.wire_name(), "USER_DEFINED_TYPE");
    assert_eq!(DataKind::Timeuuid.to_string(), "TIMEUUID");
    assert_eq!(DataKind::Binary.to_string(), "BINARY");
}
