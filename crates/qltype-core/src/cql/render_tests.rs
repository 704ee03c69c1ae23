use crate::{TypeNode, parse_type};

fn udt(ns: &str, name: &str) -> TypeNode {
    TypeNode::user_defined(ns, name).unwrap()
}

#[test]
fn primitives_use_cql_keywords() {
    let rendered: Vec<String> = [
        TypeNode::INT8,
        TypeNode::INT16,
        TypeNode::INT32,
        TypeNode::INT64,
        TypeNode::STRING,
        TypeNode::BOOL,
        TypeNode::FLOAT,
        TypeNode::DOUBLE,
        TypeNode::BINARY,
        TypeNode::TIMESTAMP,
        TypeNode::DECIMAL,
        TypeNode::VARINT,
        TypeNode::INET,
        TypeNode::UUID,
        TypeNode::TIMEUUID,
        TypeNode::DATE,
        TypeNode::TIME,
        TypeNode::JSONB,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    insta::assert_snapshot!(rendered.join(" "), @"tinyint smallint int bigint text boolean float double blob timestamp decimal varint inet uuid timeuuid date time jsonb");
}

#[test]
fn parametric_types() {
    let t = TypeNode::map(
        TypeNode::frozen(TypeNode::list(TypeNode::TIMEUUID)),
        TypeNode::frozen(TypeNode::set(TypeNode::DECIMAL)),
    );
    assert_eq!(
        t.to_string(),
        "map<frozen<list<timeuuid>>, frozen<set<decimal>>>"
    );
}

#[test]
fn user_defined_types() {
    assert_eq!(udt("foo", "bar").to_string(), "foo.bar");
    assert_eq!(udt("", "test").to_string(), "test");
    assert_eq!(
        TypeNode::frozen(udt("foo", "bar")).to_string(),
        "frozen<foo.bar>"
    );
}

#[test]
fn identifiers_are_quoted_when_needed() {
    assert_eq!(udt("Ks", "address").to_string(), r#""Ks".address"#);
    assert_eq!(udt("", "text").to_string(), r#""text""#);
    assert_eq!(udt("", "1st").to_string(), r#""1st""#);
    assert_eq!(udt("", r#"a"b"#).to_string(), r#""a""b""#);
    assert_eq!(udt("", "with space").to_string(), r#""with space""#);
}

#[test]
fn rendered_text_parses_back() {
    let cases = [
        TypeNode::STRING,
        TypeNode::set(TypeNode::frozen(TypeNode::list(TypeNode::INT8))),
        TypeNode::list(TypeNode::frozen(TypeNode::set(TypeNode::UUID))),
        TypeNode::map(
            TypeNode::frozen(TypeNode::list(TypeNode::TIMEUUID)),
            TypeNode::frozen(TypeNode::set(TypeNode::DECIMAL)),
        ),
        TypeNode::list(TypeNode::frozen(udt("foo", "bar"))),
        TypeNode::frozen(TypeNode::frozen(udt("", "test"))),
        udt("MixedCase", r#"odd "name""#),
        udt("", "frozen"),
    ];
    for t in cases {
        let text = t.to_string();
        assert_eq!(parse_type(&text), Ok(t), "{text}");
    }
}
