use indoc::indoc;

use super::check::{CheckArgs, verify};
use super::decode::{self, DecodeArgs, DecodeFormat};
use super::encode::{self, EncodeArgs, EncodeFormat};
use super::error::CommandError;

fn encode_as(type_text: &str, format: EncodeFormat) -> Result<String, CommandError> {
    encode::render(&EncodeArgs {
        type_text: type_text.to_string(),
        format,
    })
}

fn decode_as(hex: &str, format: DecodeFormat) -> Result<String, CommandError> {
    decode::render(&DecodeArgs {
        hex: hex.to_string(),
        format,
        color: false,
    })
}

#[test]
fn encode_hex() {
    assert_eq!(encode_as("uuid", EncodeFormat::Hex).unwrap(), "0811");
    assert_eq!(encode_as("list<tinyint>", EncodeFormat::Hex).unwrap(), "080e12020801");
    assert_eq!(
        encode_as("list<frozen<foo.bar>>", EncodeFormat::Hex).unwrap(),
        "080e12120816120e08151a0a0a03666f6f1203626172"
    );
}

#[test]
fn encode_message_shows_fields() {
    let out = encode_as("frozen<foo.bar>", EncodeFormat::Message).unwrap();
    assert!(out.contains("main"), "{out}");
    assert!(out.contains("udtype_info"), "{out}");
    assert!(out.contains("\"bar\""), "{out}");
}

#[test]
fn encode_json() {
    let out = encode_as("frozen<foo.bar>", EncodeFormat::Json).unwrap();
    insta::assert_snapshot!(out, @r#"
    {
      "kind": "FROZEN",
      "params": [
        {
          "kind": "USER_DEFINED_TYPE",
          "udt": {
            "namespace": "foo",
            "name": "bar"
          }
        }
      ]
    }
    "#);
}

#[test]
fn encode_rejects_bad_expression() {
    let err = encode_as("map<int>", EncodeFormat::Hex).unwrap_err();
    assert!(matches!(err, CommandError::Parse(_)));
    insta::assert_snapshot!(err.to_string(), @"invalid type expression: MAP takes 2 param(s), got 1 at 0..8");
}

#[test]
fn decode_cql() {
    assert_eq!(decode_as("080e12020801", DecodeFormat::Cql).unwrap(), "list<tinyint>");
    assert_eq!(
        decode_as(
            "080f120a08161206080e12020812120a0816120608101202080b",
            DecodeFormat::Cql
        )
        .unwrap(),
        "map<frozen<list<timeuuid>>, frozen<set<decimal>>>"
    );
}

#[test]
fn decode_tree() {
    let out = decode_as("08151a080a00120474657374", DecodeFormat::Tree).unwrap();
    assert_eq!(out, r#"USER_DEFINED_TYPE keyspace="" name="test""#);

    let out = decode_as("0x080e 1202 0801", DecodeFormat::Tree).unwrap();
    assert_eq!(
        out,
        indoc! {"
            LIST
              INT8"}
    );
}

#[test]
fn decode_tree_colored() {
    let out = decode::render(&DecodeArgs {
        hex: "0811".to_string(),
        format: DecodeFormat::Tree,
        color: true,
    })
    .unwrap();
    assert_eq!(out, "\x1b[34mUUID\x1b[0m");
}

#[test]
fn decode_json() {
    let out = decode_as("0811", DecodeFormat::Json).unwrap();
    insta::assert_snapshot!(out, @r#"
    {
      "kind": "UUID"
    }
    "#);
}

#[test]
fn decode_errors() {
    let err = decode_as("08g1", DecodeFormat::Cql).unwrap_err();
    assert!(matches!(err, CommandError::Input(_)));

    // USER_DEFINED_TYPE without udtype_info
    let err = decode_as("0815", DecodeFormat::Cql).unwrap_err();
    assert!(matches!(err, CommandError::Wire(_)));
    insta::assert_snapshot!(err.to_string(), @"invalid QLTypePB message: USER_DEFINED_TYPE is missing udtype_info");

    let err = decode_as("", DecodeFormat::Cql).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"hex cannot be empty");
}

#[test]
fn check_accepts_valid_types() {
    for text in [
        "int",
        "map<text, frozen<list<int>>>",
        "set<frozen<ks.\"Address\">>",
        "frozen<frozen<list<date>>>",
    ] {
        let args = CheckArgs {
            type_text: text.to_string(),
        };
        assert!(verify(&args).is_ok(), "{text}");
    }
}

#[test]
fn check_accepts_nesting_past_protobuf_default_limit() {
    let text = format!("{}int{}", "frozen<".repeat(150), ">".repeat(150));
    assert!(verify(&CheckArgs { type_text: text }).is_ok());
}

#[test]
fn check_rejects_runaway_nesting() {
    let text = format!("{}int{}", "frozen<".repeat(100_000), ">".repeat(100_000));
    let err = verify(&CheckArgs { type_text: text }).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid type expression: type nesting exceeds 256 levels at 1791..1792");
}

#[test]
fn check_rejects_invalid_types() {
    let args = CheckArgs {
        type_text: "list<,>".to_string(),
    };
    let err = verify(&args).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid type expression: expected type name, found ',' at 5..6");
}
