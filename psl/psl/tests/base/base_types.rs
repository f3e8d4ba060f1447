use crate::common::*;
use psl::parser_database::ScalarType;

#[test]
fn parse_scalar_types() {
    let dml = indoc! {r#"
        model User {
          id         Int      @id
          age        BigInt
          firstName  String
          isPro      Boolean
          balance    Decimal
          averageAge Float
          createdAt  DateTime
          json       Json
          data       Bytes
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    user.assert_has_scalar_field("id").assert_scalar_type(ScalarType::Int);
    user.assert_has_scalar_field("age").assert_scalar_type(ScalarType::BigInt);
    user.assert_has_scalar_field("firstName").assert_scalar_type(ScalarType::String);
    user.assert_has_scalar_field("isPro").assert_scalar_type(ScalarType::Boolean);
    user.assert_has_scalar_field("balance").assert_scalar_type(ScalarType::Decimal);
    user.assert_has_scalar_field("averageAge").assert_scalar_type(ScalarType::Float);
    user.assert_has_scalar_field("createdAt").assert_scalar_type(ScalarType::DateTime);
    user.assert_has_scalar_field("json").assert_scalar_type(ScalarType::Json);
    user.assert_has_scalar_field("data").assert_scalar_type(ScalarType::Bytes);
}

#[test]
fn parse_field_arities() {
    let dml = indoc! {r#"
        model Post {
          id       Int      @id
          text     String
          subtitle String?
          tags     String[]
        }
    "#};

    let schema = parse_schema(dml);
    let post = schema.assert_has_model("Post");

    assert!(post.assert_has_scalar_field("text").is_required());
    assert!(post.assert_has_scalar_field("subtitle").is_optional());
    assert!(post.assert_has_scalar_field("tags").is_list());
}

#[test]
fn optional_list_fields_are_rejected() {
    let dml = indoc! {r#"
        model Post {
          id   Int       @id
          tags String[]?
        }
    "#};

    parse_error(dml).assert_is_message("Optional lists are not supported. Use either `Type[]` or `Type?`.");
}

#[test]
fn legacy_colon_syntax_is_rejected_with_guidance() {
    let dml = indoc! {r#"
        model Post {
          id: Int @id
        }
    "#};

    parse_error(dml).assert_is_message_at(0, "Field declarations don't require a `:`.");
}
