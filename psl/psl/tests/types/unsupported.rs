use crate::common::*;

#[test]
fn unsupported_types_are_resolved_with_their_payload() {
    let dml = indoc! {r#"
        model User {
          id       Int                               @id
          location Unsupported("point")
          area     Unsupported("polygon")?
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let location = user.assert_has_scalar_field("location");
    assert!(location.is_unsupported());
    assert_eq!(location.unsupported_type(), Some("point"));

    assert!(user.assert_has_scalar_field("area").is_optional());
}

#[test]
fn unsupported_fields_accept_dbgenerated_defaults() {
    let dml = indoc! {r#"
        model User {
          id       Int                  @id
          location Unsupported("point") @default(dbgenerated("ST_Point(0, 0)"))
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let default = user.assert_has_scalar_field("location").default_value().unwrap();
    assert!(default.is_dbgenerated());
}

#[test]
fn unsupported_fields_reject_other_defaults() {
    let dml = indoc! {r#"
        model User {
          id       Int                  @id
          location Unsupported("point") @default("somewhere")
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@default\": Only `dbgenerated()` defaults are allowed on `Unsupported` fields.",
    );
}
