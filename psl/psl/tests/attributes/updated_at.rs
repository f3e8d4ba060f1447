use crate::common::*;

#[test]
fn updated_at_on_a_datetime_field() {
    let dml = indoc! {r#"
        model User {
          id      Int      @id
          updated DateTime @updatedAt
        }
    "#};

    let schema = parse_schema(dml);
    schema
        .assert_has_model("User")
        .assert_has_scalar_field("updated")
        .assert_is_updated_at(true);
}

#[test]
fn updated_at_must_be_of_type_datetime() {
    let dml = indoc! {r#"
        model User {
          id      Int    @id
          updated String @updatedAt
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@updatedAt\": Fields that are marked with @updatedAt must be of type DateTime.",
    );
}

#[test]
fn updated_at_cannot_be_a_list() {
    let dml = indoc! {r#"
        model User {
          id      Int        @id
          updated DateTime[] @updatedAt
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@updatedAt\": Fields that are marked with @updatedAt cannot be lists.");
}
