use crate::common::*;

#[test]
fn fail_on_reserved_name_for_model() {
    let dml = indoc! {r#"
        model PrismaClient {
          id Int @id
        }
    "#};

    parse_error(dml).assert_is(DatamodelError::new_reserved_model_name_error(
        "PrismaClient",
        Span::new(6, 18, FileId::ZERO),
    ));
}

#[test]
fn fail_on_javascript_keyword_as_model_name() {
    let dml = indoc! {r#"
        model typeof {
          id Int @id
        }
    "#};

    parse_error(dml)
        .assert_is_message("The model name `typeof` is invalid. It is a reserved name. Please change it.");
}

#[test]
fn fail_on_scalar_type_name_for_model() {
    let dml = indoc! {r#"
        model DateTime {
          id Int @id
        }
    "#};

    parse_error(dml).assert_is_message("\"DateTime\" is a reserved scalar type name and cannot be used.");
}

#[test]
fn fail_on_scalar_type_name_for_composite_type() {
    let dml = indoc! {r#"
        type Json {
          value String
        }
    "#};

    parse_error(dml).assert_is_message("\"Json\" is a reserved scalar type name and cannot be used.");
}

#[test]
fn fail_on_scalar_type_name_for_enum() {
    let dml = indoc! {r#"
        enum String {
          Admin
          Moderator
        }
    "#};

    parse_error(dml).assert_is_message("\"String\" is a reserved scalar type name and cannot be used.");
}

#[test]
fn fail_on_dash_in_model_name() {
    let dml = indoc! {r#"
        model user-role {
          id Int @id
        }
    "#};

    parse_error(dml).assert_is_message("The character `-` is not allowed in Model names.");
}

#[test]
fn fail_on_field_name_starting_with_a_number() {
    let dml = indoc! {r#"
        model User {
          id   Int @id
          1st  String
        }
    "#};

    parse_error(dml).assert_is_message("The name of a Field must not start with a number.");
}
