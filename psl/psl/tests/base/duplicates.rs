use crate::common::*;

#[test]
fn fail_on_duplicate_models() {
    let dml = indoc! {r#"
        model User {
          id Int @id
        }

        model User {
          id Int @id
        }
    "#};

    parse_error(dml).assert_is(DatamodelError::new_duplicate_top_error(
        "User",
        "model",
        "model",
        Span::new(35, 39, FileId::ZERO),
    ));
}

#[test]
fn fail_on_model_enum_conflict() {
    let dml = indoc! {r#"
        enum User {
          Admin
          Moderator
        }

        model User {
          id Int @id
        }
    "#};

    parse_error(dml)
        .assert_is_message("The model \"User\" cannot be defined because a enum with that name already exists.");
}

#[test]
fn fail_on_duplicate_field() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String
          firstName String
        }
    "#};

    parse_error(dml).assert_is_message("Field \"firstName\" is already defined on model \"User\".");
}

#[test]
fn fail_on_duplicate_mapped_field_name() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String @map("thename")
          lastName  String @map("thename")
        }
    "#};

    parse_error(dml).assert_is_message("Field \"lastName\" is already defined on model \"User\".");
}

#[test]
fn fail_on_field_mapped_to_a_sibling_name() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String
          otherName String @map("firstName")
        }
    "#};

    parse_error(dml).assert_is_message("Field \"otherName\" is already defined on model \"User\".");
}

#[test]
fn fail_on_duplicate_enum_value() {
    let dml = indoc! {r#"
        enum Role {
          Admin
          Moderator
          Moderator
        }
    "#};

    parse_error(dml).assert_is_message("Value \"Moderator\" is already defined on enum \"Role\".");
}

#[test]
fn fail_on_duplicate_models_with_map() {
    let dml = indoc! {r#"
        model Customer {
          id Int @id

          @@map("User")
        }

        model User {
          id Int @id
        }
    "#};

    parse_error(dml).assert_is_message(
        "The model with database name \"User\" could not be defined because another model with this name exists: \"User\"",
    );
}
