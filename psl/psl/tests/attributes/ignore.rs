use crate::common::*;

#[test]
fn ignored_model_without_id_is_valid() {
    let dml = indoc! {r#"
        model Log {
          message String

          @@ignore
        }
    "#};

    let schema = parse_schema(dml);
    schema.assert_has_model("Log").assert_ignored(true);
}

#[test]
fn ignored_fields_are_flagged() {
    let dml = indoc! {r#"
        model User {
          id     Int    @id
          secret String @ignore
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    user.assert_ignored(false);
    user.assert_has_scalar_field("secret").assert_ignored(true);
    user.assert_has_scalar_field("id").assert_ignored(false);
}

#[test]
fn ignored_relation_fields_are_flagged() {
    let dml = indoc! {r#"
        model User {
          id     Int  @id
          postId Int
          post   Post @relation(fields: [postId], references: [id]) @ignore
        }

        model Post {
          id    Int    @id
          users User[]
        }
    "#};

    let schema = parse_schema(dml);
    schema
        .assert_has_model("User")
        .assert_has_relation_field("post")
        .assert_ignored(true);
}

#[test]
fn ignore_on_an_unsupported_field_is_redundant() {
    let dml = indoc! {r#"
        model User {
          id       Int                  @id
          location Unsupported("point") @ignore
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@ignore\": Fields of type `Unsupported` cannot take an `@ignore` attribute. They are already treated as ignored by the client due to their type.",
    );
}

#[test]
fn field_ignore_on_an_ignored_model_is_redundant() {
    let dml = indoc! {r#"
        model User {
          id     Int    @id
          secret String @ignore

          @@ignore
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@ignore\": Fields on an already ignored Model do not need an `@ignore` annotation.",
    );
}

#[test]
fn model_without_id_and_without_ignore_errors() {
    let dml = indoc! {r#"
        model Log {
          message String
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error validating model \"Log\": Each model must have exactly one id criteria. Either mark a single field with `@id` or add a multi field id criteria with `@@id([])` to the model.",
    );
}
