use crate::common::*;

#[test]
fn duplicate_id_attribute_on_a_field() {
    let dml = indoc! {r#"
        model User {
          id Int @id @id
        }
    "#};

    let diagnostics = parse_error(dml);

    // Exactly one duplicate attribute error, pointing at the second `@id`.
    diagnostics.assert_is_at(
        0,
        DatamodelError::new_duplicate_attribute_error("id", Span::new(27, 29, FileId::ZERO)),
    );

    let duplicates = diagnostics
        .errors()
        .iter()
        .filter(|err| matches!(err, DatamodelError::DuplicateAttribute { .. }))
        .count();
    assert_eq!(duplicates, 1);
}

#[test]
fn id_and_block_id_at_the_same_time() {
    let dml = indoc! {r#"
        model User {
          id       Int @id
          internal Int

          @@id([internal])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error validating model \"User\": Each model must have at most one id criteria. You can't have `@id` and `@@id` at the same time.",
    );
}

#[test]
fn id_on_an_optional_field() {
    let dml = indoc! {r#"
        model User {
          id Int? @id
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@id\": Fields that are marked as id must be required.");
}

#[test]
fn id_on_a_relation_field() {
    let dml = indoc! {r#"
        model User {
          id     Int  @id
          postId Int
          post   Post @relation(fields: [postId], references: [id]) @id
        }

        model Post {
          id    Int    @id
          users User[]
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@id\": The field `post` is a relation field and cannot be marked with `@id`. Only scalar fields can be declared as id.",
    );
}

#[test]
fn block_id_with_unknown_fields() {
    let dml = indoc! {r#"
        model User {
          a String

          @@id([a, b])
        }
    "#};

    parse_error(dml).assert_is_message_at(
        0,
        "Error validating model \"User\": The multi field id declaration refers to the unknown field b.",
    );
}

#[test]
fn block_id_with_relation_fields() {
    let dml = indoc! {r#"
        model User {
          posts Post[]
          name  String

          @@id([name, posts])
        }

        model Post {
          id     Int  @id
          userId Int
          user   User @relation(fields: [userId], references: [name])
        }
    "#};

    parse_error(dml).assert_is_message_at(
        0,
        "Error validating model \"User\": The id definition refers to the relation field posts. ID definitions must reference only scalar fields.",
    );
}

#[test]
fn block_id_with_optional_fields() {
    let dml = indoc! {r#"
        model User {
          a String
          b String?

          @@id([a, b])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error validating model \"User\": The id definition refers to the optional field b. ID definitions must reference only required fields.",
    );
}

#[test]
fn unknown_keyword_argument_on_id() {
    let dml = indoc! {r#"
        model User {
          id Int @id(foo: 3)
        }
    "#};

    parse_error(dml).assert_is(DatamodelError::new_unused_argument_error(Span::new(
        26,
        32,
        FileId::ZERO,
    )));
}
