use crate::common::*;

#[test]
fn relation_fields_argument_with_unknown_fields() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          posts Post[]
        }

        model Post {
          id     Int  @id
          author User @relation(fields: [authorId], references: [id])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@relation\": The argument fields must refer only to existing fields. The following fields do not exist in this model: authorId",
    );
}

#[test]
fn relation_references_argument_with_unknown_fields() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          posts Post[]
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation(fields: [authorId], references: [uid])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@relation\": The argument `references` must refer only to existing fields in the related model `User`. The following fields do not exist in the related model: uid",
    );
}

#[test]
fn relation_fields_argument_with_relation_fields() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          posts Post[]
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation(fields: [author], references: [id])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@relation\": The argument fields must refer only to scalar fields. But it is referencing the following relation fields: author",
    );
}

#[test]
fn invalid_referential_action() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          posts Post[]
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation(fields: [authorId], references: [id], onDelete: Yeet)
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@relation\": Invalid referential action: `Yeet`. Allowed values: (`Cascade`, `Restrict`, `NoAction`, `SetNull`, `SetDefault`)",
    );
}

#[test]
fn empty_relation_name_is_rejected() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          posts Post[] @relation("")
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation("", fields: [authorId], references: [id])
        }
    "#};

    parse_error(dml)
        .assert_is_message_at(0, "Error parsing attribute \"@relation\": A relation cannot have an empty name.");
}
