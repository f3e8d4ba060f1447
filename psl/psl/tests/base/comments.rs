use crate::common::*;
use psl::schema_ast::ast::WithDocumentation;

#[test]
fn doc_comments_attach_to_the_following_declaration() {
    let dml = indoc! {r#"
        /// The user of the platform.
        model User {
          /// The opaque identifier.
          id Int @id // not a doc comment
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    assert_eq!(user.ast_model().documentation(), Some("The user of the platform."));
    assert_eq!(
        user.assert_has_scalar_field("id").ast_field().documentation(),
        Some("The opaque identifier.")
    );
}

#[test]
fn plain_comments_are_discarded() {
    let dml = indoc! {r#"
        // just a comment
        model User {
          // another comment
          id Int @id
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    assert_eq!(user.ast_model().documentation(), None);
    assert_eq!(user.assert_has_scalar_field("id").ast_field().documentation(), None);
}

#[test]
fn doc_comments_on_enum_values() {
    let dml = indoc! {r#"
        enum Role {
          /// Can do anything.
          Admin
          User
        }

        model Account {
          id   Int  @id
          role Role
        }
    "#};

    let schema = parse_schema(dml);
    let role = schema.assert_has_enum("Role");

    let admin = role.values().find(|value| value.name() == "Admin").unwrap();
    assert_eq!(admin.documentation(), Some("Can do anything."));
}
