use crate::common::*;
use psl::parser_database::ScalarFieldType;

#[test]
fn enums_resolve_as_field_types() {
    let dml = indoc! {r#"
        enum Status {
          Draft
          Published
        }

        model Post {
          id     Int    @id
          status Status
        }
    "#};

    let schema = parse_schema(dml);
    let post = schema.assert_has_model("Post");
    let status_enum = schema.assert_has_enum("Status");

    let status = post.assert_has_scalar_field("status");
    assert_eq!(status.scalar_field_type(), ScalarFieldType::Enum(status_enum.id));
    assert_eq!(status.scalar_type(), None);
}

#[test]
fn native_type_annotations_are_captured_verbatim() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          url      = "postgresql://x"
        }

        model User {
          id   Int    @id
          name String @db.VarChar(255)
          bio  String @db.Text
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let (scope, name, args, _span) = user.assert_has_scalar_field("name").raw_native_type().unwrap();
    assert_eq!(scope, "db");
    assert_eq!(name, "VarChar");
    assert_eq!(args, &["255".to_owned()]);

    let (_, name, args, _) = user.assert_has_scalar_field("bio").raw_native_type().unwrap();
    assert_eq!(name, "Text");
    assert!(args.is_empty());
}

#[test]
fn duplicate_native_type_annotations_error() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          name String @db.Text @db.VarChar(42)
        }
    "#};

    parse_error(dml).assert_is_message("Attribute \"@db.VarChar\" can only be defined once.");
}
