use crate::common::*;

#[test]
fn int_id_with_autoincrement() {
    let dml = indoc! {r#"
        model Post {
          id Int @id @default(autoincrement())
        }
    "#};

    let schema = parse_schema(dml);
    let post = schema.assert_has_model("Post");

    let id = post.assert_has_scalar_field("id");
    id.assert_is_single_field_id();
    assert!(id.default_value().unwrap().is_autoincrement());
}

#[test]
fn multi_field_id_keeps_declared_field_order() {
    let dml = indoc! {r#"
        model User {
          firstName String
          lastName  String
          email     String @unique

          @@id([firstName, lastName])
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let pk = user.primary_key().unwrap();
    assert!(!pk.is_defined_on_field());

    let fields: Vec<&str> = pk.fields().map(|f| f.name()).collect();
    assert_eq!(fields, &["firstName", "lastName"]);
}

#[test]
fn id_with_name_and_map_arguments() {
    let dml = indoc! {r#"
        model User {
          a String
          b String

          @@id([a, b], name: "compoundId", map: "primary_key_name")
        }
    "#};

    let schema = parse_schema(dml);
    let pk = schema.assert_has_model("User").primary_key().unwrap();

    assert_eq!(pk.name(), Some("compoundId"));
    assert_eq!(pk.mapped_name(), Some("primary_key_name"));
}

#[test]
fn field_id_with_length_sort_and_clustered() {
    let dml = indoc! {r#"
        model User {
          id String @id(length: 15, sort: Desc, clustered: false)
        }
    "#};

    let schema = parse_schema(dml);
    let pk = schema.assert_has_model("User").primary_key().unwrap();

    assert_eq!(pk.clustered(), Some(false));

    let field = pk.scalar_field_attributes().next().unwrap();
    assert_eq!(field.length(), Some(15));
    assert_eq!(field.sort_order(), Some(psl::parser_database::SortOrder::Desc));
}

#[test]
fn optional_id_is_accepted_on_ignored_models() {
    let dml = indoc! {r#"
        model User {
          id Int? @id

          @@ignore
        }
    "#};

    assert_valid(dml);
}
