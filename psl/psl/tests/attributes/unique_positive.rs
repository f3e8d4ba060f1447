use crate::common::*;

#[test]
fn field_level_unique() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          email String @unique
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let field = user.assert_has_scalar_field("email");
    let index = field.assert_is_single_field_unique();
    assert!(index.is_unique());
    assert!(index.is_defined_on_field());
}

#[test]
fn block_level_unique_with_name_and_map() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String
          lastName  String

          @@unique([firstName, lastName], name: "fullName", map: "user_full_name_uniq")
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let index = user.indexes().find(|index| index.is_unique()).unwrap();
    assert_eq!(index.name(), Some("fullName"));
    assert_eq!(index.mapped_name(), Some("user_full_name_uniq"));
    assert!(!index.is_defined_on_field());

    let fields: Vec<&str> = index.fields().map(|f| f.name()).collect();
    assert_eq!(fields, &["firstName", "lastName"]);
}

#[test]
fn unique_criterias_are_the_id_and_the_unique_indexes() {
    let dml = indoc! {r#"
        model User {
          id       Int     @id
          email    String  @unique
          nickname String?

          @@unique([nickname])
          @@index([email, nickname])
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    // id, email and nickname, but not the plain index.
    assert_eq!(user.unique_criterias().count(), 3);

    // The nickname criteria has an optional field, so it is not strict.
    assert_eq!(user.required_unique_criterias().count(), 2);
}

#[test]
fn field_level_unique_with_sort_and_length() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          email String @unique(sort: Desc, length: 100)
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let scalar_field = user.assert_has_scalar_field("email");
    let index = scalar_field.assert_is_single_field_unique();
    let field = index.scalar_field_attributes().next().unwrap();

    assert_eq!(field.sort_order(), Some(psl::parser_database::SortOrder::Desc));
    assert_eq!(field.length(), Some(100));
}

#[test]
fn a_field_without_unique_is_not_a_unique_criteria() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          email String
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    user.assert_has_scalar_field("email").assert_not_single_field_unique();
}
