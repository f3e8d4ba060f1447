use crate::common::*;
use psl::parser_database::{IndexAlgorithm, SortOrder};

#[test]
fn basic_index() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String
          lastName  String

          @@index([firstName, lastName])
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let index = user.indexes().next().unwrap();
    assert!(index.is_normal());
    assert!(index.algorithm().is_none());

    let fields: Vec<&str> = index.fields().map(|f| f.name()).collect();
    assert_eq!(fields, &["firstName", "lastName"]);
}

#[test]
fn index_with_algorithm() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          data String

          @@index([data], type: Hash)
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let index = user.indexes().next().unwrap();
    assert_eq!(index.algorithm(), Some(IndexAlgorithm::Hash));
}

#[test]
fn index_field_arguments() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String
          lastName  String

          @@index([firstName(sort: Desc, length: 10), lastName])
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let index = user.indexes().next().unwrap();
    let first = index.scalar_field_attributes().next().unwrap();

    assert_eq!(first.sort_order(), Some(SortOrder::Desc));
    assert_eq!(first.length(), Some(10));
}

#[test]
fn index_with_raw_operator_class() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          data String

          @@index([data(ops: raw("tsvector_ops"))], type: Gist)
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let index = user.indexes().next().unwrap();
    assert_eq!(index.algorithm(), Some(IndexAlgorithm::Gist));

    let ops = index
        .scalar_field_attributes()
        .next()
        .unwrap()
        .operator_class()
        .unwrap();
    assert_eq!(ops.get(), either::Either::Right("tsvector_ops"));
}

#[test]
fn index_name_is_a_legacy_alias_for_map() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          data String

          @@index([data], name: "my_index")
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let index = user.indexes().next().unwrap();
    assert_eq!(index.mapped_name(), Some("my_index"));
    assert_eq!(index.name(), None);
}

#[test]
fn index_accepts_only_one_of_name_and_map() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          data String

          @@index([data], name: "foo", map: "bar")
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@index\": The `@@index` attribute accepts the `name` argument as an alias for the `map` argument for legacy reasons. It does not accept both though. Please use the `map` argument to specify the database name of the index.",
    );
}

#[test]
fn unknown_index_algorithm() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          data String

          @@index([data], type: Quantum)
        }
    "#};

    parse_error(dml).assert_is_message("Error parsing attribute \"@index\": Unknown index type: Quantum.");
}

#[test]
fn fulltext_index() {
    let dml = indoc! {r#"
        model Post {
          id    Int    @id
          title String
          body  String

          @@fulltext([title, body], map: "post_text_idx")
        }
    "#};

    let schema = parse_schema(dml);
    let post = schema.assert_has_model("Post");

    let index = post.indexes().next().unwrap();
    assert!(index.is_fulltext());
    assert_eq!(index.mapped_name(), Some("post_text_idx"));
}

#[test]
fn unknown_keyword_argument_on_index() {
    let dml = indoc! {r#"
        model User {
          id Int @id
          a  Int

          @@index([a], foo: 3)
        }
    "#};

    parse_error(dml).assert_is(DatamodelError::new_unused_argument_error(Span::new(
        51,
        57,
        FileId::ZERO,
    )));
}
