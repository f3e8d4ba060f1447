use crate::common::*;
use psl::parser_database::ScalarType;

#[test]
fn parse_basic_model() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String
          lastName  String
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    user.assert_field_count(3);
    user.assert_has_scalar_field("firstName").assert_scalar_type(ScalarType::String);
    user.assert_has_scalar_field("lastName").assert_scalar_type(ScalarType::String);
    user.assert_has_scalar_field("id").assert_is_single_field_id();
}

#[test]
fn parse_basic_enum() {
    let dml = indoc! {r#"
        enum Role {
          Admin
          Moderator
          User
        }

        model Account {
          id   Int  @id
          role Role
        }
    "#};

    let schema = parse_schema(dml);
    let role = schema.assert_has_enum("Role");

    let values: Vec<&str> = role.values().map(|value| value.name()).collect();
    assert_eq!(values, &["Admin", "Moderator", "User"]);
}

#[test]
fn parse_standalone_configuration_blocks() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          url      = "postgresql://localhost:5432"
        }

        generator client {
          provider = "prisma-client-js"
        }

        model User {
          id Int @id
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.walk_datasources().count(), 1);
    assert_eq!(schema.db.walk_generators().count(), 1);
    assert_eq!(schema.db.models_count(), 1);
    assert_eq!(schema.db.enums_count(), 0);
}

#[test]
fn find_lookups_are_consistent_with_walkers() {
    let dml = indoc! {r#"
        model User {
          id Int @id
        }

        enum Role {
          Admin
        }

        type Address {
          street String
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.find_model("User").unwrap().name(), "User");
    assert_eq!(schema.db.find_enum("Role").unwrap().name(), "Role");
    assert_eq!(schema.db.find_composite_type("Address").unwrap().name(), "Address");
    assert!(schema.db.find_model("Role").is_none());
    assert!(schema.db.find_model("Absent").is_none());
}

// Running the analyzer twice on the same input must produce the same
// diagnostics and the same resolved schema.
#[test]
fn analysis_is_deterministic() {
    let dml = indoc! {r#"
        model User {
          id    Int    @id
          posts Post[]
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation(fields: [authorId], references: [id])
          invalid  Broken
        }
    "#};

    let first = psl::validate(dml.into());
    let second = psl::validate(dml.into());

    assert_eq!(first.diagnostics.errors(), second.diagnostics.errors());

    let first_models: Vec<&str> = first.db.walk_models().map(|m| m.name()).collect();
    let second_models: Vec<&str> = second.db.walk_models().map(|m| m.name()).collect();
    assert_eq!(first_models, second_models);
}
