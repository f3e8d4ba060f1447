use crate::common::*;

#[test]
fn map_on_models_and_fields() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          firstName String @map("first_name")

          @@map("users")
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    user.assert_with_db_name("users");
    user.assert_has_scalar_field("firstName").assert_with_db_name("first_name");
    user.assert_has_scalar_field("id").assert_with_db_name("id");
}

#[test]
fn map_on_enums_and_values() {
    let dml = indoc! {r#"
        enum Role {
          Admin      @map("admin")
          Moderator

          @@map("roles")
        }

        model Account {
          id   Int  @id
          role Role
        }
    "#};

    let schema = parse_schema(dml);
    let role = schema.assert_has_enum("Role");

    assert_eq!(role.database_name(), "roles");

    let admin = role.values().find(|value| value.name() == "Admin").unwrap();
    assert_eq!(admin.database_name(), "admin");

    let moderator = role.values().find(|value| value.name() == "Moderator").unwrap();
    assert_eq!(moderator.database_name(), "Moderator");
}

#[test]
fn map_on_composite_type_fields() {
    let dml = indoc! {r#"
        type Address {
          street String @map("street_name")
        }

        model User {
          id      Int     @id
          address Address
        }
    "#};

    let schema = parse_schema(dml);
    let address = schema.assert_has_composite_type("Address");

    let street = address.fields().find(|field| field.name() == "street").unwrap();
    assert_eq!(street.database_name(), "street_name");
}

#[test]
fn composite_pk_and_model_mapping() {
    let dml = indoc! {r#"
        model U {
          firstName String
          lastName  String
          email     String @unique

          @@id([firstName, lastName])
          @@map("users")
        }
    "#};

    let schema = parse_schema(dml);
    let model = schema.assert_has_model("U");

    model.assert_with_db_name("users");

    let pk_fields: Vec<&str> = model.primary_key().unwrap().fields().map(|f| f.name()).collect();
    assert_eq!(pk_fields, &["firstName", "lastName"]);

    let email = model.assert_has_scalar_field("email");
    email.assert_is_single_field_unique();
}

#[test]
fn map_with_an_empty_name_is_rejected() {
    let dml = indoc! {r#"
        model User {
          id Int @id

          @@map("")
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@map\": The `name` argument cannot be an empty string.");
}

#[test]
fn map_on_a_relation_field_is_rejected() {
    let dml = indoc! {r#"
        model User {
          id     Int  @id
          postId Int
          post   Post @relation(fields: [postId], references: [id]) @map("post_id")
        }

        model Post {
          id    Int    @id
          users User[]
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@map\": The attribute `@map` cannot be used on relation fields.");
}

#[test]
fn duplicate_mapped_enum_value_names_are_rejected() {
    let dml = indoc! {r#"
        enum Role {
          Admin @map("a")
          User  @map("a")
        }

        model Account {
          id   Int  @id
          role Role
        }
    "#};

    parse_error(dml).assert_is_message("Value \"User\" is already defined on enum \"Role\".");
}
