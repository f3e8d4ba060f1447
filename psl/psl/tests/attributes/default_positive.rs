use crate::common::*;
use psl::schema_ast::ast;

#[test]
fn literal_defaults() {
    let dml = indoc! {r#"
        model User {
          id        Int      @id
          age       Int      @default(30)
          weight    Float    @default(72.5)
          isPro     Boolean  @default(false)
          name      String   @default("user")
          data      Bytes    @default("aGVsbG8gd29ybGQ=")
          config    Json     @default("{\"theme\":\"dark\"}")
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let age_default = user.assert_has_scalar_field("age").default_value().unwrap();
    assert!(matches!(age_default.value(), ast::Expression::NumericValue(val, _) if val == "30"));

    let name_default = user.assert_has_scalar_field("name").default_value().unwrap();
    assert!(matches!(name_default.value(), ast::Expression::StringValue(val, _) if val == "user"));

    assert!(user.assert_has_scalar_field("isPro").default_value().is_some());
    assert!(user.assert_has_scalar_field("weight").default_value().is_some());
    assert!(user.assert_has_scalar_field("config").default_value().is_some());

    let data_default = user.assert_has_scalar_field("data").default_value().unwrap();
    match data_default.value() {
        ast::Expression::StringValue(val, _) => {
            use base64::Engine as _;
            let decoded = base64::engine::general_purpose::STANDARD.decode(val).unwrap();
            assert_eq!(decoded, b"hello world");
        }
        other => panic!("expected a string literal, got {other}"),
    }
}

#[test]
fn function_defaults() {
    let dml = indoc! {r#"
        model User {
          id        Int      @id @default(autoincrement())
          token     String   @default(cuid())
          altToken  String   @default(uuid())
          altToken7 String   @default(uuid(7))
          createdAt DateTime @default(now())
          raw       String   @default(dbgenerated("gen_random_uuid()"))
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    assert!(user.assert_has_scalar_field("id").default_value().unwrap().is_autoincrement());
    assert!(user.assert_has_scalar_field("token").default_value().unwrap().is_cuid());
    assert!(user.assert_has_scalar_field("altToken").default_value().unwrap().is_uuid());
    assert!(user.assert_has_scalar_field("altToken7").default_value().unwrap().is_uuid());
    assert!(user.assert_has_scalar_field("createdAt").default_value().unwrap().is_now());
    assert!(user.assert_has_scalar_field("raw").default_value().unwrap().is_dbgenerated());
}

#[test]
fn enum_default() {
    let dml = indoc! {r#"
        enum Role {
          Admin
          User
        }

        model Account {
          id   Int  @id
          role Role @default(User)
        }
    "#};

    let schema = parse_schema(dml);
    let account = schema.assert_has_model("Account");

    let default = account.assert_has_scalar_field("role").default_value().unwrap();
    assert!(matches!(default.value(), ast::Expression::ConstantValue(val, _) if val == "User"));
}

#[test]
fn list_default() {
    let dml = indoc! {r#"
        model Post {
          id   Int   @id
          tags Int[] @default([1, 2, 3])
        }
    "#};

    let schema = parse_schema(dml);
    let post = schema.assert_has_model("Post");

    assert!(post.assert_has_scalar_field("tags").default_value().is_some());
}

#[test]
fn default_with_map_argument() {
    let dml = indoc! {r#"
        model User {
          id     Int    @id
          status String @default("active", map: "default_status")
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let default = user.assert_has_scalar_field("status").default_value().unwrap();
    assert_eq!(default.mapped_name(), Some("default_status"));
}
