use crate::common::*;

#[test]
fn autoincrement_on_a_string_field() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          name String @default(autoincrement())
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@default\": The `autoincrement()` default can only be used on `Int` and `BigInt` fields.",
    );
}

#[test]
fn now_on_an_int_field() {
    let dml = indoc! {r#"
        model User {
          id    Int @id
          count Int @default(now())
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@default\": The `now()` default can only be used on `DateTime` fields.");
}

#[test]
fn unknown_function() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          name String @default(magic())
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@default\": The function `magic` is not a known function.");
}

#[test]
fn numeric_default_on_a_string_field() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          name String @default(3)
        }
    "#};

    parse_error(dml).assert_is_message("Expected a String value, but received numeric value `3`.");
}

#[test]
fn string_default_on_an_int_field() {
    let dml = indoc! {r#"
        model User {
          id  Int @id
          age Int @default("hello")
        }
    "#};

    parse_error(dml).assert_is_message("Expected a numeric value, but received string value `\"hello\"`.");
}

// Quoted literals are only tolerated in relaxed positions like configuration
// properties. Defaults stay strict.
#[test]
fn quoted_numeric_default_on_an_int_field_is_rejected() {
    let dml = indoc! {r#"
        model User {
          id  Int @id
          age Int @default("3")
        }
    "#};

    parse_error(dml).assert_is_message("Expected a numeric value, but received string value `\"3\"`.");
}

#[test]
fn enum_default_that_is_not_a_value() {
    let dml = indoc! {r#"
        enum Role {
          Admin
          User
        }

        model Account {
          id   Int  @id
          role Role @default(Superuser)
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@default\": The defined default value is not a valid value of the enum specified for the field.",
    );
}

#[test]
fn dbgenerated_with_an_empty_string() {
    let dml = indoc! {r#"
        model User {
          id  Int    @id
          ref String @default(dbgenerated(""))
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@default\": dbgenerated() takes either no argument, or a single nonempty string argument.",
    );
}

#[test]
fn default_on_a_relation_field() {
    let dml = indoc! {r#"
        model User {
          id     Int  @id
          postId Int
          post   Post @relation(fields: [postId], references: [id]) @default(3)
        }

        model Post {
          id    Int    @id
          users User[]
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@default\": Cannot set a default value on a relation field.");
}

#[test]
fn multiple_unnamed_arguments() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          name String @default("a", "b")
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error parsing attribute \"@default\": You provided multiple unnamed arguments. This is not possible. Did you forget the brackets? Did you mean `[\"a\", \"b\"]`?",
    );
}

#[test]
fn invalid_base64_for_bytes() {
    let dml = indoc! {r#"
        model User {
          id   Int   @id
          data Bytes @default("not base64!!!")
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@default\": The default value is not a valid base64 string.");
}

#[test]
fn missing_value_argument() {
    let dml = indoc! {r#"
        model User {
          id   Int    @id
          name String @default
        }
    "#};

    parse_error(dml).assert_is_message("Argument \"value\" is missing.");
}
