use crate::common::*;

#[test]
fn lowercase_builtin_scalar_type_gets_a_suggestion() {
    let dml = indoc! {r#"
        model User {
          id int @id
        }
    "#};

    parse_error(dml).assert_is_message(
        "Type \"int\" is neither a built-in type, nor refers to another model, composite type, or enum. Did you mean \"Int\"?",
    );
}

#[test]
fn case_mismatch_on_a_model_name_gets_a_suggestion() {
    let dml = indoc! {r#"
        model User {
          id      Int     @id
          posts   post[]
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation(fields: [authorId], references: [id])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Type \"post\" is neither a built-in type, nor refers to another model, composite type, or enum. Did you mean \"Post\"?",
    );
}

#[test]
fn unknown_type_without_any_close_match() {
    let dml = indoc! {r#"
        model User {
          id   Int     @id
          data Mystery
        }
    "#};

    parse_error(dml).assert_is_message(
        "Type \"Mystery\" is neither a built-in type, nor refers to another model, composite type, or enum.",
    );
}
