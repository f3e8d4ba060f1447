use crate::common::*;
use psl::schema_ast::ast;

#[test]
fn datasource_properties_are_exposed_raw() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          url      = env("DATABASE_URL")
        }

        model User {
          id Int @id
        }
    "#};

    let schema = parse_schema(dml);
    let datasource = schema.db.walk_datasources().next().unwrap();

    assert_eq!(datasource.name(), "db");
    assert_eq!(datasource.properties().count(), 2);

    assert!(matches!(
        datasource.property("provider"),
        Some(ast::Expression::StringValue(value, _)) if value == "postgresql"
    ));

    // `env()` is preserved as a function call, not resolved here.
    assert!(datasource.property("url").unwrap().is_env_expression());
}

#[test]
fn properties_coerce_quoted_booleans_and_integers() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          url      = "postgresql://x"
          pooled   = true
          direct   = "false"
          maxWait  = 5000
          poolSize = "5"
        }

        model User {
          id Int @id
        }
    "#};

    let schema = parse_schema(dml);
    let datasource = schema.db.walk_datasources().next().unwrap();

    assert_eq!(datasource.boolean_property("pooled"), Some(true));
    assert_eq!(datasource.boolean_property("direct"), Some(false));
    assert_eq!(datasource.integer_property("maxWait"), Some(5000));
    assert_eq!(datasource.integer_property("poolSize"), Some(5));

    // A string that is not a boolean or an integer does not coerce.
    assert_eq!(datasource.boolean_property("url"), None);
    assert_eq!(datasource.integer_property("provider"), None);
}

#[test]
fn duplicate_property_keys_are_rejected() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          provider = "sqlite"
          url      = "postgresql://x"
        }
    "#};

    parse_error(dml).assert_is_message("Key \"provider\" is already defined in datasource \"db\".");
}

#[test]
fn duplicate_datasource_names_are_rejected() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          url      = "postgresql://x"
        }

        datasource db {
          provider = "sqlite"
          url      = "file:dev.db"
        }
    "#};

    parse_error(dml).assert_is_message(
        "The datasource \"db\" cannot be defined because a datasource with that name already exists.",
    );
}

#[test]
fn datasources_do_not_collide_with_models() {
    let dml = indoc! {r#"
        datasource db {
          provider = "postgresql"
          url      = "postgresql://x"
        }

        model db {
          id Int @id
        }
    "#};

    assert_valid(dml);
}
