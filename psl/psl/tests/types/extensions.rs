use crate::common::*;
use psl::parser_database::{ExtensionTypeEntry, ExtensionTypeId, ExtensionTypes, ScalarFieldType};

struct TestExtensions {
    /// (prisma name, database name, database type modifiers)
    types: Vec<(String, String, Vec<String>)>,
}

impl ExtensionTypes for TestExtensions {
    fn get_by_prisma_name(&self, name: &str) -> Option<ExtensionTypeId> {
        self.types
            .iter()
            .position(|(prisma_name, _, _)| prisma_name == name)
            .map(|idx| ExtensionTypeId::from(idx as u32))
    }

    fn get_by_id(&self, id: ExtensionTypeId) -> Option<ExtensionTypeEntry<'_>> {
        self.types
            .get(u32::from(id) as usize)
            .map(|(prisma_name, db_name, db_type_modifiers)| ExtensionTypeEntry {
                id,
                prisma_name,
                db_name,
                db_type_modifiers,
            })
    }
}

fn vector_extensions() -> TestExtensions {
    TestExtensions {
        types: vec![
            ("Vector3".into(), "vector".into(), vec!["3".into()]),
            ("VectorN".into(), "vector".into(), vec![]),
        ],
    }
}

#[test]
fn accepts_extension_type_reference() {
    let dml = indoc! {r#"
        model A {
          id Int     @id
          a  Vector3
        }
    "#};

    let extensions = vector_extensions();
    let schema = psl::parse_schema_with_extensions(dml, &extensions).unwrap();
    let model = schema.assert_has_model("A");

    let expected = extensions.get_by_prisma_name("Vector3").unwrap();
    assert_eq!(
        model.assert_has_scalar_field("a").scalar_field_type(),
        ScalarFieldType::Extension(expected)
    );
}

#[test]
fn extension_types_resolve_only_through_the_registry() {
    let dml = indoc! {r#"
        model A {
          id Int     @id
          a  Vector3
        }
    "#};

    let schema = psl::validate(dml.into());
    schema
        .diagnostics
        .assert_is_message("Type \"Vector3\" is neither a built-in type, nor refers to another model, composite type, or enum.");
}

#[test]
fn extension_type_modifiers_are_captured_verbatim() {
    let dml = indoc! {r#"
        model A {
          id Int     @id
          a  VectorN @test.vector(100)
        }
    "#};

    let extensions = vector_extensions();
    let schema = psl::parse_schema_with_extensions(dml, &extensions).unwrap();
    let model = schema.assert_has_model("A");

    let (scope, name, args, _span) = model.assert_has_scalar_field("a").raw_native_type().unwrap();
    assert_eq!(scope, "test");
    assert_eq!(name, "vector");
    assert_eq!(args, &["100".to_owned()]);
}

#[test]
fn extension_fields_accept_only_dbgenerated_defaults() {
    let dml = indoc! {r#"
        model A {
          id Int     @id
          a  Vector3 @default(3)
        }
    "#};

    let extensions = vector_extensions();
    let err = psl::parse_schema_with_extensions(dml, &extensions).unwrap_err();
    assert!(err.contains("Only `dbgenerated()` defaults are allowed on extension type fields."));
}
