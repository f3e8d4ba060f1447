//! The top-level library crate for the schema language, wiring the analyzer
//! crates together behind a small API: parse and validate schema files,
//! query the result through the walkers, and render diagnostics.

#![deny(rust_2018_idioms, unsafe_code)]

pub use diagnostics::{DatamodelError, DatamodelWarning, Diagnostics, FileId, Span};
pub use parser_database::{
    self, is_reserved_type_name, ExtensionTypeEntry, ExtensionTypeId, ExtensionTypes, NoExtensionTypes,
    ParserDatabase, SourceFile,
};
pub use schema_ast::{self, ast};

/// The collection of all the analyzed schema files together with the
/// diagnostics collected while analyzing them.
#[derive(Debug)]
pub struct ValidatedSchema {
    /// The analyzer database: the resolved schema, queried through walkers.
    pub db: ParserDatabase,
    /// All diagnostics collected during parsing and validation.
    pub diagnostics: Diagnostics,
}

impl ValidatedSchema {
    /// Render all diagnostics into a pretty-printed string with source
    /// context. The renderer is multi-file aware: each diagnostic is printed
    /// with the source lines of the file its span points into.
    pub fn render_diagnostics(&self) -> String {
        let mut out: Vec<u8> = Vec::new();

        for warning in self.diagnostics.warnings() {
            let file_id = warning.span().file_id;
            warning
                .pretty_print(&mut out, self.db.file_name(file_id), self.db.source(file_id))
                .expect("printing datamodel warning");
        }

        for error in self.diagnostics.errors() {
            let file_id = error.span().file_id;
            error
                .pretty_print(&mut out, self.db.file_name(file_id), self.db.source(file_id))
                .expect("printing datamodel error");
        }

        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Parse and analyze a schema file, with the empty extension type registry.
pub fn validate(file: SourceFile) -> ValidatedSchema {
    validate_multi_file(vec![("schema.prisma".to_owned(), file)], &NoExtensionTypes)
}

/// Parse and analyze a schema file against the given extension type registry.
pub fn validate_with_extensions(file: SourceFile, extensions: &dyn ExtensionTypes) -> ValidatedSchema {
    validate_multi_file(vec![("schema.prisma".to_owned(), file)], extensions)
}

/// Parse and analyze a set of schema files. File paths are opaque labels
/// only used in rendered diagnostics.
pub fn validate_multi_file(files: Vec<(String, SourceFile)>, extensions: &dyn ExtensionTypes) -> ValidatedSchema {
    let mut diagnostics = Diagnostics::new();
    let db = ParserDatabase::new(files, extensions, &mut diagnostics);

    ValidatedSchema { db, diagnostics }
}

/// Parse and analyze a schema, rendering any errors into the `Err` variant.
pub fn parse_schema(file: impl Into<SourceFile>) -> Result<ValidatedSchema, String> {
    to_result(validate(file.into()))
}

/// Like [`parse_schema`], against the given extension type registry.
pub fn parse_schema_with_extensions(
    file: impl Into<SourceFile>,
    extensions: &dyn ExtensionTypes,
) -> Result<ValidatedSchema, String> {
    to_result(validate_with_extensions(file.into(), extensions))
}

fn to_result(schema: ValidatedSchema) -> Result<ValidatedSchema, String> {
    if schema.diagnostics.has_errors() {
        Err(schema.render_diagnostics())
    } else {
        Ok(schema)
    }
}
