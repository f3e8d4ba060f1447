mod asserts;

pub(crate) use ::indoc::indoc;
pub(crate) use asserts::*;
pub(crate) use diagnostics::{DatamodelError, FileId, Span};

/// Parse a schema that is expected to be valid, panicking with rendered
/// diagnostics otherwise.
#[track_caller]
pub(crate) fn parse_schema(datamodel_string: &str) -> psl::ValidatedSchema {
    let schema = psl::validate(datamodel_string.into());

    if schema.diagnostics.has_errors() {
        panic!("Datamodel parsing failed\n\n{}", schema.render_diagnostics());
    }

    schema
}

/// Parse a schema that is expected to be invalid, returning the diagnostics.
#[track_caller]
pub(crate) fn parse_error(datamodel_string: &str) -> diagnostics::Diagnostics {
    let schema = psl::validate(datamodel_string.into());

    if !schema.diagnostics.has_errors() {
        panic!("Expected an error when parsing schema.");
    }

    schema.diagnostics
}

#[track_caller]
pub(crate) fn assert_valid(schema: &str) {
    match psl::parse_schema(schema) {
        Ok(_) => (),
        Err(err) => panic!("{err}"),
    }
}
