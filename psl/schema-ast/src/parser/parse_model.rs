use super::{
    helpers::{parse_identifier, parsing_catch_all, Pair},
    parse_attribute::parse_attribute,
    parse_comments::parse_comment_block,
    parse_field::parse_field,
    Rule,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_model(
    pair: Pair<'_>,
    doc_comment: Option<Pair<'_>>,
    diagnostics: &mut Diagnostics,
    file_id: FileId,
) -> Model {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut fields: Vec<Field> = Vec::new();
    let mut pending_field_comment: Option<Pair<'_>> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::MODEL_KEYWORD | Rule::TYPE_KEYWORD | Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE | Rule::NEWLINE => {}
            Rule::identifier => name = Some(parse_identifier(current, file_id)),
            Rule::block_attribute => {
                attributes.push(parse_attribute(current, diagnostics, file_id));
            }
            Rule::field_declaration => match parse_field(
                &name.as_ref().map(|ident| ident.name.clone()).unwrap_or_default(),
                "model",
                current,
                pending_field_comment.take(),
                diagnostics,
                file_id,
            ) {
                Ok(field) => fields.push(field),
                Err(err) => diagnostics.push_error(err),
            },
            Rule::comment_block => pending_field_comment = Some(current),
            Rule::BLOCK_LEVEL_CATCH_ALL => diagnostics.push_error(DatamodelError::new_validation_error(
                "This line is not a valid field or attribute definition.",
                (file_id, current.as_span()).into(),
            )),
            Rule::empty_lines => (),
            _ => parsing_catch_all(&current, "model"),
        }
    }

    Model {
        name: name.expect("Encountered impossible model declaration during parsing"),
        fields,
        attributes,
        documentation: doc_comment.and_then(parse_comment_block),
        span: (file_id, pair_span).into(),
    }
}
