use super::{
    helpers::{parse_identifier, parsing_catch_all, Pair},
    parse_attribute::parse_attribute,
    parse_comments::{parse_comment_block, parse_trailing_comment},
    Rule,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_enum(
    pair: Pair<'_>,
    doc_comment: Option<Pair<'_>>,
    diagnostics: &mut Diagnostics,
    file_id: FileId,
) -> Enum {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut values: Vec<EnumValue> = Vec::new();
    let mut pending_value_comment: Option<Pair<'_>> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::ENUM_KEYWORD | Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE | Rule::NEWLINE => {}
            Rule::identifier => name = Some(parse_identifier(current, file_id)),
            Rule::block_attribute => {
                attributes.push(parse_attribute(current, diagnostics, file_id));
            }
            Rule::enum_value_declaration => {
                values.push(parse_enum_value(current, pending_value_comment.take(), diagnostics, file_id))
            }
            Rule::comment_block => pending_value_comment = Some(current),
            Rule::BLOCK_LEVEL_CATCH_ALL => diagnostics.push_error(DatamodelError::new_validation_error(
                "This line is not an enum value definition.",
                (file_id, current.as_span()).into(),
            )),
            Rule::empty_lines => (),
            _ => parsing_catch_all(&current, "enum"),
        }
    }

    Enum {
        name: name.expect("Encountered impossible enum declaration during parsing"),
        values,
        attributes,
        documentation: doc_comment.and_then(parse_comment_block),
        span: (file_id, pair_span).into(),
    }
}

fn parse_enum_value(
    pair: Pair<'_>,
    block_comment: Option<Pair<'_>>,
    diagnostics: &mut Diagnostics,
    file_id: FileId,
) -> EnumValue {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut comment: Option<Comment> = block_comment.and_then(parse_comment_block);

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(parse_identifier(current, file_id)),
            Rule::field_attribute => attributes.push(parse_attribute(current, diagnostics, file_id)),
            Rule::trailing_comment => {
                comment = match (comment, parse_trailing_comment(current)) {
                    (c, None) | (None, c) => c,
                    (Some(existing), Some(new)) => Some(Comment {
                        text: [existing.text, new.text].join("\n"),
                    }),
                };
            }
            Rule::NEWLINE => {}
            _ => parsing_catch_all(&current, "enum value"),
        }
    }

    EnumValue {
        name: name.expect("Encountered impossible enum value declaration during parsing"),
        attributes,
        documentation: comment,
        span: (file_id, pair_span).into(),
    }
}
