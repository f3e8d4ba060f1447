use super::{
    helpers::{parse_identifier, parsing_catch_all, Pair},
    parse_comments::parse_comment_block,
    parse_expression::parse_expression,
    Rule,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_config_block(
    pair: Pair<'_>,
    doc_comment: Option<Pair<'_>>,
    diagnostics: &mut Diagnostics,
    file_id: FileId,
) -> Top {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut properties = Vec::new();
    let mut kw = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::GENERATOR_KEYWORD => kw = Some("generator"),
            Rule::DATASOURCE_KEYWORD => kw = Some("datasource"),
            Rule::identifier => name = Some(parse_identifier(current, file_id)),
            Rule::key_value => properties.push(parse_key_value(current, diagnostics, file_id)),
            Rule::BLOCK_LEVEL_CATCH_ALL => diagnostics.push_error(DatamodelError::new_validation_error(
                "This line is not a valid definition within a configuration block.",
                (file_id, current.as_span()).into(),
            )),
            Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE | Rule::NEWLINE | Rule::comment_block | Rule::empty_lines => {}
            _ => parsing_catch_all(&current, "configuration block"),
        }
    }

    let name = name.expect("Encountered impossible configuration block declaration during parsing");
    let documentation = doc_comment.and_then(parse_comment_block);
    let span = (file_id, pair_span).into();

    match kw {
        Some("datasource") => Top::Source(SourceConfig {
            name,
            properties,
            documentation,
            span,
        }),
        Some("generator") => Top::Generator(GeneratorConfig {
            name,
            properties,
            documentation,
            span,
        }),
        _ => unreachable!("Encountered impossible configuration block during parsing"),
    }
}

fn parse_key_value(pair: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> ConfigBlockProperty {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut value: Option<Expression> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(parse_identifier(current, file_id)),
            Rule::expression => value = Some(parse_expression(current, diagnostics, file_id)),
            Rule::trailing_comment | Rule::NEWLINE => (),
            _ => unreachable!(
                "Encountered impossible configuration property during parsing: {:?}",
                current.as_rule(),
            ),
        }
    }

    ConfigBlockProperty {
        name: name.expect("Encountered impossible configuration property during parsing"),
        value,
        span: (file_id, pair_span).into(),
    }
}
