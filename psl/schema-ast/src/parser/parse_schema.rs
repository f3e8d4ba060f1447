use super::{
    helpers::Pair,
    parse_composite_type::parse_composite_type,
    parse_enum::parse_enum,
    parse_model::parse_model,
    parse_source_and_generator::parse_config_block,
    PrismaDatamodelParser, Rule,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};
use pest::Parser;

/// Parse a schema string into its AST representation. Errors are pushed into
/// `diagnostics`; a best-effort AST is always returned.
pub fn parse_schema(datamodel_string: &str, diagnostics: &mut Diagnostics, file_id: FileId) -> SchemaAst {
    let datamodel_result = PrismaDatamodelParser::parse(Rule::schema, datamodel_string);

    match datamodel_result {
        Ok(mut datamodel_wrapped) => {
            let datamodel = datamodel_wrapped.next().unwrap();
            let mut top_level_definitions: Vec<Top> = Vec::new();
            let mut pending_block_comment: Option<Pair<'_>> = None;
            let mut pairs = datamodel.into_inner().peekable();

            while let Some(current) = pairs.next() {
                match current.as_rule() {
                    Rule::model_declaration => {
                        let keyword = current
                            .clone()
                            .into_inner()
                            .find(|pair| matches!(pair.as_rule(), Rule::TYPE_KEYWORD | Rule::MODEL_KEYWORD))
                            .expect("Expected model or type keyword");

                        match keyword.as_rule() {
                            Rule::TYPE_KEYWORD => top_level_definitions.push(Top::CompositeType(parse_composite_type(
                                current,
                                pending_block_comment.take(),
                                diagnostics,
                                file_id,
                            ))),
                            Rule::MODEL_KEYWORD => top_level_definitions.push(Top::Model(parse_model(
                                current,
                                pending_block_comment.take(),
                                diagnostics,
                                file_id,
                            ))),
                            _ => unreachable!(),
                        }
                    }
                    Rule::enum_declaration => top_level_definitions.push(Top::Enum(parse_enum(
                        current,
                        pending_block_comment.take(),
                        diagnostics,
                        file_id,
                    ))),
                    Rule::config_block => {
                        top_level_definitions.push(parse_config_block(
                            current,
                            pending_block_comment.take(),
                            diagnostics,
                            file_id,
                        ));
                    }
                    Rule::comment_block => {
                        match pairs.peek().map(|b| b.as_rule()) {
                            Some(Rule::model_declaration) | Some(Rule::enum_declaration) | Some(Rule::config_block) => {
                                // This is a comment at the beginning of a block to come.
                                pending_block_comment = Some(current);
                            }
                            _ => (),
                        }
                    }
                    Rule::EOI => {}
                    Rule::CATCH_ALL => diagnostics.push_error(DatamodelError::new_validation_error(
                        "This line is invalid. It does not start with any known Prisma schema keyword.",
                        (file_id, current.as_span()).into(),
                    )),
                    Rule::empty_lines => (),
                    _ => unreachable!("Encountered an unknown rule: {:?}", current.as_rule()),
                }
            }

            SchemaAst {
                tops: top_level_definitions,
            }
        }
        Err(err) => {
            let location: pest::error::InputLocation = err.location;
            let span = match location {
                pest::error::InputLocation::Pos(pos) => diagnostics::Span::new(pos, pos, file_id),
                pest::error::InputLocation::Span((from, to)) => diagnostics::Span::new(from, to, file_id),
            };

            let error = match err.variant {
                pest::error::ErrorVariant::ParsingError { positives, .. } if positives.is_empty() => {
                    DatamodelError::new_lexer_error("Unexpected character.", span)
                }
                pest::error::ErrorVariant::ParsingError { positives, .. } => {
                    let expected = positives.iter().map(|rule| rule_to_string(*rule)).collect::<Vec<_>>();
                    DatamodelError::new_parser_error(&expected, span)
                }
                pest::error::ErrorVariant::CustomError { message } => {
                    DatamodelError::new_lexer_error(message, span)
                }
            };

            diagnostics.push_error(error);

            SchemaAst { tops: Vec::new() }
        }
    }
}

fn rule_to_string(rule: Rule) -> &'static str {
    match rule {
        Rule::model_declaration => "model declaration",
        Rule::enum_declaration => "enum declaration",
        Rule::config_block => "configuration block declaration",
        Rule::enum_value_declaration => "enum value declaration",
        Rule::block_attribute => "block attribute",
        Rule::field_declaration => "field declaration",
        Rule::field_attribute => "field attribute",
        Rule::key_value => "configuration property",
        Rule::arguments_list => "arguments list",
        Rule::argument => "argument",
        Rule::named_argument => "named argument",
        Rule::expression => "expression",
        Rule::function_call => "function call",
        Rule::array_expression => "array",
        Rule::numeric_literal => "numeric literal",
        Rule::string_literal => "string literal",
        Rule::identifier => "identifier",
        Rule::path => "identifier",
        Rule::field_type => "field type",
        Rule::base_type => "type name",
        Rule::unsupported_type => "unsupported type literal",
        Rule::BLOCK_OPEN => "start of block (\"{\")",
        Rule::BLOCK_CLOSE => "end of block (\"}\")",
        Rule::NEWLINE => "end of line",
        Rule::comment_block | Rule::comment | Rule::doc_comment | Rule::trailing_comment => "comment",
        Rule::empty_lines => "empty line",
        _ => "invalid token",
    }
}
