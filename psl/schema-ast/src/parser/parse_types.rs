use super::{helpers::{parse_identifier, Pair}, parse_expression::parse_string_literal, Rule};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_field_type(
    pair: Pair<'_>,
    diagnostics: &mut Diagnostics,
    file_id: FileId,
) -> Result<(FieldArity, FieldType), DatamodelError> {
    debug_assert_eq!(pair.as_rule(), Rule::field_type);
    let current = pair.into_inner().next().unwrap();

    match current.as_rule() {
        Rule::optional_type => Ok((
            FieldArity::Optional,
            parse_base_type(current.into_inner().next().unwrap(), diagnostics, file_id),
        )),
        Rule::base_type => Ok((FieldArity::Required, parse_base_type(current, diagnostics, file_id))),
        Rule::list_type => Ok((
            FieldArity::List,
            parse_base_type(current.into_inner().next().unwrap(), diagnostics, file_id),
        )),
        Rule::legacy_required_type => Err(DatamodelError::new_legacy_parser_error(
            "Fields are required by default, `!` is no longer required.",
            (file_id, current.as_span()).into(),
        )),
        Rule::legacy_list_type => Err(DatamodelError::new_legacy_parser_error(
            "To specify a list, please use `Type[]` instead of `[Type]`.",
            (file_id, current.as_span()).into(),
        )),
        Rule::unsupported_optional_list_type => Err(DatamodelError::new_legacy_parser_error(
            "Optional lists are not supported. Use either `Type[]` or `Type?`.",
            (file_id, current.as_span()).into(),
        )),
        _ => unreachable!("Encountered impossible field type during parsing: {:?}", current.tokens()),
    }
}

fn parse_base_type(pair: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> FieldType {
    debug_assert_eq!(pair.as_rule(), Rule::base_type);
    let pair_span = pair.as_span();
    let current = pair.into_inner().next().unwrap();

    match current.as_rule() {
        Rule::identifier => FieldType::Supported(parse_identifier(current, file_id)),
        Rule::unsupported_type => {
            let span = (file_id, pair_span).into();
            let literal = current.into_inner().next().unwrap();
            let contents = parse_string_literal(literal, diagnostics, file_id);
            FieldType::Unsupported(contents, span)
        }
        _ => unreachable!("Encountered impossible type during parsing: {:?}", current.tokens()),
    }
}
