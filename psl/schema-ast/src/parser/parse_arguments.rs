use super::{
    helpers::{parse_identifier, parsing_catch_all, Pair},
    parse_expression::parse_expression,
    Rule,
};
use crate::ast::{Argument, ArgumentsList, EmptyArgument, Expression, Identifier};
use diagnostics::{Diagnostics, FileId};

pub(crate) fn parse_arguments_list(
    token: Pair<'_>,
    arguments: &mut ArgumentsList,
    diagnostics: &mut Diagnostics,
    file_id: FileId,
) {
    debug_assert_eq!(token.as_rule(), Rule::arguments_list);
    for current in token.into_inner() {
        match current.as_rule() {
            Rule::argument => parse_argument(current, arguments, diagnostics, file_id),
            Rule::trailing_comma => {
                arguments.trailing_comma = Some((file_id, current.as_span()).into());
            }
            _ => parsing_catch_all(&current, "arguments list"),
        }
    }
}

fn parse_argument(pair: Pair<'_>, arguments: &mut ArgumentsList, diagnostics: &mut Diagnostics, file_id: FileId) {
    debug_assert_eq!(pair.as_rule(), Rule::argument);
    let current = pair.into_inner().next().unwrap();

    match current.as_rule() {
        // A named argument, `name: value`.
        Rule::named_argument => arguments.arguments.push(parse_named_arg(current, diagnostics, file_id)),
        // An unnamed argument, just a value.
        Rule::expression => arguments.arguments.push(Argument {
            name: None,
            span: (file_id, current.as_span()).into(),
            value: parse_expression(current, diagnostics, file_id),
        }),
        // An argument without a value. It is not valid, but we parse it to
        // report a proper error later.
        Rule::empty_argument => {
            let name = current
                .into_inner()
                .find(|tok| tok.as_rule() == Rule::argument_name)
                .unwrap();
            arguments.empty_arguments.push(EmptyArgument {
                name: parse_identifier(name, file_id),
            })
        }
        _ => parsing_catch_all(&current, "argument"),
    }
}

fn parse_named_arg(pair: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> Argument {
    debug_assert_eq!(pair.as_rule(), Rule::named_argument);
    let mut name: Option<Identifier> = None;
    let mut argument: Option<Expression> = None;
    let pair_span = pair.as_span();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::argument_name => name = Some(parse_identifier(current, file_id)),
            Rule::expression => argument = Some(parse_expression(current, diagnostics, file_id)),
            _ => parsing_catch_all(&current, "named argument"),
        }
    }

    match (name, argument) {
        (Some(name), Some(value)) => Argument {
            name: Some(name),
            value,
            span: (file_id, pair_span).into(),
        },
        _ => panic!("Encountered impossible named argument during parsing: {pair_span:?}"),
    }
}
