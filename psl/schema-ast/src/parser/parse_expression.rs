use super::{
    helpers::{parsing_catch_all, Pair},
    parse_arguments::parse_arguments_list,
    Rule,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId, Span};

pub(crate) fn parse_expression(token: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> Expression {
    debug_assert_eq!(token.as_rule(), Rule::expression);
    let first_child = token.into_inner().next().unwrap();
    let span = (file_id, first_child.as_span()).into();

    match first_child.as_rule() {
        Rule::numeric_literal => Expression::NumericValue(first_child.as_str().to_string(), span),
        Rule::string_literal => Expression::StringValue(parse_string_literal(first_child, diagnostics, file_id), span),
        Rule::path => Expression::ConstantValue(first_child.as_str().to_string(), span),
        Rule::function_call => parse_function(first_child, diagnostics, file_id),
        Rule::array_expression => parse_array(first_child, diagnostics, file_id),
        _ => unreachable!(
            "Encountered impossible literal during parsing: {:?}",
            first_child.tokens()
        ),
    }
}

fn parse_function(pair: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> Expression {
    let span: Span = (file_id, pair.as_span()).into();
    let mut name: Option<String> = None;
    let mut arguments = ArgumentsList::default();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::path => name = Some(current.as_str().to_string()),
            Rule::arguments_list => parse_arguments_list(current, &mut arguments, diagnostics, file_id),
            _ => parsing_catch_all(&current, "function"),
        }
    }

    match name {
        Some(name) => Expression::Function(name, arguments, span),
        _ => unreachable!("Encountered impossible function during parsing: {:?}", span),
    }
}

fn parse_array(token: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> Expression {
    let span: Span = (file_id, token.as_span()).into();
    let mut elements: Vec<Expression> = Vec::new();

    for current in token.into_inner() {
        match current.as_rule() {
            Rule::expression => elements.push(parse_expression(current, diagnostics, file_id)),
            _ => parsing_catch_all(&current, "array"),
        }
    }

    Expression::Array(elements, span)
}

pub(crate) fn parse_string_literal(token: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> String {
    debug_assert_eq!(token.as_rule(), Rule::string_literal);
    let contents = token.clone().into_inner().next().unwrap();
    debug_assert_eq!(contents.as_rule(), Rule::string_content);
    let contents_start = contents.as_span().start();

    unescape_string(contents.as_str(), contents_start, diagnostics, file_id)
}

fn unescape_string(s: &str, base_offset: usize, diagnostics: &mut Diagnostics, file_id: FileId) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices();

    while let Some((idx, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        // The grammar guarantees a character after every backslash.
        match chars.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, 't')) => out.push('\t'),
            Some((_, '0')) => out.push('\0'),
            Some((_, '\\')) => out.push('\\'),
            Some((_, '"')) => out.push('"'),
            Some((_, '\'')) => out.push('\''),
            Some((escaped_idx, other)) => {
                let span = Span::new(
                    base_offset + idx,
                    base_offset + escaped_idx + other.len_utf8(),
                    file_id,
                );
                diagnostics.push_error(DatamodelError::new_lexer_error(
                    format!("Unknown escape sequence `\\{other}` in string literal."),
                    span,
                ));
                out.push(other);
            }
            None => (),
        }
    }

    out
}
