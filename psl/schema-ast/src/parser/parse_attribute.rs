use super::{
    helpers::{parse_identifier, Pair},
    parse_arguments::parse_arguments_list,
    Rule,
};
use crate::ast::{Attribute, ArgumentsList};
use diagnostics::{Diagnostics, FileId};

pub(crate) fn parse_attribute(pair: Pair<'_>, diagnostics: &mut Diagnostics, file_id: FileId) -> Attribute {
    debug_assert!(matches!(pair.as_rule(), Rule::block_attribute | Rule::field_attribute));
    // The attribute node does not contain the `@` or `@@` marker.
    let pair = pair.into_inner().next().unwrap();
    let span = (file_id, pair.as_span()).into();
    let mut name = None;
    let mut arguments = ArgumentsList::default();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::path => name = Some(parse_identifier(current, file_id)),
            Rule::arguments_list => parse_arguments_list(current, &mut arguments, diagnostics, file_id),
            _ => unreachable!("Encountered impossible attribute during parsing: {:?}", current.as_rule()),
        }
    }

    Attribute {
        name: name.unwrap(),
        arguments,
        span,
    }
}
