use super::Rule;
use crate::ast::Identifier;
use diagnostics::FileId;

pub(crate) type Pair<'a> = pest::iterators::Pair<'a, Rule>;

#[track_caller]
pub(crate) fn parsing_catch_all(token: &Pair<'_>, kind: &str) {
    match token.as_rule() {
        Rule::empty_lines | Rule::trailing_comment | Rule::comment_block => {}
        x => unreachable!(
            "Encountered impossible {} during parsing: {:?} {:?}",
            kind,
            &x,
            token.clone().tokens()
        ),
    }
}

pub(crate) fn parse_identifier(pair: Pair<'_>, file_id: FileId) -> Identifier {
    debug_assert!(matches!(pair.as_rule(), Rule::identifier | Rule::path | Rule::argument_name));
    let span = (file_id, pair.as_span()).into();
    let name = match pair.as_rule() {
        Rule::argument_name => pair.into_inner().next().unwrap().as_str().to_owned(),
        _ => pair.as_str().to_owned(),
    };

    Identifier { name, span }
}
