use super::{helpers::Pair, Rule};
use crate::ast::Comment;

pub(crate) fn parse_comment_block(token: Pair<'_>) -> Option<Comment> {
    debug_assert_eq!(token.as_rule(), Rule::comment_block);
    let mut lines = Vec::new();

    for comment in token.into_inner() {
        if comment.as_rule() == Rule::doc_comment {
            lines.push(parse_doc_comment(comment));
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(Comment { text: lines.join("\n") })
    }
}

pub(crate) fn parse_trailing_comment(pair: Pair<'_>) -> Option<Comment> {
    debug_assert_eq!(pair.as_rule(), Rule::trailing_comment);
    let mut lines = Vec::new();

    for comment in pair.into_inner() {
        if comment.as_rule() == Rule::doc_comment {
            lines.push(parse_doc_comment(comment));
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(Comment { text: lines.join("\n") })
    }
}

fn parse_doc_comment(pair: Pair<'_>) -> &str {
    debug_assert_eq!(pair.as_rule(), Rule::doc_comment);
    let contents = pair
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::doc_content)
        .unwrap();

    contents.as_str().trim()
}
