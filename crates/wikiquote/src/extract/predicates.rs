// ABOUTME: Text-level and structural validity checks applied to quote candidates.
// ABOUTME: is_quote judges cleaned text; is_quote_node judges the shape of the source node.

use ego_tree::NodeRef;
use scraper::Node;

use super::view::{tag_name, PrunedView};

/// Shortest accepted quote, in characters.
pub const MIN_QUOTE_LEN: usize = 6;

/// Fewest accepted whitespace-separated words.
pub const MIN_QUOTE_WORDS: usize = 3;

/// Check whether cleaned text reads like a quotation.
///
/// Rejects text that:
/// - starts with a lowercase letter (sentence fragments)
/// - is shorter than [`MIN_QUOTE_LEN`] characters or [`MIN_QUOTE_WORDS`] words
/// - contains a token equal to an entry of `word_blocklist`
/// - ends with `(`, `:` or `]`, or starts with `(` (dangling citations)
pub fn is_quote<W: AsRef<str>>(text: &str, word_blocklist: &[W]) -> bool {
    if text
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() && c.is_lowercase())
    {
        return false;
    }
    if text.chars().count() < MIN_QUOTE_LEN {
        return false;
    }
    if text.split_whitespace().count() < MIN_QUOTE_WORDS {
        return false;
    }
    if text
        .split_whitespace()
        .any(|word| word_blocklist.iter().any(|b| b.as_ref() == word))
    {
        return false;
    }
    if text.ends_with(['(', ':', ']']) || text.starts_with('(') {
        return false;
    }
    true
}

/// Check whether a node's shape allows it to hold a quotation.
///
/// Nodes with a `<small>` anywhere beneath them carry attribution or
/// metadata. Nodes whose only content, after peeling single-child wrappers
/// such as `<i>` or `<b>`, is a link are navigation.
pub fn is_quote_node<'a>(view: &PrunedView<'a>, node: NodeRef<'a, Node>) -> bool {
    if view.has_descendant_tag(node, "small") {
        return false;
    }

    let mut suspect = node;
    loop {
        let mut children = view.children(suspect);
        let only = match (children.next(), children.next()) {
            (Some(only), None) => only,
            _ => break,
        };
        match tag_name(only) {
            Some("a") => return false,
            Some(_) => suspect = only,
            None => break,
        }
    }
    true
}
