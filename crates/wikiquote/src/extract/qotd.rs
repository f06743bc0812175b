// ABOUTME: Quote-of-the-day lookup on a wiki main page via a fixed id and child path.
// ABOUTME: Single-shot: a missing element, path step or separator yields QotdUnavailable.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use super::view::tag_name;
use crate::error::QuoteError;
use crate::langs::QotdSelector;

const OP: &str = "QuoteOfTheDay";

/// Extract `(quote, author)` from a main page.
pub fn extract_qotd(doc: &Html, selector: &QotdSelector) -> Result<(String, String), QuoteError> {
    let anchor = find_by_id(doc, &selector.element_id).ok_or_else(|| {
        QuoteError::qotd_unavailable(
            &selector.element_id,
            OP,
            Some(anyhow::anyhow!("no element with id {}", selector.element_id)),
        )
    })?;

    let row = follow_path(anchor, &selector.path).ok_or_else(|| {
        QuoteError::qotd_unavailable(
            &selector.element_id,
            OP,
            Some(anyhow::anyhow!("no match for {}", selector.path.join("/"))),
        )
    })?;

    let text: String = ElementRef::wrap(row)
        .map(|el| el.text().collect())
        .unwrap_or_default();

    let mut parts = text.split(selector.separator);
    let quote = parts.next().unwrap_or_default().trim();
    let author = parts.next().map(str::trim).ok_or_else(|| {
        QuoteError::qotd_unavailable(
            &selector.element_id,
            OP,
            Some(anyhow::anyhow!("no '{}' between quote and author", selector.separator)),
        )
    })?;

    Ok((quote.to_string(), author.to_string()))
}

fn find_by_id<'a>(doc: &'a Html, id: &str) -> Option<NodeRef<'a, Node>> {
    doc.tree
        .root()
        .descendants()
        .find(|n| n.value().as_element().and_then(|el| el.id()) == Some(id))
}

/// First node, in document order, reached by following `path` one child tag at a time.
fn follow_path<'a>(node: NodeRef<'a, Node>, path: &[String]) -> Option<NodeRef<'a, Node>> {
    let Some((step, rest)) = path.split_first() else {
        return Some(node);
    };
    node.children()
        .filter(|c| tag_name(*c) == Some(step.as_str()))
        .find_map(|c| follow_path(c, rest))
}
