// ABOUTME: Single-pass tree walk that collects quotations from list items and definition lists.
// ABOUTME: Honors heading-based section skipping, node and text validity, and the max_quotes cap.

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};

use super::clean::{clean_text, normalize_whitespace, remove_credit};
use super::predicates::{is_quote, is_quote_node};
use super::view::{tag_name, PrunedView};
use crate::langs::LanguagePolicy;

/// Extract up to `max_quotes` quotations from a parsed page, in document order.
///
/// Only three kinds of node are visited: `li` under `div > ul`, `dl` directly
/// under a `div`, and `h2`/`h3` headings anywhere. A heading whose lowercased
/// text starts with an entry of `headings` suppresses every candidate until
/// the next heading. When the page has any heading at all, content before the
/// first one is suppressed as well.
///
/// The table of contents is ignored. The document is not modified.
pub fn extract_quotes<H, W>(
    doc: &Html,
    max_quotes: usize,
    headings: &[H],
    word_blocklist: &[W],
) -> Vec<String>
where
    H: AsRef<str>,
    W: AsRef<str>,
{
    let mut quotes = Vec::new();
    if max_quotes == 0 {
        return quotes;
    }

    let view = PrunedView::new(doc);
    let headings: Vec<String> = headings.iter().map(|h| h.as_ref().to_lowercase()).collect();

    // Front matter precedes the first heading; pages without headings are all content.
    let mut skip_to_next_heading = view.nodes().any(is_heading);

    for node in view.nodes().filter(|n| is_candidate(*n)) {
        if is_heading(node) {
            skip_to_next_heading = is_unwanted_heading(&view, node, &headings);
            continue;
        }
        if skip_to_next_heading {
            continue;
        }

        let Some(candidate) = potential_quote(&view, node) else {
            continue;
        };
        if !candidate.is_empty() && is_quote(&candidate, word_blocklist) {
            quotes.push(candidate);
            if quotes.len() == max_quotes {
                break;
            }
        }
    }

    tracing::debug!(count = quotes.len(), max_quotes, "extracted quotes");
    quotes
}

/// [`extract_quotes`] with the lists and post-processing of a language policy.
pub fn extract_quotes_with(doc: &Html, max_quotes: usize, policy: &LanguagePolicy) -> Vec<String> {
    let quotes = extract_quotes(
        doc,
        max_quotes,
        policy.headings.as_slice(),
        policy.word_blocklist.as_slice(),
    );
    if policy.strip_trailing_credit {
        quotes.iter().map(|q| remove_credit(q)).collect()
    } else {
        quotes
    }
}

fn is_heading(node: NodeRef<'_, Node>) -> bool {
    matches!(tag_name(node), Some("h2" | "h3"))
}

fn parent_tag(node: NodeRef<'_, Node>) -> Option<&str> {
    node.parent().and_then(tag_name)
}

/// `li` in `div > ul`, `dl` in `div`, or a heading.
fn is_candidate(node: NodeRef<'_, Node>) -> bool {
    match tag_name(node) {
        Some("h2" | "h3") => true,
        Some("dl") => parent_tag(node) == Some("div"),
        Some("li") => {
            node.parent()
                .is_some_and(|ul| tag_name(ul) == Some("ul") && parent_tag(ul) == Some("div"))
        }
        _ => false,
    }
}

fn is_unwanted_heading<'a>(view: &PrunedView<'a>, node: NodeRef<'a, Node>, headings: &[String]) -> bool {
    let text = view.text(node).trim_start().to_lowercase();
    headings.iter().any(|unwanted| text.starts_with(unwanted.as_str()))
}

/// Cleaned candidate text of a `dl` or `li`, or `None` if the node's shape rules it out.
fn potential_quote<'a>(view: &PrunedView<'a>, node: NodeRef<'a, Node>) -> Option<String> {
    if tag_name(node) == Some("dl") {
        let dds: Vec<_> = view
            .children(node)
            .filter(|c| tag_name(*c) == Some("dd"))
            .collect();
        // One bad entry disqualifies the whole list
        if !dds.iter().all(|dd| is_quote_node(view, *dd)) {
            return None;
        }
        let joined = dds
            .iter()
            .map(|dd| view.text(*dd).trim().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        return Some(clean_text(&joined));
    }

    // Sub-items are commentary on the parent quote, not part of it
    let nested: Vec<NodeId> = view
        .children(node)
        .filter(|c| tag_name(*c) == Some("ul"))
        .map(|c| c.id())
        .collect();
    let local = view.hiding(nested);
    if !is_quote_node(&local, node) {
        return None;
    }
    Some(clean_text(&normalize_whitespace(&local.text(node))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::langs::LanguageTable;
    use pretty_assertions::assert_eq;

    const NO_HEADINGS: &[&str] = &[];
    const NO_WORDS: &[&str] = &[];
    const EN_HEADINGS: &[&str] = &["cast", "see also", "external links", "about"];
    const EN_WORDS: &[&str] = &["quoted", "Variant:", "Retrieved", "Notes:", "article:"];

    fn extract(html: &str, max_quotes: usize) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        extract_quotes(&doc, max_quotes, EN_HEADINGS, EN_WORDS)
    }

    const PAGE: &str = r#"
        <div class="mw-parser-output">
            <p>Albert is a made-up person used for tests.</p>
            <div id="toc"><h2>Contents</h2><ul><li>Quotes about life itself</li></ul></div>
            <ul><li>This front matter should be skipped.</li></ul>
            <h2>Quotes</h2>
            <ul>
                <li>Imagination is more important than knowledge.
                    <ul><li>Interview with a newspaper, 1929</li></ul>
                </li>
                <li>the lowercase start is a fragment.</li>
                <li>Life is like riding a bicycle. <small>Letter to his son</small></li>
                <li><i><a href="/wiki/Physics">Physics is the topic here</a></i></li>
                <li>“Curly marks around words are unwrapped.”</li>
            </ul>
            <dl><dd>Two lines of one quote,</dd><dd>joined with a newline.</dd></dl>
            <dl><dd>A good line of text here.</dd><dd><a href="/wiki/X">only a link</a></dd></dl>
            <h2>See also</h2>
            <ul><li>This list is navigation, not quotes.</li></ul>
            <h3>Misattributed</h3>
            <ul><li>Insanity is doing the same thing over and over.</li></ul>
        </div>
    "#;

    #[test]
    fn extracts_in_document_order() {
        let quotes = extract(PAGE, 20);
        assert_eq!(
            quotes,
            vec![
                "Imagination is more important than knowledge.".to_string(),
                "Curly marks around words are unwrapped.".to_string(),
                "Two lines of one quote,\njoined with a newline.".to_string(),
                "Insanity is doing the same thing over and over.".to_string(),
            ]
        );
    }

    #[test]
    fn max_quotes_zero_is_empty() {
        assert!(extract(PAGE, 0).is_empty());
    }

    #[test]
    fn stops_at_max_quotes() {
        let quotes = extract(PAGE, 2);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1], "Curly marks around words are unwrapped.");
    }

    #[test]
    fn length_never_exceeds_max() {
        for max in 0..6 {
            assert!(extract(PAGE, max).len() <= max);
        }
    }

    #[test]
    fn lowercase_candidate_is_excluded() {
        let quotes = extract("<div><ul><li>the cat sat.</li><li>The cat sat down.</li></ul></div>", 10);
        assert_eq!(quotes, vec!["The cat sat down.".to_string()]);
    }

    #[test]
    fn small_descendant_excludes_candidate() {
        let quotes = extract(
            "<div><ul><li>Perfectly good quote text. <b><small>citation</small></b></li></ul></div>",
            10,
        );
        assert!(quotes.is_empty());
    }

    #[test]
    fn dl_with_link_only_dd_contributes_nothing() {
        let quotes = extract(
            r#"<div><dl><dd>A perfectly valid quotation here.</dd><dd><a href="/x">Link</a></dd></dl></div>"#,
            10,
        );
        assert!(quotes.is_empty());
    }

    #[test]
    fn heading_skip_follows_blocked_and_allowed_headings() {
        let doc = Html::parse_fragment(
            "<div>\
                <h2>See Also</h2><ul><li>Skipped though perfectly valid.</li></ul>\
                <h2>Life</h2><ul><li>Kept because life is allowed.</li></ul>\
             </div>",
        );
        let quotes = extract_quotes(&doc, 10, &["see also"], NO_WORDS);
        assert_eq!(quotes, vec!["Kept because life is allowed.".to_string()]);
    }

    #[test]
    fn heading_prefixes_are_case_insensitive() {
        let doc = Html::parse_fragment(
            "<div><h2>Life</h2><ul><li>First valid quote here.</li></ul>\
             <h3>ABOUT Him</h3><ul><li>Said about him by others.</li></ul></div>",
        );
        let quotes = extract_quotes(&doc, 10, &["About"], NO_WORDS);
        assert_eq!(quotes, vec!["First valid quote here.".to_string()]);
    }

    #[test]
    fn no_headings_means_unguarded_scan() {
        let quotes = extract("<div><ul><li>Without headings this is kept.</li></ul></div>", 10);
        assert_eq!(quotes, vec!["Without headings this is kept.".to_string()]);
    }

    #[test]
    fn content_before_first_heading_is_skipped() {
        let quotes = extract(
            "<div><ul><li>Before any heading at all.</li></ul><h2>Quotes</h2></div>",
            10,
        );
        assert!(quotes.is_empty());
    }

    #[test]
    fn toc_heading_does_not_start_guard() {
        let quotes = extract(
            r#"<div><div id="toc"><h2>Contents</h2></div><ul><li>Kept despite the toc.</li></ul></div>"#,
            10,
        );
        assert_eq!(quotes, vec!["Kept despite the toc.".to_string()]);
    }

    #[test]
    fn list_outside_div_is_ignored() {
        let quotes = extract("<ul><li>Top level list item text.</li></ul>", 10);
        assert!(quotes.is_empty());
    }

    #[test]
    fn ordered_lists_are_ignored() {
        let quotes = extract("<div><ol><li>Ordered list item text.</li></ol></div>", 10);
        assert!(quotes.is_empty());
    }

    #[test]
    fn blocklisted_word_excludes_candidate() {
        let quotes = extract("<div><ul><li>As quoted in the paper.</li></ul></div>", 10);
        assert!(quotes.is_empty());
    }

    #[test]
    fn empty_document_yields_nothing() {
        let doc = Html::parse_fragment("");
        assert!(extract_quotes(&doc, 10, NO_HEADINGS, NO_WORDS).is_empty());
    }

    #[test]
    fn document_is_reusable_across_calls() {
        let doc = Html::parse_fragment(PAGE);
        let first = extract_quotes(&doc, 20, EN_HEADINGS, EN_WORDS);
        let unfiltered = extract_quotes(&doc, 20, NO_HEADINGS, NO_WORDS);
        let again = extract_quotes(&doc, 20, EN_HEADINGS, EN_WORDS);
        assert_eq!(first, again);
        assert!(unfiltered.len() > first.len());
    }

    #[test]
    fn policy_strips_trailing_credit() {
        let doc = Html::parse_fragment("<div><ul><li>Stay hungry, stay foolish. –</li></ul></div>");
        let table = LanguageTable::builtin();
        let en = table.get("en").unwrap();
        assert_eq!(
            extract_quotes_with(&doc, 5, en),
            vec!["Stay hungry, stay foolish.".to_string()]
        );
        let de = table.get("de").unwrap();
        assert_eq!(
            extract_quotes_with(&doc, 5, de),
            vec!["Stay hungry, stay foolish. –".to_string()]
        );
    }
}
