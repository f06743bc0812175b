// ABOUTME: Read-only filtered view over a parsed HTML tree that hides chosen subtrees.
// ABOUTME: Replaces in-place node removal so one parsed document can serve many extraction calls.

use std::collections::HashSet;

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};

/// Id of the table-of-contents container MediaWiki emits above the first heading.
pub const TOC_ID: &str = "toc";

/// Tag name of an element node, `None` for text, comments and the document root.
pub fn tag_name<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_element().map(|el| el.name())
}

/// A document with some subtrees treated as absent.
///
/// Hidden nodes are skipped by every traversal, text gathering and child
/// lookup of the view. The underlying `Html` is never touched.
#[derive(Debug, Clone)]
pub struct PrunedView<'a> {
    doc: &'a Html,
    hidden: HashSet<NodeId>,
}

impl<'a> PrunedView<'a> {
    /// View of `doc` with every `div#toc` hidden.
    pub fn new(doc: &'a Html) -> Self {
        let hidden = doc
            .tree
            .root()
            .descendants()
            .filter(|n| {
                n.value()
                    .as_element()
                    .is_some_and(|el| el.name() == "div" && el.id() == Some(TOC_ID))
            })
            .map(|n| n.id())
            .collect();
        Self { doc, hidden }
    }

    /// A copy of this view that additionally hides `ids`.
    pub fn hiding<I>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut hidden = self.hidden.clone();
        hidden.extend(ids);
        Self {
            doc: self.doc,
            hidden,
        }
    }

    pub fn is_hidden(&self, node: NodeRef<'a, Node>) -> bool {
        self.hidden.contains(&node.id())
    }

    /// Visible children of `node`, text and comment nodes included.
    pub fn children(&self, node: NodeRef<'a, Node>) -> impl Iterator<Item = NodeRef<'a, Node>> + '_ {
        node.children().filter(move |c| !self.is_hidden(*c))
    }

    /// Visible descendants of `node` in document order, `node` excluded.
    pub fn descendants(&self, node: NodeRef<'a, Node>) -> Visible<'_, 'a> {
        let mut walk = Visible {
            view: self,
            stack: Vec::new(),
        };
        walk.push_children(node);
        walk
    }

    /// Every visible node of the document in document order.
    pub fn nodes(&self) -> Visible<'_, 'a> {
        self.descendants(self.doc.tree.root())
    }

    /// Concatenated visible text beneath `node`.
    pub fn text(&self, node: NodeRef<'a, Node>) -> String {
        self.descendants(node)
            .filter_map(|n| n.value().as_text())
            .map(|t| &**t)
            .collect()
    }

    /// True if a visible element named `tag` sits anywhere beneath `node`.
    pub fn has_descendant_tag(&self, node: NodeRef<'a, Node>, tag: &str) -> bool {
        self.descendants(node).any(|n| tag_name(n) == Some(tag))
    }
}

/// Pre-order walk over the visible part of a subtree.
pub struct Visible<'v, 'a> {
    view: &'v PrunedView<'a>,
    stack: Vec<NodeRef<'a, Node>>,
}

impl<'a> Visible<'_, 'a> {
    fn push_children(&mut self, node: NodeRef<'a, Node>) {
        let children: Vec<_> = self.view.children(node).collect();
        self.stack.extend(children.into_iter().rev());
    }
}

impl<'a> Iterator for Visible<'_, 'a> {
    type Item = NodeRef<'a, Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_children(node);
        Some(node)
    }
}
