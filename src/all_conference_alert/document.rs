use ego_tree::{NodeId, NodeRef};
use regex::Regex;
use scraper::{ElementRef, Html, Node};

/// Elements whose text is never rendered
const HIDDEN_TEXT_PARENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A trimmed, non-empty line of visible text and the text node it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub node: NodeId,
}

impl TextLine {
    pub fn new(text: impl Into<String>, node: NodeId) -> Self {
        Self {
            text: text.into(),
            node,
        }
    }
}

pub fn root(document: &Html) -> NodeId {
    document.tree.root().id()
}

/// Walks up at most `levels` parents, stopping early at the document root.
pub fn climb(document: &Html, start: NodeId, levels: usize) -> NodeId {
    let Some(mut current) = document.tree.get(start) else {
        return start;
    };

    for _ in 0..levels {
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    current.id()
}

/// Climbs from a text node's enclosing element.
pub fn climb_from_text(document: &Html, text_node: NodeId, levels: usize) -> NodeId {
    climb(document, text_node, levels + 1)
}

/// Every visible text line under `scope`, in document order.
pub fn text_lines(document: &Html, scope: NodeId) -> Vec<TextLine> {
    let Some(scope) = document.tree.get(scope) else {
        return Vec::new();
    };

    scope
        .descendants()
        .filter_map(visible_text)
        .flat_map(|(node, content)| {
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(move |line| TextLine::new(line, node))
        })
        .collect()
}

/// First visible text node under `scope` matching the pattern.
pub fn find_text_node(document: &Html, scope: NodeId, pattern: &Regex) -> Option<NodeId> {
    document
        .tree
        .get(scope)?
        .descendants()
        .filter_map(visible_text)
        .find(|(_, content)| pattern.is_match(content))
        .map(|(node, _)| node)
}

pub fn anchors(document: &Html, scope: NodeId) -> Vec<ElementRef<'_>> {
    document
        .tree
        .get(scope)
        .into_iter()
        .flat_map(|scope| scope.descendants())
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
        .collect()
}

fn visible_text(node: NodeRef<'_, Node>) -> Option<(NodeId, &str)> {
    let Node::Text(text) = node.value() else {
        return None;
    };

    let hidden = node
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| HIDDEN_TEXT_PARENTS.contains(&parent.value().name()));

    if hidden {
        None
    } else {
        Some((node.id(), &**text))
    }
}
