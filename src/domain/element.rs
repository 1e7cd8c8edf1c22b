//! Element tree
//!
//! A small labeled node tree used as the render target of the view layer.
//! Nodes carry a tag name, an ordered attribute map and children; text is a
//! leaf. Nothing here knows about terminals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

/// Build an element node from a tag, attributes and children.
///
/// ```rust
/// use launchfinder::domain::element::{el, text};
///
/// let link = el("a", [("href", "/?id=1")], [text("Falcon 9")]);
/// assert_eq!(link.text_content(), "Falcon 9");
/// assert_eq!(link.attr("href"), Some("/?id=1"));
/// ```
pub fn el<K, V>(
    tag: &str,
    attrs: impl IntoIterator<Item = (K, V)>,
    children: impl IntoIterator<Item = Node>,
) -> Node
where
    K: Into<String>,
    V: Into<String>,
{
    Node::Element(Element {
        tag: tag.to_string(),
        attrs: attrs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
        children: children.into_iter().collect(),
    })
}

/// Build a text leaf.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Attribute list with no entries, for `el(tag, no_attrs(), ..)`.
pub fn no_attrs() -> [(&'static str, String); 0] {
    []
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Drop every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.as_element().is_some_and(|e| e.has_class(class))
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<String>(),
        }
    }

    /// Depth-first, pre-order walk over every node matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Node) -> bool, found: &mut Vec<&'a Node>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect(pred, found);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        self.find_all(&|n| n.has_class(class)).into_iter().next()
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Node> {
        self.find_all(&|n| n.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.find_all(&|n| n.tag() == Some(tag)).into_iter().next()
    }

    /// `href` of every link, in document order.
    pub fn links(&self) -> Vec<String> {
        self.find_all(&|n| n.tag() == Some("a"))
            .into_iter()
            .filter_map(|n| n.attr("href").map(str::to_string))
            .collect()
    }
}
