//! Root element owner
//!
//! Exactly one view subtree is mounted at a time. Mounting replaces the
//! previous subtree wholesale; nothing of it survives the remount.

use crate::domain::element::{Element, Node};

pub const ROOT_TAG: &str = "body";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShell {
    root: Element,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

impl AppShell {
    pub fn new() -> Self {
        Self {
            root: Element::new(ROOT_TAG),
        }
    }

    /// Replace the mounted subtree with `node`.
    pub fn mount(&mut self, node: Node) {
        self.root.clear();
        self.root.append(node);
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The currently mounted subtree, if any
    pub fn mounted(&self) -> Option<&Node> {
        self.root.children.first()
    }
}
