//! Node types for the source tree

use serde::{Deserialize, Serialize};

/// A node in the source tree
///
/// Nodes are built by a front-end parser and only read by the mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Element name as it appears in the document
    pub name: String,

    /// Text content (empty when the element carries none)
    #[serde(default)]
    pub text: String,

    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new node without text or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a leaf node carrying text
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Add a child node, builder style
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append text content
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Find the first child by name
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Find all children by name
    pub fn find_children(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::new("colours")
            .with_child(Node::with_text("colour", "Lapiz Blue"))
            .with_child(Node::with_text("colour", "Oryx White"))
            .with_child(Node::with_text("finish", "Matte"))
    }

    #[test]
    fn test_node_creation() {
        let node = Node::new("car");
        assert_eq!(node.name, "car");
        assert!(node.text.is_empty());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_children_keep_document_order() {
        let node = sample();
        let names: Vec<&str> = node.children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(names, vec!["Lapiz Blue", "Oryx White", "Matte"]);
    }

    #[test]
    fn test_find_child() {
        let node = sample();
        assert_eq!(node.find_child("colour").unwrap().text, "Lapiz Blue");
        assert!(node.find_child("missing").is_none());
    }

    #[test]
    fn test_find_children() {
        let node = sample();
        assert_eq!(node.find_children("colour").len(), 2);
        assert_eq!(node.find_children("finish").len(), 1);
    }

    #[test]
    fn test_push_text_appends() {
        let mut node = Node::new("name");
        node.push_text("19-inch ").push_text("Wheels");
        assert_eq!(node.text, "19-inch Wheels");
    }

    #[test]
    fn test_node_deserializes_with_defaults() {
        let node: Node = serde_json::from_str(r#"{"name":"model"}"#).unwrap();
        assert_eq!(node, Node::new("model"));
    }
}
