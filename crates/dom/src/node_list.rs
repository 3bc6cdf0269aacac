//! Node lists and the `NodeLike` union.
//!
//! A [`NodeList`] is an ordered group of sibling nodes with no wrapping element. It
//! lets a builder function return zero, one, or many nodes through a single type:
//! whenever a list is appended to a container its members are spliced in place, so a
//! list never shows up in a finished tree.

use crate::element::Element;
use crate::node::{Node, Text, TextNode};

/// An ordered group of sibling nodes without a wrapping element.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeList<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T: TextNode> NodeList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<Node<T>> {
        self.nodes
    }

    /// Concatenated text of every member and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.collect_text(&mut out);
        }
        out
    }
}

impl<T: TextNode> FromIterator<Node<T>> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for NodeList<T> {
    type Item = Node<T>;
    type IntoIter = std::vec::IntoIter<Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a Node<T>;
    type IntoIter = std::slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Anything that can be appended where a child is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeLike<T> {
    List(NodeList<T>),
    Element(Element<T>),
    Text(T),
}

impl<T: TextNode> NodeLike<T> {
    pub fn text_content(&self) -> String {
        match self {
            NodeLike::List(list) => list.text_content(),
            NodeLike::Element(element) => element.text_content(),
            NodeLike::Text(text) => text.content().to_string(),
        }
    }
}

impl<T> From<NodeList<T>> for NodeLike<T> {
    fn from(list: NodeList<T>) -> Self {
        NodeLike::List(list)
    }
}

impl<T> From<Element<T>> for NodeLike<T> {
    fn from(element: Element<T>) -> Self {
        NodeLike::Element(element)
    }
}

impl<T> From<Node<T>> for NodeLike<T> {
    fn from(node: Node<T>) -> Self {
        match node {
            Node::Element(element) => NodeLike::Element(element),
            Node::Text(text) => NodeLike::Text(text),
        }
    }
}

impl From<Text> for NodeLike<Text> {
    fn from(text: Text) -> Self {
        NodeLike::Text(text)
    }
}

impl From<&str> for NodeLike<Text> {
    fn from(s: &str) -> Self {
        NodeLike::Text(Text::new(s))
    }
}

impl From<String> for NodeLike<String> {
    fn from(s: String) -> Self {
        NodeLike::Text(s)
    }
}

impl From<&str> for NodeLike<String> {
    fn from(s: &str) -> Self {
        NodeLike::Text(s.to_string())
    }
}

/// The child-appending API shared by elements, node lists and documents.
///
/// Implementors only expose their child vector; every append operation, including
/// the flattening of node lists, is provided here.
pub trait NodeContainer<T: TextNode> {
    fn child_nodes_mut(&mut self) -> &mut Vec<Node<T>>;

    /// Appends `node`, splicing the members of a [`NodeList`] in order.
    fn append_child(&mut self, node: impl Into<NodeLike<T>>) -> &mut Self {
        let nodes = self.child_nodes_mut();
        match node.into() {
            NodeLike::List(list) => nodes.extend(list.into_nodes()),
            NodeLike::Element(element) => nodes.push(Node::Element(element)),
            NodeLike::Text(text) => nodes.push(Node::Text(text)),
        }
        self
    }

    /// Runs `configure` against `node` and then appends it.
    fn append_child_with<N, F>(&mut self, mut node: N, configure: F) -> &mut Self
    where
        N: Into<NodeLike<T>>,
        F: FnOnce(&mut N),
    {
        configure(&mut node);
        self.append_child(node)
    }

    /// Creates an element, configures it, appends it and returns a handle to it.
    fn append_element<F>(&mut self, tag_name: &str, configure: F) -> &mut Element<T>
    where
        F: FnOnce(&mut Element<T>),
    {
        let mut element = Element::new(tag_name);
        configure(&mut element);
        let nodes = self.child_nodes_mut();
        nodes.push(Node::Element(element));
        let Some(Node::Element(element)) = nodes.last_mut() else {
            unreachable!("the last child is the element pushed above");
        };
        element
    }

    fn append_text_node(&mut self, content: &str) -> &mut Self {
        self.append_text_node_with(content, |_| {})
    }

    /// Creates a text leaf, runs `configure` against it and appends it.
    fn append_text_node_with<F>(&mut self, content: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut T),
    {
        let mut text = T::from_content(content);
        configure(&mut text);
        self.child_nodes_mut().push(Node::Text(text));
        self
    }
}

impl<T: TextNode> NodeContainer<T> for NodeList<T> {
    fn child_nodes_mut(&mut self) -> &mut Vec<Node<T>> {
        &mut self.nodes
    }
}

/// Passes a freshly made node through `configure` and hands it back.
pub fn configure<N, F>(mut node: N, configure: F) -> N
where
    F: FnOnce(&mut N),
{
    configure(&mut node);
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(tags: &[&str]) -> NodeList<Text> {
        let mut list = NodeList::new();
        for tag in tags {
            list.append_element(tag, |_| {});
        }
        list
    }

    fn tags_of(parent: &Element<Text>) -> Vec<String> {
        parent
            .children()
            .iter()
            .filter_map(|c| c.as_element())
            .map(|e| e.tag_name().to_string())
            .collect()
    }

    #[test]
    fn test_list_is_flattened_into_parent() {
        let mut parent = Element::<Text>::new("p");
        parent.append_child(list_of(&["a", "b", "c"]));
        assert_eq!(parent.children().len(), 3);
        assert_eq!(tags_of(&parent), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut parent = Element::<Text>::new("p");
        parent.append_element("x", |_| {});
        parent.append_child(NodeList::<Text>::new());
        assert_eq!(tags_of(&parent), vec!["x"]);
    }

    #[test]
    fn test_append_element_returns_inserted_element() {
        let mut parent = Element::<Text>::new("p");
        parent.append_text_node("lead");
        parent.append_element("x", |_| {}).set_attribute("id", "late");
        assert_eq!(parent.children().len(), 2);
        assert_eq!(parent.children()[1].as_element().and_then(|e| e.get_attribute("id")), Some("late"));
    }

    #[test]
    fn test_append_text_node_with_configures_before_insertion() {
        let mut parent = Element::<String>::new("p");
        parent.append_text_node_with("draft", |text| text.push_str(" final"));
        parent.append_text_node_with("x", |text| text.clear());
        assert_eq!(parent.children()[0].as_text(), Some("draft final"));
        assert_eq!(parent.children()[1].as_text(), Some(""));
    }

    #[test]
    fn test_nested_lists_flatten_in_order() {
        let mut outer = NodeList::<Text>::new();
        outer.append_element("a", |_| {});
        outer.append_child(list_of(&["b", "c"]));
        outer.append_text_node("d");
        let mut parent = Element::<Text>::new("p");
        parent.append_element("first", |_| {});
        parent.append_child(outer);
        assert_eq!(parent.children().len(), 5);
        assert_eq!(tags_of(&parent), vec!["first", "a", "b", "c"]);
        assert_eq!(parent.children()[4].as_text(), Some("d"));
    }

    #[test]
    fn test_append_element_returns_inserted_handle() {
        let mut parent = Element::<Text>::new("p");
        let child = parent.append_element("c", |c| {
            c.set_attribute("k", "1");
        });
        child.set_attribute("k", "2");
        let inserted = parent.children()[0].as_element().unwrap();
        assert_eq!(inserted.get_attribute("k"), Some("2"));
    }

    #[test]
    fn test_append_child_with_runs_configurator_before_insertion() {
        let mut parent = Element::<Text>::new("p");
        parent.append_child_with(Element::new("c"), |c: &mut Element<Text>| {
            c.set_attribute("configured", "yes");
        });
        let inserted = parent.children()[0].as_element().unwrap();
        assert_eq!(inserted.get_attribute("configured"), Some("yes"));
    }

    #[test]
    fn test_configurator_runs_exactly_once() {
        let mut calls = 0;
        let mut list = NodeList::<String>::new();
        list.append_element("x", |_| calls += 1);
        assert_eq!(calls, 1);
        let element = configure(Element::<String>::new("y"), |_| calls += 1);
        assert_eq!(calls, 2);
        assert_eq!(element.tag_name(), "y");
    }

    #[test]
    fn test_string_backed_list() {
        let mut list = NodeList::<String>::new();
        list.append_child("plain");
        list.append_text_node(" text");
        assert_eq!(list.text_content(), "plain text");
    }
}
