use crate::node::{Node, Text, TextNode};
use crate::node_list::NodeContainer;
use indexmap::IndexMap;

/// A tagged node with attributes and ordered children.
///
/// The tag name and attribute names are opaque strings: nothing here validates them,
/// and values that need escaping are stored verbatim until serialization. Attributes
/// keep their insertion order so that output is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<T> {
    tag_name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node<T>>,
}

/// An element whose text leaves are plain strings.
pub type SimpleElement = Element<String>;

/// An element whose text leaves are immutable [`Text`] nodes.
pub type TextElement = Element<Text>;

impl<T: TextNode> Element<T> {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Returns the value of `name`, or `None` if it was never set.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets `name` to `value`, replacing any previous value in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Direct child elements with the given tag name.
    pub fn child_elements<'a>(&'a self, tag_name: &'a str) -> impl Iterator<Item = &'a Element<T>> + 'a {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(move |e| e.tag_name == tag_name)
    }

    /// Concatenated text of every descendant text leaf, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

impl<T: TextNode> NodeContainer<T> for Element<T> {
    fn child_nodes_mut(&mut self) -> &mut Vec<Node<T>> {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_is_empty() {
        let element = SimpleElement::new("fo:block");
        assert_eq!(element.tag_name(), "fo:block");
        assert_eq!(element.attributes().count(), 0);
        assert!(!element.has_children());
    }

    #[test]
    fn test_absent_attribute_is_not_empty_string() {
        let mut element = SimpleElement::new("fo:block");
        assert_eq!(element.get_attribute("id"), None);
        element.set_attribute("id", "");
        assert_eq!(element.get_attribute("id"), Some(""));
    }

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut element = TextElement::new("fo:block");
        element.set_attribute("a", "1").set_attribute("b", "2");
        element.set_attribute("a", "3");
        let attributes: Vec<_> = element.attributes().collect();
        assert_eq!(attributes, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_arbitrary_names_are_accepted() {
        let mut element = TextElement::new("not a <valid> tag");
        element.set_attribute("weird name\"", "<&>");
        assert_eq!(element.get_attribute("weird name\""), Some("<&>"));
    }

    #[test]
    fn test_child_elements_by_tag() {
        let mut element = TextElement::new("fo:root");
        element.append_element("fo:bookmark", |_| {});
        element.append_text_node("x");
        element.append_element("fo:flow", |_| {});
        element.append_element("fo:bookmark", |_| {});
        assert_eq!(element.child_elements("fo:bookmark").count(), 2);
    }
}
