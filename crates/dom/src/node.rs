//! Leaf and child node types shared by every document backing.

use crate::element::Element;
use std::fmt;

/// A text leaf that can be stored as the child of an [`Element`].
///
/// Two implementations ship with this crate: [`Text`], an immutable wrapper used by
/// full documents, and `String`, which lets the minimal backing store plain strings
/// as leaves without any bookkeeping.
pub trait TextNode: Clone + fmt::Debug + PartialEq {
    /// Builds a leaf holding `content` verbatim.
    fn from_content(content: &str) -> Self;

    /// Returns the literal character content of the leaf.
    fn content(&self) -> &str;
}

/// An immutable text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(Box<str>);

impl Text {
    pub fn new(content: impl Into<Box<str>>) -> Self {
        Self(content.into())
    }

    pub fn content(&self) -> &str {
        &self.0
    }
}

impl TextNode for Text {
    fn from_content(content: &str) -> Self {
        Self::new(content)
    }

    fn content(&self) -> &str {
        &self.0
    }
}

impl TextNode for String {
    fn from_content(content: &str) -> Self {
        content.to_string()
    }

    fn content(&self) -> &str {
        self
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A child stored inside an element: either a nested element or a text leaf.
///
/// Node lists never appear here; they are flattened when appended.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Element(Element<T>),
    Text(T),
}

impl<T: TextNode> Node<T> {
    pub fn as_element(&self) -> Option<&Element<T>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element<T>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Element(_) => None,
            Node::Text(text) => Some(text.content()),
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.content().to_string(),
        }
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.collect_text(out),
            Node::Text(text) => out.push_str(text.content()),
        }
    }
}

impl<T> From<Element<T>> for Node<T> {
    fn from(element: Element<T>) -> Self {
        Node::Element(element)
    }
}
