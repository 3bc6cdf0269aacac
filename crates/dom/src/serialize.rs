//! XML serialization of element trees.
//!
//! Output is a pure function of the tree: attributes are written in insertion order,
//! attribute values and text leaves are escaped for the five XML-reserved characters,
//! and an element without children is written in self-closing form.

use crate::element::Element;
use crate::node::{Node, TextNode};
use crate::node_list::{NodeLike, NodeList};
use quick_xml::escape::escape;
use std::fmt::{self, Write};

/// The declaration line written ahead of a document's root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub(crate) fn write_element<T: TextNode, W: Write>(element: &Element<T>, out: &mut W) -> fmt::Result {
    out.write_char('<')?;
    out.write_str(element.tag_name())?;
    for (name, value) in element.attributes() {
        write!(out, " {}=\"{}\"", name, escape(value))?;
    }
    if !element.has_children() {
        return out.write_str("/>");
    }
    out.write_char('>')?;
    for child in element.children() {
        write_node(child, out)?;
    }
    write!(out, "</{}>", element.tag_name())
}

pub(crate) fn write_node<T: TextNode, W: Write>(node: &Node<T>, out: &mut W) -> fmt::Result {
    match node {
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => out.write_str(&escape(text.content())),
    }
}

impl<T: TextNode> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(self, f)
    }
}

impl<T: TextNode> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

/// Writes the members back to back; a list has no markup of its own.
impl<T: TextNode> fmt::Display for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self {
            write_node(node, f)?;
        }
        Ok(())
    }
}

impl<T: TextNode> fmt::Display for NodeLike<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLike::List(list) => fmt::Display::fmt(list, f),
            NodeLike::Element(element) => write_element(element, f),
            NodeLike::Text(text) => f.write_str(&escape(text.content())),
        }
    }
}
