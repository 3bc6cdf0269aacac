use roxmltree::{Document, Node};

pub const FO_NAMESPACE: &str = "http://www.w3.org/1999/XSL/Format";

/// All `fo:<name>` elements in document order.
pub fn fo_elements<'a, 'input>(document: &'a Document<'input>, name: &str) -> Vec<Node<'a, 'input>> {
    document
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().namespace() == Some(FO_NAMESPACE) && n.tag_name().name() == name)
        .collect()
}

/// Text of every `fo:marker` of the given class, in document order.
pub fn marker_texts(document: &Document<'_>, class_name: &str) -> Vec<String> {
    fo_elements(document, "marker")
        .into_iter()
        .filter(|n| n.attribute("marker-class-name") == Some(class_name))
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect()
}

/// Concatenated text of a node and its descendants.
pub fn text_of(node: Node<'_, '_>) -> String {
    node.descendants().filter(|n| n.is_text()).filter_map(|n| n.text()).collect()
}
