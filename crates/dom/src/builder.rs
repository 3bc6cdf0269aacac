use crate::document::{CreatableDocument, TextOf};
use crate::element::Element;
use crate::node_list::NodeList;

/// A renderer that owns exactly one document and builds it top-down.
///
/// Implementors only store the document; the provided methods give them the element,
/// text and node-list factories so that rendering code never reaches into the document
/// directly.
///
/// ```ignore
/// struct Greeting { document: SimpleDocument }
///
/// impl DocumentBuilder for Greeting {
///     type Document = SimpleDocument;
///     fn document(&self) -> &SimpleDocument { &self.document }
///     fn document_mut(&mut self) -> &mut SimpleDocument { &mut self.document }
/// }
///
/// let mut builder = Greeting { document: SimpleDocument::new("root") };
/// let document = builder.build_document("greeting", |this, root| {
///     root.append_child(this.create_text_node("hello"));
/// });
/// ```
pub trait DocumentBuilder {
    type Document: CreatableDocument;

    fn document(&self) -> &Self::Document;

    fn document_mut(&mut self) -> &mut Self::Document;

    /// Creates a fresh document, hands its root element to `configure`, stores the
    /// document and returns it.
    ///
    /// `configure` runs synchronously and exactly once. It receives the builder itself
    /// so that it can call the builder's own fragment functions while filling the root.
    fn build_document<F>(&mut self, root_tag_name: &str, configure: F) -> &Self::Document
    where
        Self: Sized,
        Self::Document: Sized,
        F: FnOnce(&Self, &mut Element<TextOf<Self::Document>>),
    {
        let mut document = Self::Document::with_root(root_tag_name);
        configure(self, document.document_element_mut());
        *self.document_mut() = document;
        self.document()
    }

    fn create_element(&self, tag_name: &str) -> Element<TextOf<Self::Document>> {
        self.document().create_element(tag_name)
    }

    fn create_text_node(&self, content: &str) -> TextOf<Self::Document> {
        self.document().create_text_node(content)
    }

    fn create_node_list(&self) -> NodeList<TextOf<Self::Document>> {
        self.document().create_node_list()
    }
}
