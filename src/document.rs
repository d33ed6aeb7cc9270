use crate::{
    Element, Node, WriteOptions,
    error::XmlResult,
    to_xml::{RenderContext, RenderXml, format_version},
};
use std::io::Write;
use tracing::debug;

/// The name every document root carries. It is never written.
pub const DOCUMENT_NAME: &str = "xml";

/// The root of a tree, holding the XML version.
///
/// A document writes the `<?xml version="..."?>` declaration, followed by each of its direct children.
/// Children of the document start unindented; their own children are indented one level per depth.
///
/// Other things to note:
/// - Attributes may be set on a document, but are never written
/// - A document nested inside an element still writes its own declaration, and its children unindented
/// - Closing tags of elements with children are not followed by a line break, unless
///   [`WriteOptions::newline_after_close_tag`] is set
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    version: f32,
    root: Element,
}
impl Document {
    /// Creates a new, empty document with the given XML version.
    #[must_use]
    pub fn new(version: f32) -> Self {
        Self {
            version,
            root: Element::new(DOCUMENT_NAME),
        }
    }

    /// Returns the XML version of the document.
    #[must_use]
    pub fn version(&self) -> f32 {
        self.version
    }

    /// Returns the name of the document root; always `xml`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// Appends a top-level child.
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.root.add_child(child);
    }

    /// Sets an attribute on the document root. Document attributes are stored, but never written.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.root.add_attribute(name, value);
    }

    /// Returns the top-level children of the document.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        self.root.children()
    }

    /// Returns the top-level children of the document for modification.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        self.root.children_mut()
    }

    /// Returns the element backing the document root.
    #[must_use]
    pub fn as_element(&self) -> &Element {
        &self.root
    }

    /// Write this document as UTF-8 encoded XML, using the default options.
    ///
    /// # Errors
    /// Fails if the tree nests deeper than the default depth limit.
    ///
    /// # Example
    /// ```rust
    /// use xmlwrite::{Document, Element};
    ///
    /// let inner = Element::with_inner_value("inner", "v");
    /// let mut outer = Element::new("outer");
    /// outer.add_child(inner);
    ///
    /// let mut document = Document::new(1.0);
    /// document.add_child(outer);
    ///
    /// let data = document.xml_data().unwrap();
    /// assert_eq!(data, b"<?xml version=\"1.0\"?>\n<outer>\n\t<inner>v</inner>\n</outer>");
    /// ```
    pub fn xml_data(&self) -> XmlResult<Vec<u8>> {
        self.xml_data_with_options(&WriteOptions::default())
    }

    /// Write this document as UTF-8 encoded XML.
    ///
    /// # Errors
    /// Fails if the tree nests deeper than `options.max_depth`.
    pub fn xml_data_with_options(&self, options: &WriteOptions) -> XmlResult<Vec<u8>> {
        let mut buffer = vec![];
        self.to_xml_with_writer(&mut buffer, options)?;

        debug!(bytes = buffer.len(), "document written");
        Ok(buffer)
    }

    /// Create a formatted XML string from this document.
    ///
    /// # Errors
    /// Fails if the tree nests deeper than `options.max_depth`.
    pub fn to_xml(&self, options: &WriteOptions) -> XmlResult<String> {
        let buffer = self.xml_data_with_options(options)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Write this document as formatted XML using the given writer.
    ///
    /// See [`Document::to_xml`] for more details.
    ///
    /// # Errors
    /// Fails if the writer fails, or if the tree nests deeper than `options.max_depth`.
    pub fn to_xml_with_writer<W: Write>(
        &self,
        writer: &mut W,
        options: &WriteOptions,
    ) -> XmlResult<()> {
        crate::to_xml::write_xml(writer, self, options)
    }
}
impl RenderXml for Document {
    fn render_into<'a>(
        &'a self,
        writer: &mut dyn Write,
        _indent_level: usize,
        ctx: &mut RenderContext<'a>,
    ) -> XmlResult<()> {
        ctx.enter(self.name())?;

        let version = format_version(self.version);
        ctx.write_str(writer, &format!("<?xml version=\"{version}\"?>\n"))?;

        for child in self.children() {
            child.render_into(writer, 0, ctx)?;
        }

        ctx.exit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_MAX_DEPTH, PlainNode, XmlErrorKind};

    fn to_string(document: &Document) -> String {
        document.to_xml(&WriteOptions::default()).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let document = Document::new(1.0);
        assert_eq!(document.name(), "xml");
        assert_eq!(to_string(&document), "<?xml version=\"1.0\"?>\n");
    }

    #[test]
    fn test_version_formatting() {
        assert_eq!(to_string(&Document::new(1.1)), "<?xml version=\"1.1\"?>\n");
        assert_eq!(to_string(&Document::new(2.0)), "<?xml version=\"2.0\"?>\n");
    }

    #[test]
    fn test_nesting_and_indentation() {
        let mut outer = Element::new("outer");
        outer.add_child(Element::with_inner_value("inner", "v"));

        let mut document = Document::new(1.0);
        document.add_child(outer);

        assert_eq!(
            document.xml_data().unwrap(),
            b"<?xml version=\"1.0\"?>\n<outer>\n\t<inner>v</inner>\n</outer>"
        );
    }

    #[test]
    fn test_multiple_children_unindented() {
        let mut document = Document::new(1.0);
        document.add_child(Element::new("first"));
        document.add_child(Element::with_inner_value("second", "2"));

        assert_eq!(
            to_string(&document),
            "<?xml version=\"1.0\"?>\n<first />\n<second>2</second>\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let mut outer = Element::new("outer");
        outer.add_attribute("id", "1");
        outer.add_child(Element::new("inner"));
        let mut document = Document::new(1.0);
        document.add_child(outer);

        let first = document.xml_data().unwrap();
        let second = document.xml_data().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rerender_sees_mutation() {
        let mut document = Document::new(1.0);
        document.add_child(Element::new("a"));
        let before = to_string(&document);

        document.add_child(Element::new("b"));
        let after = to_string(&document);

        assert_ne!(before, after);
        assert!(after.ends_with("<a />\n<b />\n"));
    }

    #[test]
    fn test_attributes_not_written() {
        let mut document = Document::new(1.0);
        document.add_attribute("encoding", "UTF-8");
        document.add_child(Element::new("root"));

        assert_eq!(document.as_element().attribute("encoding"), Some("UTF-8"));
        assert_eq!(to_string(&document), "<?xml version=\"1.0\"?>\n<root />\n");
    }

    #[test]
    fn test_nested_document_ignores_indent() {
        let mut nested = Document::new(1.0);
        nested.add_child(Element::new("inner"));

        let mut outer = Element::new("outer");
        outer.add_child(nested);

        let mut document = Document::new(1.0);
        document.add_child(outer);

        assert_eq!(
            to_string(&document),
            "<?xml version=\"1.0\"?>\n<outer>\n<?xml version=\"1.0\"?>\n<inner />\n</outer>"
        );
    }

    #[test]
    fn test_plain_child_writes_nothing() {
        let mut document = Document::new(1.0);
        document.add_child(PlainNode::new("nothing"));
        document.add_child(Element::new("root"));

        assert_eq!(to_string(&document), "<?xml version=\"1.0\"?>\n<root />\n");
    }

    fn element_chain(levels: usize) -> Element {
        let mut element = Element::new("leaf");
        for _ in 1..levels {
            let mut parent = Element::new("level");
            parent.add_child(element);
            element = parent;
        }
        element
    }

    #[test]
    fn test_nested_documents_count_towards_depth() {
        let mut inner = Document::new(1.0);
        inner.add_child(Element::new("leaf"));
        let mut middle = Document::new(1.0);
        middle.add_child(inner);
        let mut document = Document::new(1.0);
        document.add_child(middle);

        let options = WriteOptions::default().max_depth(2);
        let err = document.xml_data_with_options(&options).unwrap_err();
        assert!(matches!(err.kind(), XmlErrorKind::DepthExceeded { limit: 2 }));
        assert_eq!(err.context.path, vec!["xml", "xml", "xml"]);

        let options = WriteOptions::default().max_depth(4);
        assert!(document.xml_data_with_options(&options).is_ok());
    }

    #[test]
    fn test_long_document_chain_stops_at_limit() {
        let mut document = Document::new(1.0);
        for _ in 0..200 {
            let mut parent = Document::new(1.0);
            parent.add_child(document);
            document = parent;
        }

        let options = WriteOptions::default().max_depth(4);
        let err = document.xml_data_with_options(&options).unwrap_err();
        assert!(matches!(err.kind(), XmlErrorKind::DepthExceeded { limit: 4 }));
        assert_eq!(err.context.path.len(), 5);
    }

    #[test]
    fn test_deep_chain_renders_with_defaults() {
        let mut document = Document::new(1.0);
        document.add_child(element_chain(500));

        let xml = to_string(&document);
        assert_eq!(xml.matches("<level>").count(), 499);
        assert!(xml.contains("<leaf />\n"));
    }

    #[test]
    fn test_default_depth_limit() {
        let result = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(|| {
                let mut document = Document::new(1.0);
                document.add_child(element_chain(DEFAULT_MAX_DEPTH - 1));
                let fits = document.xml_data().is_ok();

                let mut document = Document::new(1.0);
                document.add_child(element_chain(DEFAULT_MAX_DEPTH));
                let err = document.xml_data().unwrap_err();

                (fits, err.context.path.len())
            })
            .unwrap()
            .join()
            .unwrap();

        assert!(result.0);
        assert_eq!(result.1, DEFAULT_MAX_DEPTH + 1);
    }

    #[test]
    fn test_depth_limit() {
        let mut element = Element::new("leaf");
        for _ in 0..10 {
            let mut parent = Element::new("level");
            parent.add_child(element);
            element = parent;
        }
        let mut document = Document::new(1.0);
        document.add_child(element);

        let options = WriteOptions::default().max_depth(5);
        let err = document.xml_data_with_options(&options).unwrap_err();
        assert!(matches!(err.kind(), XmlErrorKind::DepthExceeded { limit: 5 }));
        assert_eq!(err.context.path.len(), 6);

        assert!(document.xml_data().is_ok());
    }
}
