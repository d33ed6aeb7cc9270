use super::Node;
use crate::{
    WriteOptions,
    error::XmlResult,
    to_xml::{RenderContext, RenderXml},
};
use indexmap::IndexMap;
use std::io::Write;
use tracing::{debug, trace};

/// A tag in the document tree, with a name, attributes, and either inner text or children:
/// `<name attr="value">...</name>`
///
/// Attribute names are unique; setting one twice keeps the last value, at the position of the first.
///
/// Names and values are written exactly as given, with no escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    inner_value: Option<String>,
    children: Vec<Node>,
}
impl Element {
    /// Create a new element with no attributes, children, or inner value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            inner_value: None,
            children: vec![],
        }
    }

    /// Create a new element holding a text value:
    /// `<name>value</name>`
    pub fn with_inner_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.inner_value = Some(value.into());
        element
    }

    /// Appends a child. Children are written in the order they were added.
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Sets an attribute, replacing any existing value with the same name.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Sets or clears the inner value.
    ///
    /// While an inner value is set, the children of this element are not written.
    pub fn set_inner_value(&mut self, value: Option<String>) {
        self.inner_value = value;
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get the attributes of the element, in output order.
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Get the inner value of the element.
    #[must_use]
    pub fn inner_value(&self) -> Option<&str> {
        self.inner_value.as_deref()
    }

    /// Get the name of the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the children of the element.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get the children of the element for modification.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Writes this element and its subtree as XML text, with no prolog.
    ///
    /// # Errors
    /// Fails if the subtree nests deeper than `options.max_depth`.
    ///
    /// # Example
    /// ```rust
    /// use xmlwrite::{Element, WriteOptions};
    ///
    /// let mut element = Element::new("a");
    /// element.add_attribute("id", "1");
    ///
    /// let xml = element.render_fragment(&WriteOptions::default()).unwrap();
    /// assert_eq!(xml, "<a id=\"1\" />\n");
    /// ```
    pub fn render_fragment(&self, options: &WriteOptions) -> XmlResult<String> {
        let mut buffer = vec![];
        let mut ctx = RenderContext::new(options);
        self.render_into(&mut buffer, 0, &mut ctx)?;
        Ok(String::from_utf8(buffer)?)
    }
}
impl RenderXml for Element {
    fn render_into<'a>(
        &'a self,
        writer: &mut dyn Write,
        indent_level: usize,
        ctx: &mut RenderContext<'a>,
    ) -> XmlResult<()> {
        ctx.enter(&self.name)?;
        trace!(name = %self.name, depth = ctx.depth(), "writing element");

        let mut tag = ctx.indent(indent_level);
        tag.push('<');
        tag.push_str(&self.name);

        for (name, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(name);
            tag.push_str("=\"");
            tag.push_str(value);
            tag.push('"');
        }

        if let Some(inner) = &self.inner_value {
            if !self.children.is_empty() {
                debug!(
                    name = %self.name,
                    skipped = self.children.len(),
                    "inner value set; children not written"
                );
            }

            tag.push('>');
            tag.push_str(inner);
            tag.push_str("</");
            tag.push_str(&self.name);
            tag.push_str(">\n");
            ctx.write_str(writer, &tag)?;
        } else if !self.children.is_empty() {
            tag.push_str(">\n");
            ctx.write_str(writer, &tag)?;

            for child in &self.children {
                child.render_into(writer, indent_level + 1, ctx)?;
            }

            let mut close = format!("</{}>", self.name);
            if ctx.options().newline_after_close_tag {
                close.push('\n');
            }
            ctx.write_str(writer, &close)?;
        } else {
            tag.push_str(" />\n");
            ctx.write_str(writer, &tag)?;
        }

        ctx.exit();
        Ok(())
    }
}
