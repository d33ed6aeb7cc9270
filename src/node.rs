//! The types of nodes that can appear in a document tree.
use crate::{
    Document,
    error::XmlResult,
    to_xml::{RenderContext, RenderXml},
};
use std::io::Write;

mod plain;
pub use plain::*;

mod element;
pub use element::*;

/// A node in the document tree. Can be any of:
/// - `Plain` - a named node that produces no output
/// - `Element` - a tag, with attributes and either inner text or children
/// - `Document` - a nested document root, written with its own prolog
///
/// Every variant owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that writes nothing.
    Plain(PlainNode),

    /// A tag node.
    Element(Element),

    /// A document root.
    Document(Document),
}
impl Node {
    /// Returns the name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(node) => node.name(),
            Self::Element(node) => node.name(),
            Self::Document(node) => node.name(),
        }
    }

    /// Returns the children of the node, in output order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Plain(node) => node.children(),
            Self::Element(node) => node.children(),
            Self::Document(node) => node.children(),
        }
    }

    /// Returns the children of the node for modification.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        match self {
            Self::Plain(node) => node.children_mut(),
            Self::Element(node) => node.children_mut(),
            Self::Document(node) => node.children_mut(),
        }
    }

    /// Returns the node as an element, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(node) => Some(node),
            _ => None,
        }
    }
}
impl RenderXml for Node {
    fn render_into<'a>(
        &'a self,
        writer: &mut dyn Write,
        indent_level: usize,
        ctx: &mut RenderContext<'a>,
    ) -> XmlResult<()> {
        match self {
            Self::Plain(node) => node.render_into(writer, indent_level, ctx),
            Self::Element(node) => node.render_into(writer, indent_level, ctx),
            Self::Document(node) => node.render_into(writer, indent_level, ctx),
        }
    }
}
impl From<PlainNode> for Node {
    fn from(node: PlainNode) -> Self {
        Self::Plain(node)
    }
}
impl From<Element> for Node {
    fn from(node: Element) -> Self {
        Self::Element(node)
    }
}
impl From<Document> for Node {
    fn from(node: Document) -> Self {
        Self::Document(node)
    }
}
