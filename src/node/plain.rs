use super::Node;
use crate::{
    error::XmlResult,
    to_xml::{RenderContext, RenderXml},
};
use std::io::Write;

/// A named node with children that writes nothing, not even its children.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainNode {
    name: String,
    children: Vec<Node>,
}
impl PlainNode {
    /// Create a new node with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![],
        }
    }

    /// Returns the name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the children of the node.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the children of the node for modification.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}
impl RenderXml for PlainNode {
    fn render_into<'a>(
        &'a self,
        _writer: &mut dyn Write,
        _indent_level: usize,
        _ctx: &mut RenderContext<'a>,
    ) -> XmlResult<()> {
        Ok(())
    }
}
