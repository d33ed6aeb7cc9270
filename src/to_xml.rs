//! XML formatting module
//!
//! Use [`Document::xml_data`] unless you need to write the XML to a file or other writer.
use crate::{
    Document, WriteOptions,
    error::{ErrorContext, XmlError, XmlErrorKind, XmlResult},
};
use std::io::Write;
use tracing::{debug, warn};

/// Flatten a document as formatted XML using the given writer.
///
/// # Errors
/// Fails if the writer fails, or if the tree nests deeper than `options.max_depth`.
pub fn write_xml(
    writer: &mut dyn Write,
    document: &Document,
    options: &WriteOptions,
) -> XmlResult<()> {
    debug!(
        version = document.version(),
        children = document.children().len(),
        "writing document"
    );

    let mut ctx = RenderContext::new(options);
    document.render_into(writer, 0, &mut ctx)
}

/// Something in the tree that can write itself out as XML text.
pub trait RenderXml {
    /// Appends the XML for this node, and its descendants, to `writer`.
    ///
    /// `indent_level` is the number of indent units written before the opening tag.
    ///
    /// # Errors
    /// Fails if the writer fails, or if the depth limit in `ctx` is exceeded.
    fn render_into<'a>(
        &'a self,
        writer: &mut dyn Write,
        indent_level: usize,
        ctx: &mut RenderContext<'a>,
    ) -> XmlResult<()>;
}

/// Tracks nesting during a single render pass.
///
/// Documents and elements both count towards the depth.
#[derive(Debug)]
pub struct RenderContext<'a> {
    options: &'a WriteOptions,
    path: Vec<&'a str>,
}
impl<'a> RenderContext<'a> {
    /// Creates a context for a fresh render pass.
    #[must_use]
    pub fn new(options: &'a WriteOptions) -> Self {
        Self {
            options,
            path: vec![],
        }
    }

    /// The options for this pass.
    #[must_use]
    pub fn options(&self) -> &'a WriteOptions {
        self.options
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Records entry into a document or element.
    ///
    /// # Errors
    /// Fails once the depth passes `max_depth`.
    pub fn enter(&mut self, name: &'a str) -> XmlResult<()> {
        self.path.push(name);
        if self.path.len() > self.options.max_depth {
            warn!(
                limit = self.options.max_depth,
                element = name,
                "element nesting too deep"
            );
            return Err(self.error(XmlErrorKind::DepthExceeded {
                limit: self.options.max_depth,
            }));
        }
        Ok(())
    }

    /// Records exit from the current document or element.
    pub fn exit(&mut self) {
        self.path.pop();
    }

    /// Builds an error located at the current element.
    #[must_use]
    pub fn error(&self, kind: XmlErrorKind) -> XmlError {
        let path = self.path.iter().map(ToString::to_string).collect();
        XmlError::new(kind, ErrorContext::new(path))
    }

    /// The indentation prefix for the given level.
    #[must_use]
    pub fn indent(&self, level: usize) -> String {
        self.options.indent.repeat(level)
    }

    /// Writes `text` to `writer`, locating any IO failure at the current element.
    ///
    /// # Errors
    /// Fails if the writer fails.
    pub fn write_str(&self, writer: &mut dyn Write, text: &str) -> XmlResult<()> {
        writer
            .write_all(text.as_bytes())
            .map_err(|e| self.error(XmlErrorKind::Io(e)))
    }
}

/// Formats an XML version number.
///
/// Whole numbers keep a fractional digit, so `1.0` stays `1.0`.
#[must_use]
pub fn format_version(version: f32) -> String {
    format!("{version:?}")
}
