//! Options controlling how a tree is written out.

/// Default indentation unit, one tab per nesting level.
pub const TAB: &str = "\t";

/// Default limit on nesting, counting documents and elements.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Options controlling XML output.
///
/// The defaults reproduce the classic output byte for byte:
/// tab indentation, and no line break after the closing tag of an element with children.
///
/// # Example
/// ```rust
/// use xmlwrite::WriteOptions;
///
/// let options = WriteOptions::default()
///     .indent("  ")
///     .newline_after_close_tag(true);
/// assert_eq!(options.indent, "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// String written once per nesting level before a tag.
    pub indent: String,

    /// Maximum nesting of documents and elements before rendering fails with
    /// [`XmlErrorKind::DepthExceeded`](crate::XmlErrorKind::DepthExceeded).
    pub max_depth: usize,

    /// Write `\n` after `</name>` for elements with children.
    pub newline_after_close_tag: bool,
}
impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: TAB.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            newline_after_close_tag: false,
        }
    }
}
impl WriteOptions {
    /// Sets the indentation unit.
    #[must_use]
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the maximum element nesting depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables the line break after closing tags.
    #[must_use]
    pub fn newline_after_close_tag(mut self, enabled: bool) -> Self {
        self.newline_after_close_tag = enabled;
        self
    }
}
