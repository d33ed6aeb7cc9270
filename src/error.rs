//! Error handling for XML rendering
use std::string::FromUtf8Error;

/// A result type for XML rendering, which can be either a successful value or an error.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// An error that occurred while rendering a document.
#[derive(Debug)]
pub struct XmlError {
    /// The context of the error
    pub context: Box<ErrorContext>,

    /// The kind of error that occurred while rendering a document
    pub kind: XmlErrorKind,
}
impl XmlError {
    /// Creates a new `XmlError`
    #[must_use]
    pub fn new(kind: XmlErrorKind, context: ErrorContext) -> Self {
        Self {
            context: Box::new(context),
            kind,
        }
    }

    /// Returns the kind of error that occurred.
    #[must_use]
    pub fn kind(&self) -> &XmlErrorKind {
        &self.kind
    }
}
impl std::fmt::Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.context)?;

        for line in self.kind.to_string().lines() {
            writeln!(f, "= {line}")?;
        }
        Ok(())
    }
}
impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
impl From<std::io::Error> for XmlError {
    fn from(err: std::io::Error) -> Self {
        Self::new(XmlErrorKind::Io(err), ErrorContext::default())
    }
}
impl From<FromUtf8Error> for XmlError {
    fn from(err: FromUtf8Error) -> Self {
        Self::new(XmlErrorKind::Utf8(err), ErrorContext::default())
    }
}

/// The kind of error that occurred while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum XmlErrorKind {
    /// The tree nests deeper than the configured limit
    #[error("Element nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The limit that was exceeded
        limit: usize,
    },

    /// The output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered output could not be read back as a string
    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Context describing where in the tree the error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Names of the elements from the outermost one down to the failure point.
    pub path: Vec<String>,
}
impl ErrorContext {
    /// Creates a new `ErrorContext` for the given element path.
    #[must_use]
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }
}
impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.path.is_empty() {
            writeln!(f, "| <{}>", self.path.join("><"))?;
            writeln!(f, "= At depth {}", self.path.len())?;
        }
        Ok(())
    }
}
