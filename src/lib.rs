//! In-memory XML element tree, written out as indented XML text.
//!
//! Build a tree of [`Element`]s, attach it to a [`Document`], then ask the document for its bytes:
//! ```rust
//! use xmlwrite::{Document, Element};
//!
//! let mut book = Element::new("book");
//! book.add_attribute("id", "bk101");
//! book.add_child(Element::with_inner_value("title", "XML Developer's Guide"));
//! book.add_child(Element::new("reviewed"));
//!
//! let mut document = Document::new(1.0);
//! document.add_child(book);
//!
//! let xml = String::from_utf8(document.xml_data().unwrap()).unwrap();
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\"?>\n<book id=\"bk101\">\n\t<title>XML Developer's Guide</title>\n\t<reviewed />\n</book>"
//! );
//! ```
//!
//! Values are written exactly as given; nothing is escaped.
#![warn(missing_docs)]

mod document;
pub use document::*;

mod error;
pub use error::*;

mod node;
pub use node::*;

mod options;
pub use options::*;

pub mod to_xml;
pub use to_xml::{RenderContext, RenderXml};
