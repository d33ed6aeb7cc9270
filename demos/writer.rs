//! XML Writer Example
//!
//! Builds a small document in memory and prints it.
//!
//! Set `RUST_LOG=xmlwrite=trace` to see each element as it is written.
//! Pass `--normalize` to put a line break after every closing tag.
use tracing::info;
use tracing_subscriber::EnvFilter;
use xmlwrite::{Document, Element, WriteOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let normalize = std::env::args().any(|arg| arg == "--normalize");

    //
    // Elements are plain owned values; build the leaves first, then move them into their parents.
    let mut note = Element::new("note");
    note.add_attribute("priority", "high");
    note.add_child(Element::with_inner_value("to", "Tove"));
    note.add_child(Element::with_inner_value("from", "Jani"));
    note.add_child(Element::with_inner_value("body", "Don't forget me this weekend!"));
    note.add_child(Element::new("read"));

    //
    // The document writes the declaration, then each of its children unindented.
    let mut document = Document::new(1.0);
    document.add_child(note);

    let options = WriteOptions::default().newline_after_close_tag(normalize);
    match document.to_xml(&options) {
        Ok(xml) => {
            info!(bytes = xml.len(), "document ready");
            println!("{xml}");
        }
        Err(e) => eprintln!("{e}"),
    }
}
