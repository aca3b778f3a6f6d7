//! # docxcmp-ooxml
//!
//! WordprocessingML (DOCX) package reading for docxcmp.
//!
//! This crate provides functionality to:
//! - Read the document and styles parts of a DOCX package
//! - Parse `word/document.xml` into paragraphs, runs and tables
//! - Parse `word/styles.xml` and resolve paragraph style names
//!
//! ## Example: Reading a Document
//!
//! ```no_run
//! use docxcmp_ooxml::{Document, OoxmlArchive, StyleSheet};
//!
//! let file = std::fs::File::open("document.docx")?;
//! let archive = OoxmlArchive::from_reader(file)?;
//! let document = Document::parse(archive.document_xml()?)?;
//! let styles = match archive.styles_xml() {
//!     Some(xml) => StyleSheet::parse(xml)?,
//!     None => StyleSheet::default(),
//! };
//!
//! for block in &document.blocks {
//!     println!("{:?}", block);
//! }
//! # let _ = styles;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod styles;
mod xml;

pub use archive::OoxmlArchive;
pub use document::{Block, Document, Paragraph, Run, RunProperties, Table, TableCell, TableRow};
pub use error::{OoxmlError, Result};
pub use styles::{Style, StyleSheet, StyleType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
