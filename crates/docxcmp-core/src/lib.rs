//! docxcmp-core - content and style equality for DOCX documents
//!
//! Each document is reduced to a [`Representation`]: its body paragraphs and
//! tables in order, with paragraph style names, alignment and character runs.
//! Adjacent runs with identical formatting are merged first, so documents that
//! differ only in how an editor split the text into runs still compare equal.
//!
//! # Example
//!
//! ```no_run
//! use docxcmp_core::compare;
//!
//! let result = compare("original.docx", "resaved.docx")?;
//! println!("Identical: {}", result.identical);
//! println!("Message: {}", result.message);
//! # Ok::<(), docxcmp_core::CompareError>(())
//! ```

pub mod compare;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod source;

// Re-export main types and functions
pub use compare::{compare, compare_representations, Comparison, DIFFERENCES_FOUND, NO_DIFFERENCES};
pub use error::{CompareError, Result};
pub use extract::{extract_content, ContentExtractor};
pub use model::{
    Alignment, Cell, FontSize, Node, Paragraph, Representation, RgbColor, Row, Run, RunStyle,
    Table, Toggle,
};
pub use normalize::normalize_runs;
pub use source::DocumentSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
