//! Document comparison
//!
//! Two documents are identical when their extracted representations are
//! structurally equal: same paragraphs and tables in the same order, with the
//! same paragraph styles, alignment and normalized runs. No field is ignored.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::extract::extract_bytes;
use crate::model::Representation;
use crate::source::DocumentSource;

/// Message reported for identical documents
pub const NO_DIFFERENCES: &str = "No differences found.";

/// Message reported for documents that differ
pub const DIFFERENCES_FOUND: &str = "Differences found in content or style.";

/// Outcome of a successful comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub identical: bool,
    pub message: String,
}

impl Comparison {
    fn from_verdict(identical: bool) -> Self {
        let message = if identical {
            NO_DIFFERENCES
        } else {
            DIFFERENCES_FOUND
        };
        Comparison {
            identical,
            message: message.to_string(),
        }
    }
}

/// Compare two already extracted representations
pub fn compare_representations(left: &Representation, right: &Representation) -> Comparison {
    Comparison::from_verdict(left == right)
}

/// Compare two DOCX documents for content and style equality.
///
/// Both inputs are read before either is parsed, so a missing input is
/// reported before any extraction work. Failing to read or parse either
/// input is an error, never a "differences found" verdict.
pub fn compare(
    source1: impl Into<DocumentSource>,
    source2: impl Into<DocumentSource>,
) -> Result<Comparison> {
    let source1 = source1.into();
    let source2 = source2.into();

    let bytes1 = source1.load()?;
    let bytes2 = source2.load()?;

    let left = extract_bytes(&source1.identifier(), &bytes1)?;
    let right = extract_bytes(&source2.identifier(), &bytes2)?;

    let comparison = compare_representations(&left, &right);
    info!(
        left = %source1,
        right = %source2,
        identical = comparison.identical,
        "compared documents"
    );
    Ok(comparison)
}
