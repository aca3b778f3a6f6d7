//! Error types for document comparison

use thiserror::Error;

use docxcmp_ooxml::OoxmlError;

/// Why two documents could not be compared.
///
/// Never a verdict: a caller receiving one of these must not report the
/// documents as different.
#[derive(Error, Debug)]
pub enum CompareError {
    /// The input does not exist or cannot be read
    #[error("Cannot read {source_id}: {source}")]
    InputMissing {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    /// The input was read but is not a valid DOCX package
    #[error("Cannot parse {source_id} as a DOCX document: {source}")]
    DocumentParse {
        source_id: String,
        #[source]
        source: OoxmlError,
    },
}

impl CompareError {
    /// Identifier of the offending input
    pub fn source_id(&self) -> &str {
        match self {
            CompareError::InputMissing { source_id, .. }
            | CompareError::DocumentParse { source_id, .. } => source_id,
        }
    }
}

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, CompareError>;
