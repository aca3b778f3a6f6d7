//! Archive handling for DOCX files
//!
//! DOCX files are ZIP archives containing XML parts and resources.

use std::io::{Cursor, Read, Seek};

use tracing::debug;
use zip::read::ZipArchive;
use zip::result::ZipError;

use crate::error::{OoxmlError, Result};

/// Main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Style definitions part
pub const STYLES_PART: &str = "word/styles.xml";

/// The parts of an OOXML package needed to read a document.
///
/// Only the document and styles parts are decompressed; media and other
/// parts are left in the archive.
#[derive(Debug)]
pub struct OoxmlArchive {
    document: Option<Vec<u8>>,
    styles: Option<Vec<u8>>,
}

impl OoxmlArchive {
    /// Unpack a DOCX held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let document = read_part(&mut archive, DOCUMENT_PART)?;
        let styles = read_part(&mut archive, STYLES_PART)?;

        debug!(
            entries = archive.len(),
            has_styles = styles.is_some(),
            "opened package"
        );
        Ok(Self { document, styles })
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.document
            .as_deref()
            .ok_or_else(|| OoxmlError::MissingFile(DOCUMENT_PART.to_string()))
    }

    /// Get the styles definition (word/styles.xml), which is optional in a package
    pub fn styles_xml(&self) -> Option<&[u8]> {
        self.styles.as_deref()
    }
}

/// Decompress one part by name; a part absent from the archive is `None`
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    Ok(Some(contents))
}
