//! Document inputs
//!
//! A document is handed to the comparator either as a filesystem path or as
//! bytes already in memory (an upload, a stream read to the end).

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CompareError, Result};

/// One document to compare
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A DOCX file on disk
    Path(PathBuf),
    /// A DOCX package held in memory
    Bytes {
        /// Name used in error messages
        name: String,
        bytes: Vec<u8>,
    },
}

impl DocumentSource {
    /// Wrap in-memory DOCX bytes
    pub fn bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        DocumentSource::Bytes {
            name: name.into(),
            bytes,
        }
    }

    /// Read a stream to the end.
    ///
    /// A failing stream is reported as [`CompareError::InputMissing`].
    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self> {
        let name = name.into();
        let mut bytes = Vec::new();
        match reader.read_to_end(&mut bytes) {
            Ok(_) => Ok(DocumentSource::Bytes { name, bytes }),
            Err(source) => Err(CompareError::InputMissing {
                source_id: name,
                source,
            }),
        }
    }

    /// Identifier used in logs and errors
    pub fn identifier(&self) -> String {
        self.to_string()
    }

    /// Load the raw package bytes, reading the file once for path sources
    pub(crate) fn load(&self) -> Result<Cow<'_, [u8]>> {
        match self {
            DocumentSource::Path(path) => {
                fs::read(path)
                    .map(Cow::Owned)
                    .map_err(|source| CompareError::InputMissing {
                        source_id: path.display().to_string(),
                        source,
                    })
            }
            DocumentSource::Bytes { bytes, .. } => Ok(Cow::Borrowed(bytes)),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Bytes { name, .. } => f.write_str(name),
        }
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::Path(path)
    }
}

impl From<&Path> for DocumentSource {
    fn from(path: &Path) -> Self {
        DocumentSource::Path(path.to_path_buf())
    }
}

impl From<&PathBuf> for DocumentSource {
    fn from(path: &PathBuf) -> Self {
        DocumentSource::Path(path.clone())
    }
}

impl From<&str> for DocumentSource {
    fn from(path: &str) -> Self {
        DocumentSource::Path(PathBuf::from(path))
    }
}
