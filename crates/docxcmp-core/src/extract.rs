//! Content extraction (DOCX → comparable representation)
//!
//! Walks the parsed body in document order. Every paragraph, including each
//! paragraph inside a table cell, gets its alignment, its resolved style name
//! and its runs passed through [`normalize_runs`].

use docxcmp_ooxml::document as ooxml;
use docxcmp_ooxml::{Block, Document, OoxmlArchive, OoxmlError, StyleSheet};
use tracing::debug;

use crate::error::{CompareError, Result};
use crate::model::{
    Alignment, Cell, FontSize, Node, Paragraph, Representation, RgbColor, Row, Run, RunStyle,
    Table,
};
use crate::normalize::normalize_runs;
use crate::source::DocumentSource;

/// Style name used when a document defines no default paragraph style
pub const DEFAULT_STYLE_NAME: &str = "Normal";

/// Builds a [`Representation`] from a parsed document and its styles
#[derive(Debug, Clone, Copy)]
pub struct ContentExtractor<'a> {
    styles: &'a StyleSheet,
}

impl<'a> ContentExtractor<'a> {
    pub fn new(styles: &'a StyleSheet) -> Self {
        Self { styles }
    }

    /// Extract every top-level paragraph and table, in body order
    pub fn extract(&self, document: &Document) -> Representation {
        let nodes = document
            .blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => Node::Paragraph(self.paragraph(p)),
                Block::Table(t) => Node::Table(self.table(t)),
            })
            .collect();
        Representation::new(nodes)
    }

    fn paragraph(&self, para: &ooxml::Paragraph) -> Paragraph {
        Paragraph {
            alignment: para.alignment.as_deref().map(Alignment::from_jc),
            style_name: self.style_name(para.style_id.as_deref()),
            runs: normalize_runs(para.runs.iter().map(extract_run).collect()),
        }
    }

    fn table(&self, table: &ooxml::Table) -> Table {
        Table {
            rows: table
                .rows
                .iter()
                .map(|row| Row {
                    cells: row
                        .cells
                        .iter()
                        .map(|cell| Cell {
                            paragraphs: cell.paragraphs.iter().map(|p| self.paragraph(p)).collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Display name of the paragraph's effective style
    fn style_name(&self, style_id: Option<&str>) -> String {
        match self.styles.paragraph_style(style_id) {
            Some(style) => match style.name.as_deref() {
                Some(name) => ui_style_name(name).to_string(),
                None => style.id.clone(),
            },
            None => DEFAULT_STYLE_NAME.to_string(),
        }
    }
}

/// Map a run's direct properties onto a [`Run`]
fn extract_run(run: &ooxml::Run) -> Run {
    let props = &run.properties;
    Run {
        text: run.text.clone(),
        style: RunStyle {
            bold: props.bold.into(),
            italic: props.italic.into(),
            underline: props.underline.into(),
            font_name: props.font_ascii.clone(),
            font_size: resolve_size(props.size.as_deref()),
            color: resolve_color(props.color.as_deref()),
        },
    }
}

/// Resolve `w:color w:val` to an RGB colour.
///
/// Absent, `auto`, or not a six-digit hex token: the colour is unset. This is
/// the only outcome of a failed lookup; it never raises.
fn resolve_color(raw: Option<&str>) -> Option<RgbColor> {
    match raw {
        None | Some("auto") => None,
        Some(value) => {
            let color = RgbColor::from_hex(value);
            if color.is_none() {
                debug!(value, "unresolvable run colour, treating as unset");
            }
            color
        }
    }
}

/// Resolve `w:sz` to a font size; an unparsable value is unset.
fn resolve_size(raw: Option<&str>) -> Option<FontSize> {
    let value = raw?;
    let size = FontSize::parse(value);
    if size.is_none() {
        debug!(value, "unparsable font size, treating as unset");
    }
    size
}

/// Built-in styles are stored under lowercase names but shown capitalized
fn ui_style_name(name: &str) -> &str {
    match name {
        "caption" => "Caption",
        "footer" => "Footer",
        "header" => "Header",
        "heading 1" => "Heading 1",
        "heading 2" => "Heading 2",
        "heading 3" => "Heading 3",
        "heading 4" => "Heading 4",
        "heading 5" => "Heading 5",
        "heading 6" => "Heading 6",
        "heading 7" => "Heading 7",
        "heading 8" => "Heading 8",
        "heading 9" => "Heading 9",
        other => other,
    }
}

/// Open, parse and extract one document source
pub fn extract_content(source: &DocumentSource) -> Result<Representation> {
    let bytes = source.load()?;
    extract_bytes(&source.identifier(), &bytes)
}

/// Parse a DOCX package from bytes and extract its representation.
///
/// Any failure to open or parse the package is a
/// [`CompareError::DocumentParse`]; nothing partial is returned.
pub(crate) fn extract_bytes(source_id: &str, bytes: &[u8]) -> Result<Representation> {
    let parse_error = |source: OoxmlError| CompareError::DocumentParse {
        source_id: source_id.to_string(),
        source,
    };

    let archive = OoxmlArchive::from_bytes(bytes).map_err(parse_error)?;
    let document = Document::parse(archive.document_xml().map_err(parse_error)?)
        .map_err(parse_error)?;
    let styles = match archive.styles_xml() {
        Some(xml) => StyleSheet::parse(xml).map_err(parse_error)?,
        None => StyleSheet::default(),
    };

    let representation = ContentExtractor::new(&styles).extract(&document);
    debug!(
        source = source_id,
        paragraphs = representation.paragraph_count(),
        tables = representation.table_count(),
        styles = styles.len(),
        "extracted document"
    );
    Ok(representation)
}
