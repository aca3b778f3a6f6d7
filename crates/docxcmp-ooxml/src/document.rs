//! Document content parsing (word/document.xml)
//!
//! This module parses the main document content and extracts
//! paragraphs, runs and tables in body order.
//!
//! Run properties are read as they are set on the run itself. Nothing is
//! resolved against paragraph or document styles: a property that is not
//! present on the run stays `None`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::xml::{attr, on_off};

/// A parsed Word document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Top-level body blocks, in document order
    pub blocks: Vec<Block>,
}

/// Block-level elements
#[derive(Debug, Clone)]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),
    /// A table
    Table(Table),
}

/// A paragraph with its runs and paragraph-level properties
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// Raw `w:jc` value
    pub alignment: Option<String>,
    /// Runs in document order, including runs nested in hyperlinks,
    /// content controls and inserted revisions
    pub runs: Vec<Run>,
}

/// A text run with its direct formatting
#[derive(Debug, Clone, Default)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Direct run properties (`w:rPr`)
    pub properties: RunProperties,
}

/// Run properties exactly as set on the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProperties {
    /// `w:b`
    pub bold: Option<bool>,
    /// `w:i`
    pub italic: Option<bool>,
    /// `w:u`; `w:val="none"` is `Some(false)`, a missing `w:val` is `None`
    pub underline: Option<bool>,
    /// `w:rFonts w:ascii`
    pub font_ascii: Option<String>,
    /// Raw `w:sz` value, in half-points
    pub size: Option<String>,
    /// Raw `w:color w:val`
    pub color: Option<String>,
}

/// A table
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
}

/// A table row
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
}

/// A table cell
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    /// Paragraphs directly in this cell
    pub paragraphs: Vec<Paragraph>,
}

/// Subtrees whose content is not part of the visible text flow of the body.
///
/// Drawings and text boxes, deleted revisions, property change history and
/// content control properties are skipped wholesale.
const SKIPPED_ELEMENTS: &[&[u8]] = &[
    b"drawing",
    b"pict",
    b"object",
    b"AlternateContent",
    b"del",
    b"moveFrom",
    b"rPrChange",
    b"pPrChange",
    b"sdtPr",
];

impl Document {
    /// Parse a document from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - whitespace inside <w:t> is content
        reader.config_mut().trim_text(false);

        let mut parser = DocumentParser::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    parser.depth += 1;
                    if parser.skip_depth > 0 {
                        parser.skip_depth += 1;
                    } else if parser.should_skip(e) {
                        parser.skip_depth = 1;
                    } else {
                        parser.open(e);
                    }
                }
                Ok(Event::End(ref e)) => {
                    parser.depth = parser.depth.saturating_sub(1);
                    if parser.skip_depth > 0 {
                        parser.skip_depth -= 1;
                    } else {
                        parser.close(e.local_name().as_ref());
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing elements like <w:b/> or <w:p/>
                    if parser.skip_depth == 0 && !parser.should_skip(e) {
                        parser.open(e);
                        parser.close(e.local_name().as_ref());
                    }
                }
                Ok(Event::Text(ref e)) => {
                    // Only capture text inside <w:t> elements, not <w:instrText>
                    if parser.skip_depth == 0 && parser.in_text {
                        if let Some(ref mut run) = parser.current_run {
                            run.text.push_str(&e.unescape().map_err(quick_xml::Error::from)?);
                        }
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if parser.skip_depth == 0 && parser.in_text {
                        if let Some(ref mut run) = parser.current_run {
                            run.text.push_str(&String::from_utf8_lossy(e));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        parser.finish()
    }

    /// Get all top-level paragraphs, skipping tables
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    /// Get all top-level tables
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }
}

impl Paragraph {
    /// Get plain text of this paragraph
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Streaming state for [`Document::parse`]
#[derive(Default)]
struct DocumentParser {
    blocks: Vec<Block>,
    saw_document: bool,
    in_body: bool,
    in_ppr: bool,
    in_rpr: bool,
    // Inside <w:t>, as opposed to <w:instrText> or <w:delText>
    in_text: bool,
    depth: usize,
    skip_depth: usize,
    current_para: Option<Paragraph>,
    current_run: Option<Run>,
    current_table: Option<TableBuilder>,
}

impl DocumentParser {
    fn should_skip(&self, e: &BytesStart) -> bool {
        let name = e.local_name();
        let name = name.as_ref();
        // Nested tables are not part of the cell's own paragraphs
        (name == b"tbl" && self.current_table.is_some()) || SKIPPED_ELEMENTS.contains(&name)
    }

    fn open(&mut self, e: &BytesStart) {
        let name = e.local_name();
        match name.as_ref() {
            b"document" => self.saw_document = true,
            b"body" => self.in_body = true,
            b"p" if self.in_body => {
                self.current_para = Some(Paragraph::default());
            }
            b"pPr" if self.current_para.is_some() && self.current_run.is_none() => {
                self.in_ppr = true;
            }
            b"pStyle" if self.in_ppr => {
                if let (Some(para), Some(style)) = (self.current_para.as_mut(), attr(e, b"val")) {
                    para.style_id = Some(style);
                }
            }
            b"jc" if self.in_ppr => {
                if let (Some(para), Some(jc)) = (self.current_para.as_mut(), attr(e, b"val")) {
                    para.alignment = Some(jc);
                }
            }
            b"r" if self.current_para.is_some() => {
                self.current_run = Some(Run::default());
            }
            b"rPr" if self.current_run.is_some() => self.in_rpr = true,
            _ if self.in_rpr => self.open_run_property(e),
            b"t" if self.current_run.is_some() => self.in_text = true,
            b"tab" | b"ptab" => self.push_run_text('\t'),
            // Page and column breaks carry no text
            b"br" if is_line_break(e) => self.push_run_text('\n'),
            b"cr" => self.push_run_text('\n'),
            b"noBreakHyphen" => self.push_run_text('-'),
            b"tbl" if self.in_body => {
                self.current_table = Some(TableBuilder::default());
            }
            b"tr" => {
                if let Some(ref mut table) = self.current_table {
                    table.current_row = Some(TableRowBuilder::default());
                }
            }
            b"tc" => {
                if let Some(row) = self
                    .current_table
                    .as_mut()
                    .and_then(|t| t.current_row.as_mut())
                {
                    row.current_cell = Some(TableCell::default());
                }
            }
            _ => {}
        }
    }

    fn open_run_property(&mut self, e: &BytesStart) {
        let Some(run) = self.current_run.as_mut() else {
            return;
        };
        let props = &mut run.properties;
        match e.local_name().as_ref() {
            b"b" => props.bold = Some(on_off(e)),
            b"i" => props.italic = Some(on_off(e)),
            // A bare <w:u/> names no underline type and stays unset
            b"u" => {
                props.underline = attr(e, b"val").map(|val| {
                    !matches!(val.as_str(), "none" | "0" | "false" | "off")
                });
            }
            b"rFonts" => {
                if let Some(font) = attr(e, b"ascii") {
                    props.font_ascii = Some(font);
                }
            }
            b"sz" => props.size = attr(e, b"val"),
            b"color" => props.color = attr(e, b"val"),
            _ => {}
        }
    }

    fn push_run_text(&mut self, c: char) {
        if self.in_rpr {
            return;
        }
        if let Some(ref mut run) = self.current_run {
            run.text.push(c);
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"body" => self.in_body = false,
            b"pPr" => self.in_ppr = false,
            b"rPr" => self.in_rpr = false,
            b"t" => self.in_text = false,
            b"r" => {
                // Runs keep their text even when empty; merging decides later
                if let (Some(run), Some(para)) =
                    (self.current_run.take(), self.current_para.as_mut())
                {
                    para.runs.push(run);
                }
                self.in_rpr = false;
                self.in_text = false;
            }
            b"p" => {
                if let Some(para) = self.current_para.take() {
                    match self.current_table {
                        Some(ref mut table) => {
                            if let Some(cell) = table
                                .current_row
                                .as_mut()
                                .and_then(|r| r.current_cell.as_mut())
                            {
                                cell.paragraphs.push(para);
                            }
                        }
                        None => self.blocks.push(Block::Paragraph(para)),
                    }
                }
                self.in_ppr = false;
            }
            b"tc" => {
                if let Some(row) = self
                    .current_table
                    .as_mut()
                    .and_then(|t| t.current_row.as_mut())
                {
                    if let Some(cell) = row.current_cell.take() {
                        row.cells.push(cell);
                    }
                }
            }
            b"tr" => {
                if let Some(ref mut table) = self.current_table {
                    if let Some(row) = table.current_row.take() {
                        table.rows.push(row.build());
                    }
                }
            }
            b"tbl" => {
                if let Some(table) = self.current_table.take() {
                    self.blocks.push(Block::Table(table.build()));
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Result<Document> {
        if !self.saw_document {
            return Err(OoxmlError::InvalidStructure(
                "missing <w:document> root element".to_string(),
            ));
        }
        if self.depth != 0 {
            return Err(OoxmlError::InvalidStructure(
                "unexpected end of document".to_string(),
            ));
        }
        Ok(Document {
            blocks: self.blocks,
        })
    }
}

/// `w:br` without a type, or of type `textWrapping`
fn is_line_break(e: &BytesStart) -> bool {
    matches!(attr(e, b"type").as_deref(), None | Some("textWrapping"))
}

#[derive(Default)]
struct TableBuilder {
    rows: Vec<TableRow>,
    current_row: Option<TableRowBuilder>,
}

impl TableBuilder {
    fn build(self) -> Table {
        Table { rows: self.rows }
    }
}

#[derive(Default)]
struct TableRowBuilder {
    cells: Vec<TableCell>,
    current_cell: Option<TableCell>,
}

impl TableRowBuilder {
    fn build(self) -> TableRow {
        TableRow { cells: self.cells }
    }
}
