//! Comparable document representation
//!
//! Plain data extracted from a DOCX: an ordered sequence of paragraphs and
//! tables. Two representations are compared with derived structural
//! equality, so every field here takes part in the verdict.

use std::fmt;

use serde::{Serialize, Serializer};

/// A style flag that is on, off, or not specified on this run.
///
/// `Unset` is not the same as `Off`: it means the run inherits whatever its
/// style says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Toggle {
    On,
    Off,
    #[default]
    Unset,
}

impl From<Option<bool>> for Toggle {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Toggle::On,
            Some(false) => Toggle::Off,
            None => Toggle::Unset,
        }
    }
}

impl Serialize for Toggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Toggle::On => serializer.serialize_bool(true),
            Toggle::Off => serializer.serialize_bool(false),
            Toggle::Unset => serializer.serialize_none(),
        }
    }
}

/// Font size, kept in the half-points WordprocessingML stores it in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSize(u32);

impl FontSize {
    /// Create from a half-points value (`w:sz`)
    pub fn from_half_points(half_points: u32) -> Self {
        FontSize(half_points)
    }

    /// Parse a `w:sz` value. Anything but an unsigned integer yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(FontSize)
    }

    /// Size in half-points
    pub fn half_points(self) -> u32 {
        self.0
    }

    /// Size in points
    pub fn points(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.points())
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.points())
    }
}

/// A resolved RGB run colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Parse a six-digit hex token such as `1F4E79`.
    ///
    /// Returns `None` for `auto`, theme-only colours and anything else that
    /// is not exactly six hex digits.
    pub fn from_hex(value: &str) -> Option<Self> {
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).ok();
        Some(RgbColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Paragraph justification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
    Distribute,
    JustifyMedium,
    JustifyHigh,
    JustifyLow,
    ThaiJustify,
    /// A `w:jc` token outside the known set, kept verbatim
    Other(String),
}

impl Alignment {
    /// Map a `w:jc` value
    pub fn from_jc(value: &str) -> Self {
        match value {
            "left" | "start" => Alignment::Left,
            "center" => Alignment::Center,
            "right" | "end" => Alignment::Right,
            "both" => Alignment::Justify,
            "distribute" => Alignment::Distribute,
            "mediumKashida" => Alignment::JustifyMedium,
            "highKashida" => Alignment::JustifyHigh,
            "lowKashida" => Alignment::JustifyLow,
            "thaiDistribute" => Alignment::ThaiJustify,
            other => Alignment::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
            Alignment::Distribute => "distribute",
            Alignment::JustifyMedium => "justify_medium",
            Alignment::JustifyHigh => "justify_high",
            Alignment::JustifyLow => "justify_low",
            Alignment::ThaiJustify => "thai_justify",
            Alignment::Other(raw) => raw,
        }
    }
}

impl Serialize for Alignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Character formatting of a run. Two runs merge when these are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RunStyle {
    pub bold: Toggle,
    pub italic: Toggle,
    pub underline: Toggle,
    pub font_name: Option<String>,
    pub font_size: Option<FontSize>,
    pub color: Option<RgbColor>,
}

/// A span of text sharing one [`RunStyle`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Run {
    pub text: String,
    #[serde(flatten)]
    pub style: RunStyle,
}

impl Run {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Run {
            text: text.into(),
            style,
        }
    }
}

/// A paragraph with normalized runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub alignment: Option<Alignment>,
    #[serde(rename = "style")]
    pub style_name: String,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Concatenated run text
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A table cell: its paragraphs in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cell {
    pub paragraphs: Vec<Paragraph>,
}

/// A table row: its cells in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A table: its rows in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    #[serde(rename = "data")]
    pub rows: Vec<Row>,
}

/// One top-level element of the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Paragraph(Paragraph),
    Table(Table),
}

/// The unit of comparison: body paragraphs and tables in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Representation {
    nodes: Vec<Node>,
}

impl Representation {
    pub fn new(nodes: Vec<Node>) -> Self {
        Representation { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of top-level paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Paragraph(_)))
            .count()
    }

    /// Number of top-level tables
    pub fn table_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Table(_)))
            .count()
    }
}
