//! Style definitions parsing (word/styles.xml)
//!
//! Only what is needed to name a paragraph's style is kept: the style id,
//! its display name, its type and which paragraph style is the default.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::xml::attr;

/// Collection of styles from a document
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// All styles, keyed by style ID
    styles: HashMap<String, Style>,
    /// Default paragraph style ID
    pub default_paragraph: Option<String>,
}

/// A Word style definition
#[derive(Debug, Clone)]
pub struct Style {
    /// Style ID (used in document references)
    pub id: String,
    /// Display name as stored in the package (`w:name`)
    pub name: Option<String>,
    /// Style type
    pub style_type: StyleType,
}

/// Type of style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    /// Paragraph style
    Paragraph,
    /// Character (run) style
    Character,
    /// Table style
    Table,
    /// Numbering style
    Numbering,
}

impl StyleType {
    fn from_attr(value: &str) -> Self {
        match value {
            "character" => StyleType::Character,
            "table" => StyleType::Table,
            "numbering" => StyleType::Numbering,
            // w:type defaults to paragraph
            _ => StyleType::Paragraph,
        }
    }
}

impl StyleSheet {
    /// Parse styles from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut stylesheet = StyleSheet::default();
        let mut buf = Vec::new();
        let mut current_style: Option<StyleBuilder> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() == b"style" {
                        current_style = Some(StyleBuilder::from_element(e));
                    } else if let Some(ref mut builder) = current_style {
                        builder.read_child(e);
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    if e.local_name().as_ref() == b"style" {
                        stylesheet.insert(StyleBuilder::from_element(e));
                    } else if let Some(ref mut builder) = current_style {
                        builder.read_child(e);
                    }
                }
                Ok(Event::End(ref e)) => {
                    if e.local_name().as_ref() == b"style" {
                        if let Some(builder) = current_style.take() {
                            stylesheet.insert(builder);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(stylesheet)
    }

    fn insert(&mut self, builder: StyleBuilder) {
        let is_default = builder.is_default;
        let Some(style) = builder.build() else {
            return;
        };
        // The last default paragraph style declared wins
        if is_default && style.style_type == StyleType::Paragraph {
            self.default_paragraph = Some(style.id.clone());
        }
        self.styles.insert(style.id.clone(), style);
    }

    /// Get a style by ID
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.get(id)
    }

    /// Number of styles defined
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no styles are defined
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolve the effective paragraph style for a `w:pStyle` reference.
    ///
    /// A missing reference, an unknown id, or an id naming a style of
    /// another type all fall back to the default paragraph style.
    pub fn paragraph_style(&self, style_id: Option<&str>) -> Option<&Style> {
        style_id
            .and_then(|id| self.get(id))
            .filter(|s| s.style_type == StyleType::Paragraph)
            .or_else(|| self.default_paragraph.as_deref().and_then(|id| self.get(id)))
    }
}

#[derive(Default)]
struct StyleBuilder {
    id: Option<String>,
    name: Option<String>,
    style_type: Option<StyleType>,
    is_default: bool,
}

impl StyleBuilder {
    fn from_element(e: &BytesStart) -> Self {
        let is_default = matches!(attr(e, b"default").as_deref(), Some("1") | Some("true"));
        Self {
            id: attr(e, b"styleId"),
            name: None,
            style_type: attr(e, b"type").map(|t| StyleType::from_attr(&t)),
            is_default,
        }
    }

    fn read_child(&mut self, e: &BytesStart) {
        if e.local_name().as_ref() == b"name" {
            if let Some(val) = attr(e, b"val") {
                self.name = Some(val);
            }
        }
    }

    fn build(self) -> Option<Style> {
        let id = self.id?;
        Some(Style {
            id,
            name: self.name,
            style_type: self.style_type.unwrap_or(StyleType::Paragraph),
        })
    }
}
