//! Document model - high-level API for DOCX documents

mod body;
mod paragraph;
mod properties;
mod run;
pub mod styles;
mod table;

pub use body::{BlockContent, BlockSummary, Body, SectionProperties};
pub use paragraph::{Alignment, Paragraph, ParagraphProperties, TabStop};
pub use properties::CoreProperties;
pub use run::{BreakType, Run, RunContent, RunProperties};
pub use table::{
    GridColumn, HeaderStyle, Shading, Table, TableCell, TableCellProperties, TableRow, ACCENT_FILL,
};

use crate::error::{Error, Result};
use crate::opc::{self, rel_types, well_known, Package, Part};
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::path::Path;

/// A DOCX document
#[derive(Debug)]
pub struct Document {
    /// Underlying OPC package
    package: Package,
    /// Parsed document body
    body: Body,
    core: CoreProperties,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            package: Package::new(),
            body: Body::default(),
            core: CoreProperties::default(),
        }
    }

    /// Open a document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let package = Package::open(path)?;
        Self::from_package(package)
    }

    /// Open a document from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let package = Package::from_bytes(bytes)?;
        Self::from_package(package)
    }

    fn from_package(package: Package) -> Result<Self> {
        let doc_part = package
            .main_document_part()
            .ok_or_else(|| Error::MissingPart("main document part".into()))?;
        let body = parse_document_xml(doc_part.data_as_str()?)?;

        let core = match package.part_by_rel_type(rel_types::CORE_PROPERTIES) {
            Some(part) => CoreProperties::from_xml(part.data_as_str()?)?,
            None => CoreProperties::default(),
        };

        Ok(Self {
            package,
            body,
            core,
        })
    }

    /// Save the document to a file.
    ///
    /// The file is only created once the whole package has been serialized.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.update_package()?;
        self.package.save(path)
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.update_package()?;
        self.package.to_bytes()
    }

    /// Write the body, styles and core properties into the package
    fn update_package(&mut self) -> Result<()> {
        let document = well_known::document();
        let xml = serialize_document_xml(&self.body)?;
        log::debug!(
            "serialized {} blocks into {} bytes",
            self.body.content.len(),
            xml.len()
        );
        self.package
            .put_part(Part::new(document.clone(), opc::MAIN_DOCUMENT, xml));
        self.package.relationships_mut().ensure(
            rel_types::OFFICE_DOCUMENT,
            &well_known::root().relative_target(&document),
        );

        let styles = well_known::styles();
        if self.package.part(&styles).is_none() {
            self.package
                .put_part(Part::new(styles.clone(), opc::STYLES, styles::styles_xml()?));
        }
        if let Some(part) = self.package.part_mut(&document) {
            part.relationships_mut()
                .ensure(rel_types::STYLES, &document.relative_target(&styles));
        }

        if !self.core.is_empty() {
            let core = well_known::core_props();
            self.package
                .put_part(Part::new(core.clone(), opc::CORE_PROPERTIES, self.core.to_xml()?));
            self.package.relationships_mut().ensure(
                rel_types::CORE_PROPERTIES,
                &well_known::root().relative_target(&core),
            );
        }

        Ok(())
    }

    /// Append a heading: level 0 uses the `Title` style, 1..=9 `HeadingN`
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> Result<&mut Paragraph> {
        let style = styles::heading_style(level)?;
        let para = self.add_paragraph(text);
        para.set_style(style);
        Ok(para)
    }

    /// Add a paragraph with text
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.body.add_paragraph(Paragraph::new(text))
    }

    /// Add an empty paragraph, to be filled with runs
    pub fn add_empty_paragraph(&mut self) -> &mut Paragraph {
        self.body.add_paragraph(Paragraph::default())
    }

    pub fn add_page_break(&mut self) -> &mut Paragraph {
        self.body.add_paragraph(Paragraph::page_break())
    }

    /// Append a grid table whose first row labels the columns.
    ///
    /// Header cells get the accent fill with bold white text. Fails with
    /// [`Error::RowLength`] when a data row and the header differ in length.
    pub fn add_table<S, R>(&mut self, headers: &[S], rows: &[R]) -> Result<&mut Table>
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let mut table = Table::with_header(
            headers,
            rows,
            self.body.section.text_width(),
            &HeaderStyle::default(),
        )?;
        table.set_style(styles::TABLE_GRID);
        Ok(self.body.add_table(table))
    }

    /// Get all paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.paragraphs()
    }

    /// Get paragraph by index
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.body.paragraphs().nth(index)
    }

    /// Get all tables
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.tables()
    }

    /// Get table by index
    pub fn table(&self, index: usize) -> Option<&Table> {
        self.body.tables().nth(index)
    }

    /// Number of block-level elements
    pub fn block_count(&self) -> usize {
        self.body.content.len()
    }

    /// Ordered summary of the body, one entry per block
    pub fn outline(&self) -> Vec<BlockSummary> {
        self.body.outline()
    }

    /// Get all paragraph text in the document
    pub fn text(&self) -> String {
        self.body
            .paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn core_properties(&self) -> &CoreProperties {
        &self.core
    }

    pub fn set_core_properties(&mut self, core: CoreProperties) {
        self.core = core;
    }

    /// Get the underlying package
    pub fn package(&self) -> &Package {
        &self.package
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse document.xml content
fn parse_document_xml(xml: &str) -> Result<Body> {
    // leading spaces of w:t content are significant
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut body = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().local_name().as_ref() {
                b"body" => body = Some(Body::from_reader(&mut reader)?),
                b"document" => {}
                _ => xml::skip_element(&mut reader, &e)?,
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    body.ok_or_else(|| Error::InvalidDocument("missing w:body element".into()))
}

/// Serialize body to document.xml content
fn serialize_document_xml(body: &Body) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    xml::write_declaration(&mut writer)?;

    let mut doc_start = BytesStart::new("w:document");
    for (attr, value) in xml::document_namespaces() {
        doc_start.push_attribute((attr, value));
    }
    writer.write_event(Event::Start(doc_start))?;
    body.write_to(&mut writer)?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    Ok(writer.into_inner())
}
