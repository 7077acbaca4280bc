//! Document body and block-level content

use crate::document::{Paragraph, Table};
use crate::error::Result;
use crate::xml::{self, get_attr, XmlElement};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::fmt;
use std::io::{BufRead, Write};

/// Letter page width, in twips
pub const PAGE_WIDTH: i32 = 12240;
/// Letter page height, in twips
pub const PAGE_HEIGHT: i32 = 15840;
/// One inch, in twips
pub const INCH: i32 = 1440;

/// Block-level content in a document body
#[derive(Clone, Debug, PartialEq)]
pub enum BlockContent {
    Paragraph(Paragraph),
    Table(Table),
}

/// Page geometry (the body's trailing w:sectPr)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionProperties {
    pub page_width: i32,
    pub page_height: i32,
    pub margin_top: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    pub margin_left: i32,
}

impl Default for SectionProperties {
    /// US Letter with one-inch margins
    fn default() -> Self {
        SectionProperties {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            margin_top: INCH,
            margin_right: INCH,
            margin_bottom: INCH,
            margin_left: INCH,
        }
    }
}

impl SectionProperties {
    /// Width between the left and right margins
    pub fn text_width(&self) -> i32 {
        self.page_width - self.margin_left - self.margin_right
    }

    fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut sect = SectionProperties::default();
        let mut buf = Vec::new();
        let twips = |e: &BytesStart, name: &str| -> Option<i32> {
            get_attr(e, name)
                .or_else(|| get_attr(e, name.trim_start_matches("w:")))
                .and_then(|v| v.parse().ok())
        };

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => xml::skip_element(reader, &e)?,
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"pgSz" => {
                        sect.page_width = twips(&e, "w:w").unwrap_or(sect.page_width);
                        sect.page_height = twips(&e, "w:h").unwrap_or(sect.page_height);
                    }
                    b"pgMar" => {
                        sect.margin_top = twips(&e, "w:top").unwrap_or(sect.margin_top);
                        sect.margin_right = twips(&e, "w:right").unwrap_or(sect.margin_right);
                        sect.margin_bottom = twips(&e, "w:bottom").unwrap_or(sect.margin_bottom);
                        sect.margin_left = twips(&e, "w:left").unwrap_or(sect.margin_left);
                    }
                    _ => {}
                },
                Event::End(e) if e.name().local_name().as_ref() == b"sectPr" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(sect)
    }

    fn to_element(self) -> XmlElement {
        XmlElement::new("w:sectPr")
            .child(
                XmlElement::new("w:pgSz")
                    .attr("w:w", self.page_width.to_string())
                    .attr("w:h", self.page_height.to_string()),
            )
            .child(
                XmlElement::new("w:pgMar")
                    .attr("w:top", self.margin_top.to_string())
                    .attr("w:right", self.margin_right.to_string())
                    .attr("w:bottom", self.margin_bottom.to_string())
                    .attr("w:left", self.margin_left.to_string())
                    .attr("w:header", "720")
                    .attr("w:footer", "720")
                    .attr("w:gutter", "0"),
            )
            .child(XmlElement::new("w:cols").attr("w:space", "720"))
    }
}

/// Document body (w:body)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    /// Block-level content, in page order
    pub content: Vec<BlockContent>,
    pub section: SectionProperties,
}

impl Body {
    /// Parse body from XML reader (after w:body start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut body = Body::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"p" => {
                        let para = Paragraph::from_reader(reader)?;
                        body.content.push(BlockContent::Paragraph(para));
                    }
                    b"tbl" => {
                        let table = Table::from_reader(reader)?;
                        body.content.push(BlockContent::Table(table));
                    }
                    b"sectPr" => body.section = SectionProperties::from_reader(reader)?,
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::Empty(e) if e.name().local_name().as_ref() == b"p" => {
                    body.content.push(BlockContent::Paragraph(Paragraph::default()));
                }
                Event::End(e) if e.name().local_name().as_ref() == b"body" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(body)
    }

    /// Get all paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|c| match c {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Get all tables
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.content.iter().filter_map(|c| match c {
            BlockContent::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Append a paragraph, returning it for formatting
    pub fn add_paragraph(&mut self, para: Paragraph) -> &mut Paragraph {
        self.content.push(BlockContent::Paragraph(para));
        match self.content.last_mut() {
            Some(BlockContent::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    /// Append a table, returning it for formatting
    pub fn add_table(&mut self, table: Table) -> &mut Table {
        self.content.push(BlockContent::Table(table));
        match self.content.last_mut() {
            Some(BlockContent::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    /// Ordered summary of every block
    pub fn outline(&self) -> Vec<BlockSummary> {
        self.content.iter().map(BlockSummary::from).collect()
    }

    /// Write body to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        for (i, block) in self.content.iter().enumerate() {
            log::trace!("writing block {}", i);
            block.write_to(writer)?;
        }
        self.section.to_element().write_to(writer)?;

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        Ok(())
    }
}

impl BlockContent {
    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            BlockContent::Paragraph(para) => para.write_to(writer),
            BlockContent::Table(table) => table.write_to(writer),
        }
    }
}

/// What a block looks like from the outside
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockSummary {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Table { rows: usize, columns: usize },
    PageBreak,
}

impl From<&BlockContent> for BlockSummary {
    fn from(block: &BlockContent) -> Self {
        match block {
            BlockContent::Table(t) => BlockSummary::Table {
                rows: t.row_count(),
                columns: t.column_count(),
            },
            BlockContent::Paragraph(p) if p.is_page_break() => BlockSummary::PageBreak,
            BlockContent::Paragraph(p) => match p.heading_level() {
                Some(level) => BlockSummary::Heading {
                    level,
                    text: p.text(),
                },
                None => BlockSummary::Paragraph { text: p.text() },
            },
        }
    }
}

impl fmt::Display for BlockSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSummary::Heading { level, text } => write!(f, "H{} {}", level, text),
            BlockSummary::Paragraph { text } => {
                // first line only, diagrams span many
                let line = text.lines().next().unwrap_or_default();
                write!(f, "   {}", line)
            }
            BlockSummary::Table { rows, columns } => write!(f, "   [table {}x{}]", rows, columns),
            BlockSummary::PageBreak => write!(f, "   ---- page break ----"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(body: &Body) -> Body {
        let mut writer = Writer::new(Vec::new());
        body.write_to(&mut writer).unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        let mut reader = Reader::from_str(&xml);
        let mut buf = Vec::new();
        reader.read_event_into(&mut buf).unwrap();
        Body::from_reader(&mut reader).unwrap()
    }

    #[test]
    fn test_outline_kinds() {
        let mut body = Body::default();
        body.add_paragraph(Paragraph::new("Intro")).set_style("Heading1");
        body.add_paragraph(Paragraph::new("text"));
        body.add_paragraph(Paragraph::page_break());
        body.add_paragraph(Paragraph::default());

        assert_eq!(
            body.outline(),
            vec![
                BlockSummary::Heading {
                    level: 1,
                    text: "Intro".into()
                },
                BlockSummary::Paragraph { text: "text".into() },
                BlockSummary::PageBreak,
                BlockSummary::Paragraph { text: String::new() },
            ]
        );
    }

    #[test]
    fn test_section_roundtrip() {
        let mut body = Body::default();
        body.add_paragraph(Paragraph::new("x"));
        body.section.margin_left = 720;

        let parsed = roundtrip(&body);
        assert_eq!(parsed.section, body.section);
        assert_eq!(parsed.section.text_width(), PAGE_WIDTH - 720 - INCH);
        assert_eq!(parsed.outline(), body.outline());
    }

    #[test]
    fn test_default_text_width() {
        assert_eq!(SectionProperties::default().text_width(), 9360);
    }

    #[test]
    fn test_summary_display() {
        let diagram = BlockSummary::Paragraph {
            text: "+---+\n| a |".into(),
        };
        assert_eq!(diagram.to_string(), "   +---+");
        assert_eq!(
            BlockSummary::Table { rows: 2, columns: 3 }.to_string(),
            "   [table 2x3]"
        );
    }
}
