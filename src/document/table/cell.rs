//! Table cell elements (w:tc, w:tcPr)

use crate::document::Paragraph;
use crate::error::Result;
use crate::xml::{self, get_attr};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

use super::types::{HeaderStyle, Shading};

/// Table cell (w:tc)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableCell {
    /// Cell properties
    pub properties: TableCellProperties,
    /// Cell content; Word requires at least one paragraph
    pub paragraphs: Vec<Paragraph>,
}

/// Table cell properties
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableCellProperties {
    /// Cell width in twips
    pub width: Option<i32>,
    /// Background fill
    pub shading: Option<Shading>,
}

impl TableCell {
    /// Create a new cell with text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let para = if text.is_empty() {
            Paragraph::default()
        } else {
            Paragraph::new(text)
        };
        TableCell {
            paragraphs: vec![para],
            ..Default::default()
        }
    }

    /// Parse from reader (after w:tc start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut cell = TableCell::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"tcPr" => cell.properties = TableCellProperties::from_reader(reader)?,
                    b"p" => cell.paragraphs.push(Paragraph::from_reader(reader)?),
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::Empty(e) if e.name().local_name().as_ref() == b"p" => {
                    cell.paragraphs.push(Paragraph::default());
                }
                Event::End(e) if e.name().local_name().as_ref() == b"tc" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(cell)
    }

    /// Get cell text (all paragraphs joined by newlines)
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn shading(&self) -> Option<&Shading> {
        self.properties.shading.as_ref()
    }

    pub fn set_shading(&mut self, shading: Shading) {
        self.properties.shading = Some(shading);
    }

    pub fn width(&self) -> Option<i32> {
        self.properties.width
    }

    pub fn set_width(&mut self, width: i32) {
        self.properties.width = Some(width);
    }

    /// Fill the background and restyle every run of the cell
    pub fn apply_header_style(&mut self, style: &HeaderStyle) {
        self.set_shading(Shading::fill(style.fill.as_str()));
        for run in self.paragraphs.iter_mut().flat_map(|p| p.runs_mut()) {
            run.set_bold(style.bold);
            run.set_color(style.text_color.as_str());
        }
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:tc")))?;

        self.properties.write_to(writer)?;

        if self.paragraphs.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("w:p")))?;
        }
        for para in &self.paragraphs {
            para.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:tc")))?;
        Ok(())
    }
}

impl TableCellProperties {
    /// Parse from reader (after w:tcPr start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut props = TableCellProperties::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => xml::skip_element(reader, &e)?,
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"tcW" => {
                        props.width = get_attr(&e, "w:w")
                            .or_else(|| get_attr(&e, "w"))
                            .and_then(|v| v.parse().ok());
                    }
                    b"shd" => {
                        props.shading = get_attr(&e, "w:fill")
                            .or_else(|| get_attr(&e, "fill"))
                            .filter(|fill| fill != "auto")
                            .map(Shading::fill);
                    }
                    _ => {}
                },
                Event::End(e) if e.name().local_name().as_ref() == b"tcPr" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(props)
    }

    /// Write to XML writer (tcW before shd, per schema)
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if *self == TableCellProperties::default() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:tcPr")))?;

        if let Some(width) = self.width {
            let mut elem = BytesStart::new("w:tcW");
            elem.push_attribute(("w:w", width.to_string().as_str()));
            elem.push_attribute(("w:type", "dxa"));
            writer.write_event(Event::Empty(elem))?;
        }

        if let Some(shading) = &self.shading {
            let mut elem = BytesStart::new("w:shd");
            elem.push_attribute(("w:val", "clear"));
            elem.push_attribute(("w:color", "auto"));
            elem.push_attribute(("w:fill", shading.fill.as_str()));
            writer.write_event(Event::Empty(elem))?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:tcPr")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cell(xml: &str) -> TableCell {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        reader.read_event_into(&mut buf).unwrap();
        TableCell::from_reader(&mut reader).unwrap()
    }

    #[test]
    fn test_header_cell_xml() {
        let mut cell = TableCell::new("Tool");
        cell.set_width(3120);
        cell.apply_header_style(&HeaderStyle::default());

        let mut writer = Writer::new(Vec::new());
        cell.write_to(&mut writer).unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        assert!(xml.starts_with(concat!(
            r#"<w:tc><w:tcPr><w:tcW w:w="3120" w:type="dxa"/>"#,
            r#"<w:shd w:val="clear" w:color="auto" w:fill="2E86AB"/></w:tcPr>"#
        )));
        assert_eq!(parse_cell(&xml), cell);
    }

    #[test]
    fn test_auto_fill_is_no_shading() {
        let cell = parse_cell(
            r#"<w:tc><w:tcPr><w:shd w:val="clear" w:color="auto" w:fill="auto"/></w:tcPr><w:p/></w:tc>"#,
        );
        assert_eq!(cell.shading(), None);
        assert_eq!(cell.text(), "");
        assert_eq!(cell.paragraphs.len(), 1);
    }

    #[test]
    fn test_empty_cell_still_has_paragraph() {
        let cell = TableCell::default();
        let mut writer = Writer::new(Vec::new());
        cell.write_to(&mut writer).unwrap();
        assert_eq!(writer.into_inner(), b"<w:tc><w:p/></w:tc>");
    }
}
