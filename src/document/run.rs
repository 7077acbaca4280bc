//! Run element (w:r) - a contiguous run of text with uniform formatting

use crate::error::Result;
use crate::xml::{self, get_attr, get_w_val, parse_bool};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Run element (w:r)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    /// Run properties
    pub properties: Option<RunProperties>,
    /// Run content
    pub content: Vec<RunContent>,
}

/// Content within a run
#[derive(Clone, Debug, PartialEq)]
pub enum RunContent {
    /// Text (w:t)
    Text(String),
    /// Tab (w:tab)
    Tab,
    /// Break (w:br)
    Break(BreakType),
}

/// Break type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BreakType {
    #[default]
    TextWrapping,
    Page,
}

/// Run properties (w:rPr)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunProperties {
    /// Font family (ASCII and high-ANSI slots)
    pub font: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// RGB hex, e.g. "FFFFFF"
    pub color: Option<String>,
    /// Font size in half-points (24 = 12pt)
    pub size: Option<u32>,
}

impl Run {
    /// Create a run from text.
    ///
    /// `\t` becomes a tab and `\n` or `\r` a line break, so multi-line text
    /// such as diagrams keeps its shape.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut content = Vec::new();
        let mut pending = String::new();

        for ch in text.chars() {
            let special = match ch {
                '\t' => RunContent::Tab,
                '\n' | '\r' => RunContent::Break(BreakType::TextWrapping),
                _ => {
                    pending.push(ch);
                    continue;
                }
            };
            if !pending.is_empty() {
                content.push(RunContent::Text(std::mem::take(&mut pending)));
            }
            content.push(special);
        }

        if !pending.is_empty() || content.is_empty() {
            content.push(RunContent::Text(pending));
        }

        Run {
            content,
            ..Default::default()
        }
    }

    /// Run holding a single page break
    pub fn page_break() -> Self {
        Run {
            content: vec![RunContent::Break(BreakType::Page)],
            ..Default::default()
        }
    }

    /// Parse from reader (after w:r start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut run = Run::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"rPr" => run.properties = Some(RunProperties::from_reader(reader)?),
                    b"t" => run.content.push(RunContent::Text(read_text_content(reader)?)),
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"t" => run.content.push(RunContent::Text(String::new())),
                    b"tab" => run.content.push(RunContent::Tab),
                    b"br" => {
                        let kind = get_attr(&e, "w:type").or_else(|| get_attr(&e, "type"));
                        run.content.push(RunContent::Break(match kind.as_deref() {
                            Some("page") => BreakType::Page,
                            _ => BreakType::TextWrapping,
                        }));
                    }
                    b"cr" => run
                        .content
                        .push(RunContent::Break(BreakType::TextWrapping)),
                    _ => {}
                },
                Event::End(e) if e.name().local_name().as_ref() == b"r" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(run)
    }

    /// Text of this run, tabs and line breaks included
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            match content {
                RunContent::Text(t) => result.push_str(t),
                RunContent::Tab => result.push('\t'),
                RunContent::Break(BreakType::TextWrapping) => result.push('\n'),
                RunContent::Break(BreakType::Page) => {}
            }
        }
        result
    }

    /// True when the run holds nothing but page breaks
    pub fn is_page_break(&self) -> bool {
        !self.content.is_empty()
            && self
                .content
                .iter()
                .all(|c| matches!(c, RunContent::Break(BreakType::Page)))
    }

    pub fn bold(&self) -> bool {
        self.properties.as_ref().and_then(|p| p.bold).unwrap_or(false)
    }

    pub fn italic(&self) -> bool {
        self.properties.as_ref().and_then(|p| p.italic).unwrap_or(false)
    }

    /// Font size in points (None if not specified)
    pub fn font_size_pt(&self) -> Option<f32> {
        self.properties.as_ref()?.size.map(|s| s as f32 / 2.0)
    }

    pub fn color(&self) -> Option<&str> {
        self.properties.as_ref()?.color.as_deref()
    }

    pub fn font(&self) -> Option<&str> {
        self.properties.as_ref()?.font.as_deref()
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.props_mut().bold = Some(bold);
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.props_mut().italic = Some(italic);
    }

    /// Set font size in points; Word stores half-points
    pub fn set_font_size_pt(&mut self, size: f32) {
        self.props_mut().size = Some((size * 2.0).round() as u32);
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.props_mut().color = Some(color.into());
    }

    pub fn set_font(&mut self, font: impl Into<String>) {
        self.props_mut().font = Some(font.into());
    }

    fn props_mut(&mut self) -> &mut RunProperties {
        self.properties.get_or_insert_with(Default::default)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;

        if let Some(props) = &self.properties {
            props.write_to(writer)?;
        }
        for content in &self.content {
            content.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }
}

impl RunContent {
    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            RunContent::Text(text) => {
                let mut start = BytesStart::new("w:t");
                if text.starts_with(' ') || text.ends_with(' ') || text.contains("  ") {
                    start.push_attribute(("xml:space", "preserve"));
                }
                writer.write_event(Event::Start(start))?;
                writer.write_event(Event::Text(BytesText::new(text)))?;
                writer.write_event(Event::End(BytesEnd::new("w:t")))?;
            }
            RunContent::Tab => {
                writer.write_event(Event::Empty(BytesStart::new("w:tab")))?;
            }
            RunContent::Break(BreakType::TextWrapping) => {
                writer.write_event(Event::Empty(BytesStart::new("w:br")))?;
            }
            RunContent::Break(BreakType::Page) => {
                let mut start = BytesStart::new("w:br");
                start.push_attribute(("w:type", "page"));
                writer.write_event(Event::Empty(start))?;
            }
        }
        Ok(())
    }
}

impl RunProperties {
    /// Parse from reader (after w:rPr start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut props = RunProperties::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => xml::skip_element(reader, &e)?,
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"rFonts" => {
                        props.font = get_attr(&e, "w:ascii").or_else(|| get_attr(&e, "ascii"));
                    }
                    b"b" => props.bold = Some(parse_bool(&e)),
                    b"i" => props.italic = Some(parse_bool(&e)),
                    b"color" => props.color = get_w_val(&e),
                    b"sz" => props.size = get_w_val(&e).and_then(|v| v.parse().ok()),
                    _ => {}
                },
                Event::End(e) if e.name().local_name().as_ref() == b"rPr" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(props)
    }

    /// Write to XML writer, in schema order
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if *self == RunProperties::default() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;

        if let Some(font) = &self.font {
            let mut elem = BytesStart::new("w:rFonts");
            elem.push_attribute(("w:ascii", font.as_str()));
            elem.push_attribute(("w:hAnsi", font.as_str()));
            elem.push_attribute(("w:cs", font.as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(bold) = self.bold {
            write_toggle(writer, "w:b", bold)?;
        }
        if let Some(italic) = self.italic {
            write_toggle(writer, "w:i", italic)?;
        }
        if let Some(color) = &self.color {
            xml::write_val(writer, "w:color", color)?;
        }
        if let Some(size) = self.size {
            xml::write_val(writer, "w:sz", &size.to_string())?;
            xml::write_val(writer, "w:szCs", &size.to_string())?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        Ok(())
    }
}

fn write_toggle<W: Write>(writer: &mut Writer<W>, name: &str, on: bool) -> Result<()> {
    if on {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        Ok(())
    } else {
        xml::write_val(writer, name, "0")
    }
}

/// Read text content from w:t element
fn read_text_content<R: BufRead>(reader: &mut Reader<R>) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::End(e) if e.name().local_name().as_ref() == b"t" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_run(xml: &str) -> Run {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) if e.name().as_ref() == b"w:r" => break,
                Event::Eof => panic!("no run"),
                _ => {}
            }
        }
        Run::from_reader(&mut reader).unwrap()
    }

    fn write_run(run: &Run) -> String {
        let mut writer = Writer::new(Vec::new());
        run.write_to(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_new_splits_tabs_and_breaks() {
        let run = Run::new("\n- one\tA");
        assert_eq!(
            run.content,
            vec![
                RunContent::Break(BreakType::TextWrapping),
                RunContent::Text("- one".into()),
                RunContent::Tab,
                RunContent::Text("A".into()),
            ]
        );
        assert_eq!(run.text(), "\n- one\tA");
    }

    #[test]
    fn test_new_empty_text() {
        assert_eq!(Run::new("").content, vec![RunContent::Text(String::new())]);
    }

    #[test]
    fn test_page_break() {
        let run = Run::page_break();
        assert!(run.is_page_break());
        assert_eq!(run.text(), "");
        assert_eq!(write_run(&run), r#"<w:r><w:br w:type="page"/></w:r>"#);
        assert!(!Run::new("x").is_page_break());
    }

    #[test]
    fn test_formatting_written_in_order() {
        let mut run = Run::new("Tool");
        run.set_color("FFFFFF");
        run.set_bold(true);
        run.set_font("Courier New");
        run.set_font_size_pt(8.0);

        assert_eq!(
            write_run(&run),
            concat!(
                r#"<w:r><w:rPr><w:rFonts w:ascii="Courier New" w:hAnsi="Courier New" w:cs="Courier New"/>"#,
                r#"<w:b/><w:color w:val="FFFFFF"/><w:sz w:val="16"/><w:szCs w:val="16"/></w:rPr>"#,
                r#"<w:t>Tool</w:t></w:r>"#
            )
        );
    }

    #[test]
    fn test_preserves_spaces() {
        let xml = write_run(&Run::new("   1.1 Overview"));
        assert!(xml.contains(r#"<w:t xml:space="preserve">   1.1 Overview</w:t>"#));
    }

    #[test]
    fn test_parse_formatted_run() {
        let run = parse_run(
            r#"<w:r><w:rPr><w:rFonts w:ascii="Courier New"/><w:b/><w:i w:val="0"/><w:sz w:val="28"/><w:color w:val="FF0000"/></w:rPr><w:t xml:space="preserve"> a&amp;b </w:t><w:tab/><w:br/></w:r>"#,
        );

        assert!(run.bold());
        assert!(!run.italic());
        assert_eq!(run.font(), Some("Courier New"));
        assert_eq!(run.font_size_pt(), Some(14.0));
        assert_eq!(run.color(), Some("FF0000"));
        assert_eq!(run.text(), " a&b \t\n");
    }

    #[test]
    fn test_write_then_parse() {
        let mut run = Run::new("line one\n  line two");
        run.set_italic(true);
        let parsed = parse_run(&write_run(&run));
        assert_eq!(parsed, run);
    }
}
