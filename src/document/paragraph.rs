//! Paragraph element (w:p)

use crate::document::styles;
use crate::document::Run;
use crate::error::Result;
use crate::xml::{self, get_attr, get_w_val};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Paragraph element (w:p)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    /// Paragraph properties
    pub properties: Option<ParagraphProperties>,
    /// Runs, in order
    pub runs: Vec<Run>,
}

/// Paragraph properties (w:pPr)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphProperties {
    /// Style ID
    pub style: Option<String>,
    /// Custom tab stops
    pub tabs: Vec<TabStop>,
    /// Justification
    pub alignment: Option<Alignment>,
}

/// Paragraph justification (w:jc)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    /// Justified on both margins
    Both,
}

impl Alignment {
    /// Parse from OOXML string value
    pub fn parse(s: &str) -> Self {
        match s {
            "center" => Alignment::Center,
            "right" | "end" => Alignment::Right,
            "both" | "distribute" => Alignment::Both,
            _ => Alignment::Left,
        }
    }

    /// Convert to OOXML string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Both => "both",
        }
    }
}

/// A custom tab stop (w:tab inside w:tabs)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabStop {
    pub alignment: Alignment,
    /// Position from the left margin, in twips
    pub position: i32,
}

impl TabStop {
    /// Left-aligned stop at `inches` from the margin
    pub fn left_inches(inches: f32) -> Self {
        TabStop {
            alignment: Alignment::Left,
            position: (inches * 1440.0).round() as i32,
        }
    }
}

impl Paragraph {
    /// Create a new paragraph with text
    pub fn new(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::new(text)],
            ..Default::default()
        }
    }

    /// Paragraph holding a single page break, as Word inserts it
    pub fn page_break() -> Self {
        Paragraph {
            runs: vec![Run::page_break()],
            ..Default::default()
        }
    }

    /// Parse paragraph from reader (after w:p start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut para = Paragraph::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"pPr" => para.properties = Some(ParagraphProperties::from_reader(reader)?),
                    b"r" => para.runs.push(Run::from_reader(reader)?),
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::Empty(e) if e.name().local_name().as_ref() == b"r" => {
                    para.runs.push(Run::default());
                }
                Event::End(e) if e.name().local_name().as_ref() == b"p" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(para)
    }

    /// Get all text in this paragraph
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }

    /// Get all runs
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter()
    }

    /// Get all runs mutably
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.runs.iter_mut()
    }

    /// Get style ID
    pub fn style(&self) -> Option<&str> {
        self.properties.as_ref()?.style.as_deref()
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.properties.as_ref()?.alignment
    }

    pub fn tab_stops(&self) -> &[TabStop] {
        self.properties
            .as_ref()
            .map(|p| p.tabs.as_slice())
            .unwrap_or_default()
    }

    /// Heading level from the paragraph style: 0 for `Title`, N for `HeadingN`
    pub fn heading_level(&self) -> Option<u8> {
        styles::heading_level(self.style()?)
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// True for a paragraph made only of page-break runs
    pub fn is_page_break(&self) -> bool {
        !self.runs.is_empty() && self.runs.iter().all(Run::is_page_break)
    }

    /// Append a run, returning it for formatting
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Append a plain text run
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Run {
        self.add_run(Run::new(text))
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.props_mut().style = Some(style.into());
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.props_mut().alignment = Some(alignment);
    }

    pub fn add_tab_stop(&mut self, tab: TabStop) {
        self.props_mut().tabs.push(tab);
    }

    fn props_mut(&mut self) -> &mut ParagraphProperties {
        self.properties.get_or_insert_with(Default::default)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let props = self
            .properties
            .as_ref()
            .filter(|p| **p != ParagraphProperties::default());

        if props.is_none() && self.runs.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("w:p")))?;
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:p")))?;
        if let Some(props) = props {
            props.write_to(writer)?;
        }
        for run in &self.runs {
            run.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:p")))?;

        Ok(())
    }
}

impl ParagraphProperties {
    /// Parse from reader (after w:pPr start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut props = ParagraphProperties::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"tabs" => props.tabs = parse_tabs(reader)?,
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"pStyle" => props.style = get_w_val(&e),
                    b"jc" => props.alignment = get_w_val(&e).map(|v| Alignment::parse(&v)),
                    _ => {}
                },
                Event::End(e) if e.name().local_name().as_ref() == b"pPr" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(props)
    }

    /// Write to XML writer (pStyle, tabs, jc in schema order)
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;

        if let Some(style) = &self.style {
            xml::write_val(writer, "w:pStyle", style)?;
        }

        if !self.tabs.is_empty() {
            writer.write_event(Event::Start(BytesStart::new("w:tabs")))?;
            for tab in &self.tabs {
                let mut elem = BytesStart::new("w:tab");
                elem.push_attribute(("w:val", tab.alignment.as_str()));
                elem.push_attribute(("w:pos", tab.position.to_string().as_str()));
                writer.write_event(Event::Empty(elem))?;
            }
            writer.write_event(Event::End(BytesEnd::new("w:tabs")))?;
        }

        if let Some(alignment) = self.alignment {
            xml::write_val(writer, "w:jc", alignment.as_str())?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }
}

fn parse_tabs<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<TabStop>> {
    let mut tabs = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) if e.name().local_name().as_ref() == b"tab" => {
                let position = get_attr(&e, "w:pos").and_then(|v| v.parse().ok());
                if let Some(position) = position {
                    tabs.push(TabStop {
                        alignment: get_w_val(&e)
                            .map(|v| Alignment::parse(&v))
                            .unwrap_or_default(),
                        position,
                    });
                }
            }
            Event::End(e) if e.name().local_name().as_ref() == b"tabs" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(tabs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(para: &Paragraph) -> (String, Paragraph) {
        let mut writer = Writer::new(Vec::new());
        para.write_to(&mut writer).unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        let mut reader = Reader::from_str(&xml);
        let mut buf = Vec::new();
        let parsed = match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(_) => Paragraph::from_reader(&mut reader).unwrap(),
            Event::Empty(_) => Paragraph::default(),
            other => panic!("unexpected {other:?}"),
        };
        (xml, parsed)
    }

    #[test]
    fn test_empty_paragraph() {
        let (xml, parsed) = roundtrip(&Paragraph::default());
        assert_eq!(xml, "<w:p/>");
        assert_eq!(parsed.text(), "");
    }

    #[test]
    fn test_toc_entry_with_tab_stop() {
        let mut para = Paragraph::default();
        para.add_text("   1.1 Project Overview");
        para.add_text("\t3");
        para.add_tab_stop(TabStop::left_inches(6.0));

        let (xml, parsed) = roundtrip(&para);
        assert!(xml.contains(r#"<w:tabs><w:tab w:val="left" w:pos="8640"/></w:tabs>"#));
        assert_eq!(parsed.text(), "   1.1 Project Overview\t3");
        assert_eq!(parsed.tab_stops(), &[TabStop::left_inches(6.0)]);
    }

    #[test]
    fn test_style_and_alignment() {
        let mut para = Paragraph::new("SoundPlus++ Project");
        para.set_style("Title");
        para.set_alignment(Alignment::Center);

        let (xml, parsed) = roundtrip(&para);
        assert!(xml.starts_with(
            r#"<w:p><w:pPr><w:pStyle w:val="Title"/><w:jc w:val="center"/></w:pPr>"#
        ));
        assert_eq!(parsed.heading_level(), Some(0));
        assert_eq!(parsed.alignment(), Some(Alignment::Center));
        assert_eq!(parsed, para);
    }

    #[test]
    fn test_page_break_paragraph() {
        let (_, parsed) = roundtrip(&Paragraph::page_break());
        assert!(parsed.is_page_break());
        assert!(!parsed.is_heading());
        assert!(!Paragraph::default().is_page_break());
    }

    #[test]
    fn test_add_run_returns_last() {
        let mut para = Paragraph::default();
        para.add_text("a");
        para.add_text("b").set_bold(true);
        assert!(!para.runs[0].bold());
        assert!(para.runs[1].bold());
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!(Alignment::parse("end"), Alignment::Right);
        assert_eq!(Alignment::parse("start"), Alignment::Left);
        assert_eq!(Alignment::Both.as_str(), "both");
    }
}
