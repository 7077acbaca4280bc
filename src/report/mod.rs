//! Report assembly: an ordered plan of content blocks rendered into a
//! [`Document`] with uniform styling.
//!
//! The literal SoundPlus++ content lives in [`content`]; this module only
//! knows how each kind of block looks on the page.

pub mod content;
pub mod diagrams;

use crate::document::{Alignment, BlockSummary, CoreProperties, Document, TabStop};
use crate::error::Result;
use std::path::Path;

/// Monospace font used for diagrams
pub const DIAGRAM_FONT: &str = "Courier New";
/// Diagram font size, in points
pub const DIAGRAM_SIZE_PT: f32 = 8.0;
/// Position of the page-number tab in contents entries, in inches
pub const TOC_TAB_INCHES: f32 = 6.0;

/// A run of text with its formatting
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size_pt: Option<f32>,
    pub font: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, pt: f32) -> Self {
        self.size_pt = Some(pt);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// A paragraph made of styled spans
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphBlock {
    pub spans: Vec<Span>,
    pub alignment: Option<Alignment>,
    pub tab_stop: Option<TabStop>,
}

impl ParagraphBlock {
    pub fn new(spans: impl IntoIterator<Item = Span>) -> Self {
        ParagraphBlock {
            spans: spans.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn tab_stop(mut self, tab: TabStop) -> Self {
        self.tab_stop = Some(tab);
        self
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One unit of the report, appended in page order
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading {
        text: String,
        level: u8,
        alignment: Option<Alignment>,
    },
    Paragraph(ParagraphBlock),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    PageBreak,
}

impl Block {
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level,
            alignment: None,
        }
    }

    /// Centered level-0 heading
    pub fn title(text: impl Into<String>) -> Self {
        Block::Heading {
            text: text.into(),
            level: 0,
            alignment: Some(Alignment::Center),
        }
    }

    /// Plain single-run paragraph
    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph(ParagraphBlock::new([Span::new(text)]))
    }

    pub fn empty() -> Self {
        Block::Paragraph(ParagraphBlock::default())
    }

    /// Centered monospace block that keeps the diagram's line structure
    pub fn diagram(text: &str) -> Self {
        let span = Span::new(text).font(DIAGRAM_FONT).size(DIAGRAM_SIZE_PT);
        Block::Paragraph(ParagraphBlock::new([span]).align(Alignment::Center))
    }

    /// Contents line: entry text, then the page number after a tab stop
    pub fn toc_entry(item: &str, page: &str) -> Self {
        Block::Paragraph(
            ParagraphBlock::new([Span::new(item), Span::new(format!("\t{}", page))])
                .tab_stop(TabStop::left_inches(TOC_TAB_INCHES)),
        )
    }

    /// Table with a header row. Array rows keep every row as wide as the header.
    pub fn table<const N: usize>(headers: [&str; N], rows: &[[&str; N]]) -> Self {
        Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// How this block shows up in the outline of the built document
    pub fn summary(&self) -> BlockSummary {
        match self {
            Block::Heading { text, level, .. } => BlockSummary::Heading {
                level: *level,
                text: text.clone(),
            },
            Block::Paragraph(p) => BlockSummary::Paragraph { text: p.text() },
            Block::Table { headers, rows } => BlockSummary::Table {
                rows: rows.len() + 1,
                columns: headers.len(),
            },
            Block::PageBreak => BlockSummary::PageBreak,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::Table { .. } => "table",
            Block::PageBreak => "page break",
        }
    }
}

/// Builds a document block by block, then writes it once.
///
/// [`save`](ReportAssembler::save) consumes the assembler, so nothing can be
/// appended after the file is written.
#[derive(Debug, Default)]
pub struct ReportAssembler {
    doc: Document,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_properties(&mut self, core: CoreProperties) {
        self.doc.set_core_properties(core);
    }

    /// Append one block after everything pushed so far
    pub fn push(&mut self, block: &Block) -> Result<()> {
        log::debug!("appending {} #{}", block.kind(), self.doc.block_count());

        match block {
            Block::Heading {
                text,
                level,
                alignment,
            } => {
                let para = self.doc.add_heading(text.as_str(), *level)?;
                if let Some(alignment) = alignment {
                    para.set_alignment(*alignment);
                }
            }
            Block::Paragraph(block) => {
                let para = self.doc.add_empty_paragraph();
                if let Some(alignment) = block.alignment {
                    para.set_alignment(alignment);
                }
                if let Some(tab) = block.tab_stop {
                    para.add_tab_stop(tab);
                }
                for span in &block.spans {
                    let run = para.add_text(span.text.as_str());
                    if span.bold {
                        run.set_bold(true);
                    }
                    if span.italic {
                        run.set_italic(true);
                    }
                    if let Some(size) = span.size_pt {
                        run.set_font_size_pt(size);
                    }
                    if let Some(font) = &span.font {
                        run.set_font(font.as_str());
                    }
                }
            }
            Block::Table { headers, rows } => {
                self.doc.add_table(headers.as_slice(), rows.as_slice())?;
            }
            Block::PageBreak => {
                self.doc.add_page_break();
            }
        }

        Ok(())
    }

    pub fn push_all<'a>(&mut self, blocks: impl IntoIterator<Item = &'a Block>) -> Result<()> {
        blocks.into_iter().try_for_each(|b| self.push(b))
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Write the document to `path`, handing it back for inspection
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<Document> {
        let mut doc = self.doc;
        doc.save(path)?;
        Ok(doc)
    }
}

/// Render `blocks` in order into a new document
pub fn assemble(blocks: &[Block]) -> Result<Document> {
    let mut assembler = ReportAssembler::new();
    assembler.push_all(blocks)?;
    Ok(assembler.into_document())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outline_follows_push_order() {
        let blocks = vec![
            Block::title("SoundPlus++ Project"),
            Block::text("intro"),
            Block::PageBreak,
            Block::table(
                ["Tool", "Version", "Purpose"],
                &[["Docker", "24.x", "Containerization platform"]],
            ),
            Block::empty(),
        ];

        let doc = assemble(&blocks).unwrap();
        let expected: Vec<_> = blocks.iter().map(Block::summary).collect();
        assert_eq!(doc.outline(), expected);
        assert_eq!(
            doc.outline()[3],
            BlockSummary::Table { rows: 2, columns: 3 }
        );
    }

    #[test]
    fn test_diagram_styling() {
        let doc = assemble(&[Block::diagram("\n+--+\n|  |\n+--+\n")]).unwrap();
        let para = doc.paragraph(0).unwrap();

        assert_eq!(para.alignment(), Some(Alignment::Center));
        assert_eq!(para.text(), "\n+--+\n|  |\n+--+\n");
        let run = para.runs().next().unwrap();
        assert_eq!(run.font(), Some(DIAGRAM_FONT));
        assert_eq!(run.font_size_pt(), Some(8.0));
    }

    #[test]
    fn test_toc_entry() {
        let doc = assemble(&[Block::toc_entry("   1.1 Project Overview", "3")]).unwrap();
        let para = doc.paragraph(0).unwrap();

        assert_eq!(para.text(), "   1.1 Project Overview\t3");
        assert_eq!(para.tab_stops(), &[TabStop::left_inches(6.0)]);
        assert_eq!(para.runs().count(), 2);
    }

    #[test]
    fn test_span_styles() {
        let block = Block::Paragraph(
            ParagraphBlock::new([Span::new("CI/CD").italic().size(14.0), Span::new(" v1").bold()])
                .align(Alignment::Center),
        );
        let doc = assemble(&[block]).unwrap();
        let runs: Vec<_> = doc.paragraph(0).unwrap().runs().collect();

        assert!(runs[0].italic());
        assert!(!runs[0].bold());
        assert_eq!(runs[0].font_size_pt(), Some(14.0));
        assert!(runs[1].bold());
    }

    #[test]
    fn test_bad_heading_level_stops_assembly() {
        let blocks = [Block::text("kept"), Block::heading("too deep", 12), Block::text("never")];
        let mut assembler = ReportAssembler::new();

        let err = assembler.push_all(&blocks).unwrap_err();
        assert!(matches!(err, Error::InvalidHeadingLevel(12)));
        assert_eq!(assembler.document().block_count(), 1);
    }

    #[test]
    fn test_ragged_table_rejected() {
        let block = Block::Table {
            headers: vec!["Secret Name".into(), "Purpose".into()],
            rows: vec![vec!["EC2_HOST".into()]],
        };
        let err = assemble(&[block]).unwrap_err();
        assert!(matches!(
            err,
            Error::RowLength {
                row: 0,
                expected: 2,
                found: 1
            }
        ));
    }
}
