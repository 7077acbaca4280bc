//! Integration test: Document API

use cicd_report::document::{Alignment, BlockSummary};
use cicd_report::{Document, Error};
use pretty_assertions::assert_eq;

fn sample() -> Document {
    let mut doc = Document::new();
    doc.add_heading("SoundPlus++ Project", 0)
        .unwrap()
        .set_alignment(Alignment::Center);
    doc.add_paragraph("   indented\tand tabbed");
    doc.add_page_break();
    doc.add_heading("1. Introduction", 1).unwrap();
    doc.add_table(
        &["Tool", "Version", "Purpose"],
        &[["Docker", "24.x", "Containerization platform"]],
    )
    .unwrap();
    doc.add_empty_paragraph();
    doc
}

#[test]
fn test_save_and_reopen_keeps_outline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.docx");

    let mut doc = sample();
    doc.save(&path).expect("save");
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    let reopened = Document::open(&path).expect("reopen");
    assert_eq!(reopened.outline(), doc.outline());
    assert_eq!(
        reopened.outline(),
        vec![
            BlockSummary::Heading {
                level: 0,
                text: "SoundPlus++ Project".into()
            },
            BlockSummary::Paragraph {
                text: "   indented\tand tabbed".into()
            },
            BlockSummary::PageBreak,
            BlockSummary::Heading {
                level: 1,
                text: "1. Introduction".into()
            },
            BlockSummary::Table { rows: 2, columns: 3 },
            BlockSummary::Paragraph {
                text: String::new()
            },
        ]
    );
}

#[test]
fn test_reopened_table_keeps_header_styling() {
    let mut doc = sample();
    let reopened = Document::from_bytes(&doc.to_bytes().unwrap()).unwrap();

    let table = reopened.table(0).expect("table");
    assert_eq!(table.style(), Some("TableGrid"));
    assert_eq!(table.header_texts(), vec!["Tool", "Version", "Purpose"]);

    let header = table.cell(0, 0).unwrap();
    assert_eq!(header.shading().map(|s| s.fill.as_str()), Some("2E86AB"));
    let run = header.paragraphs[0].runs().next().unwrap();
    assert!(run.bold());
    assert_eq!(run.color(), Some("FFFFFF"));

    assert_eq!(table.cell(1, 0).unwrap().text(), "Docker");
    assert_eq!(table.cell(1, 0).unwrap().shading(), None);
}

#[test]
fn test_reopened_title_alignment() {
    let mut doc = sample();
    let reopened = Document::from_bytes(&doc.to_bytes().unwrap()).unwrap();

    let title = reopened.paragraph(0).unwrap();
    assert_eq!(title.style(), Some("Title"));
    assert_eq!(title.alignment(), Some(Alignment::Center));
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.docx");

    let err = sample().save(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err}");
    assert!(!path.exists());
}

#[test]
fn test_text_joins_paragraphs() {
    let doc = sample();
    let text = doc.text();
    assert!(text.starts_with("SoundPlus++ Project\n   indented\tand tabbed\n"));
    assert!(!text.contains("Docker"));
}
