//! Integration test: the SoundPlus++ report end to end

use cicd_report::report::{content, diagrams, Block, ReportAssembler};
use cicd_report::{assemble, BlockSummary, Document};
use pretty_assertions::assert_eq;

#[test]
fn test_outline_matches_plan() {
    let plan = content::plan();
    let doc = assemble(&plan).unwrap();

    let expected: Vec<_> = plan.iter().map(Block::summary).collect();
    assert_eq!(doc.outline(), expected);
}

#[test]
fn test_written_report_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(content::DEFAULT_OUTPUT);

    let mut assembler = ReportAssembler::new();
    assembler.set_properties(content::properties());
    assembler.push_all(&content::plan()).unwrap();
    let saved = assembler.save(&path).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    let reopened = Document::open(&path).unwrap();
    assert_eq!(reopened.outline(), saved.outline());
    assert_eq!(reopened.core_properties(), &content::properties());
}

#[test]
fn test_identical_runs_give_identical_bytes() {
    let first = assemble(&content::plan()).unwrap().to_bytes().unwrap();
    let second = assemble(&content::plan()).unwrap().to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_table_is_rectangular_after_reading() {
    let mut doc = assemble(&content::plan()).unwrap();
    let reopened = Document::from_bytes(&doc.to_bytes().unwrap()).unwrap();

    let tables: Vec<_> = reopened.tables().collect();
    assert_eq!(tables.len(), 19);
    for table in tables {
        assert!(table.is_rectangular(), "{:?}", table.header_texts());
        assert!(table.row_count() >= 2);
    }
}

#[test]
fn test_devops_table_docker_row() {
    let doc = assemble(&content::plan()).unwrap();
    let devops = doc
        .tables()
        .find(|t| t.header_texts() == ["Tool", "Version", "Purpose"])
        .unwrap();

    let docker: Vec<_> = devops
        .rows()
        .find(|r| r.texts()[0] == "Docker")
        .unwrap()
        .texts();
    assert_eq!(
        docker,
        vec![
            "Docker",
            "24.x",
            "Containerization platform for packaging applications with dependencies"
        ]
    );
}

#[test]
fn test_diagram_survives_reopen() {
    let mut doc = assemble(&content::plan()).unwrap();
    let reopened = Document::from_bytes(&doc.to_bytes().unwrap()).unwrap();

    let found = reopened
        .outline()
        .into_iter()
        .any(|b| b == BlockSummary::Paragraph { text: diagrams::CONNECTIVITY.to_string() });
    assert!(found);
}
