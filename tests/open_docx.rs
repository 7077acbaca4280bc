//! Integration test: package structure of a written DOCX file

use cicd_report::document::CoreProperties;
use cicd_report::opc::{rel_types, well_known, Package, MAIN_DOCUMENT, STYLES};
use cicd_report::Document;

fn written() -> Vec<u8> {
    let mut doc = Document::new();
    doc.add_heading("Heading", 1).unwrap();
    doc.add_paragraph("Hello, World!");
    doc.set_core_properties(CoreProperties {
        title: Some("SoundPlus++".into()),
        ..Default::default()
    });
    doc.to_bytes().unwrap()
}

#[test]
fn test_parts_and_content_types() {
    let pkg = Package::from_bytes(&written()).expect("open");

    let ct = pkg.content_types();
    assert_eq!(ct.get(&well_known::document()), Some(MAIN_DOCUMENT));
    assert_eq!(ct.get(&well_known::styles()), Some(STYLES));

    let uris: Vec<_> = pkg.parts().map(|(uri, _)| uri.as_str().to_string()).collect();
    assert_eq!(
        uris,
        vec!["/docProps/core.xml", "/word/document.xml", "/word/styles.xml"]
    );
}

#[test]
fn test_relationships() {
    let pkg = Package::from_bytes(&written()).expect("open");

    let doc_rel = pkg.relationships().by_type(rel_types::OFFICE_DOCUMENT).unwrap();
    assert_eq!(doc_rel.target, "word/document.xml");
    assert!(pkg.part_by_rel_type(rel_types::CORE_PROPERTIES).is_some());

    let main = pkg.main_document_part().expect("main part");
    assert!(main.relationships().by_type(rel_types::STYLES).is_some());

    let xml = main.data_as_str().unwrap();
    assert!(xml.contains("Hello, World!"));
    assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840"/>"#));
}

#[test]
fn test_package_roundtrip_is_stable() {
    let bytes = written();
    let pkg = Package::from_bytes(&bytes).unwrap();
    assert_eq!(pkg.to_bytes().unwrap(), bytes);

    let doc = Document::from_bytes(&bytes).unwrap();
    assert_eq!(doc.core_properties().title.as_deref(), Some("SoundPlus++"));
}
