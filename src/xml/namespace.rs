//! XML namespaces used in the parts this crate writes

/// WordprocessingML main namespace
pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office document relationships namespace (r:id attributes)
pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Content Types namespace
pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
/// Package Relationships namespace
pub const PR: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
/// Core Properties namespace
pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
/// Dublin Core elements
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// Dublin Core terms
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// Namespace declarations for the root of document.xml and styles.xml
pub fn document_namespaces() -> [(&'static str, &'static str); 2] {
    [("xmlns:w", W), ("xmlns:r", R)]
}
