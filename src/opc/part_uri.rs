//! Part names inside an OPC package

use crate::error::{Error, Result};
use std::fmt;

/// Absolute name of a part within the package, e.g. `/word/document.xml`.
///
/// Ordering is plain string ordering; the package writer relies on it to
/// emit ZIP entries in a stable sequence.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartUri {
    path: String,
}

impl PartUri {
    /// Build a part name, adding the leading '/' and dropping a trailing one.
    pub fn new(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() {
            return Err(Error::InvalidPartUri("empty path".into()));
        }

        let normalized = format!("/{}", path.trim_start_matches('/'));
        let normalized = normalized.trim_end_matches('/').to_string();

        if normalized.is_empty() || normalized.contains("//") {
            return Err(Error::InvalidPartUri(format!("invalid path '{}'", path)));
        }

        Ok(Self { path: normalized })
    }

    pub(crate) fn from_static(path: &'static str) -> Self {
        Self { path: path.into() }
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Name inside the ZIP archive (no leading '/')
    pub fn zip_name(&self) -> &str {
        &self.path[1..]
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    /// Extension of the last segment, if it has one
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        name.rfind('.').map(|pos| &name[pos + 1..]).filter(|ext| !ext.is_empty())
    }

    /// Directory portion, `""` for parts at the package root
    fn directory(&self) -> &str {
        let pos = self.path.rfind('/').unwrap_or(0);
        &self.path[..pos]
    }

    /// Relationships part for this part.
    ///
    /// `/word/document.xml` maps to `/word/_rels/document.xml.rels`.
    pub fn relationships_uri(&self) -> PartUri {
        PartUri {
            path: format!("{}/_rels/{}.rels", self.directory(), self.file_name()),
        }
    }

    /// Relationship target of `other` relative to this part's directory
    pub fn relative_target(&self, other: &PartUri) -> String {
        let dir = self.directory();
        match other.path.strip_prefix(dir) {
            Some(rest) if !dir.is_empty() && rest.starts_with('/') => rest[1..].to_string(),
            _ if dir.is_empty() => other.zip_name().to_string(),
            _ => other.path.clone(),
        }
    }

    /// Resolve a relationship target found in this part's `.rels`
    pub fn resolve(&self, target: &str) -> Result<PartUri> {
        if target.starts_with('/') {
            return PartUri::new(target);
        }

        let mut segments: Vec<&str> = self
            .directory()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        for segment in target.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }
        PartUri::new(&segments.join("/"))
    }

    /// Whether this names a `.rels` part
    pub fn is_relationships(&self) -> bool {
        self.path.contains("/_rels/") && self.path.ends_with(".rels")
    }
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Part names used by generated documents
pub mod well_known {
    use super::PartUri;

    pub fn document() -> PartUri {
        PartUri::from_static("/word/document.xml")
    }

    pub fn styles() -> PartUri {
        PartUri::from_static("/word/styles.xml")
    }

    pub fn core_props() -> PartUri {
        PartUri::from_static("/docProps/core.xml")
    }

    /// The package root, source of `/_rels/.rels`
    pub fn root() -> PartUri {
        PartUri::from_static("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_leading_slash() {
        assert_eq!(PartUri::new("word/document.xml").unwrap().as_str(), "/word/document.xml");
        assert_eq!(PartUri::new("/word/document.xml/").unwrap().as_str(), "/word/document.xml");
    }

    #[test]
    fn test_rejects_bad_paths() {
        assert!(PartUri::new("").is_err());
        assert!(PartUri::new("/").is_err());
        assert!(PartUri::new("word//document.xml").is_err());
    }

    #[test]
    fn test_file_name_and_extension() {
        let uri = PartUri::new("/word/document.xml").unwrap();
        assert_eq!(uri.file_name(), "document.xml");
        assert_eq!(uri.extension(), Some("xml"));
        assert_eq!(uri.zip_name(), "word/document.xml");
    }

    #[test]
    fn test_relationships_uri() {
        let uri = well_known::document();
        assert_eq!(uri.relationships_uri().as_str(), "/word/_rels/document.xml.rels");
        assert!(uri.relationships_uri().is_relationships());
        assert_eq!(well_known::root().relationships_uri().as_str(), "/_rels/.rels");
    }

    #[test]
    fn test_relative_target() {
        let doc = well_known::document();
        assert_eq!(doc.relative_target(&well_known::styles()), "styles.xml");
        assert_eq!(well_known::root().relative_target(&doc), "word/document.xml");
    }

    #[test]
    fn test_resolve() {
        let doc = well_known::document();
        assert_eq!(doc.resolve("styles.xml").unwrap(), well_known::styles());
        assert_eq!(doc.resolve("../docProps/core.xml").unwrap(), well_known::core_props());
        assert_eq!(well_known::root().resolve("word/document.xml").unwrap(), doc);
    }
}
