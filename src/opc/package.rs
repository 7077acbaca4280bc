//! ZIP container for DOCX files
//!
//! Writing is deterministic: entries are emitted in part-name order and every
//! entry carries the DOS epoch as its modification time.

use crate::error::{Error, Result};
use crate::opc::relationships::rel_types;
use crate::opc::{well_known, ContentTypes, Part, PartUri, Relationships};
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

const CONTENT_TYPES_NAME: &str = "[Content_Types].xml";

/// An OPC package
#[derive(Debug, Default)]
pub struct Package {
    parts: BTreeMap<PartUri, Part>,
    /// Package-level relationships (`/_rels/.rels`)
    relationships: Relationships,
    content_types: ContentTypes,
}

impl Package {
    pub fn new() -> Self {
        Self {
            content_types: ContentTypes::new(),
            ..Default::default()
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let content_types = {
            let xml = read_entry(&mut archive, CONTENT_TYPES_NAME)?
                .ok_or_else(|| Error::MissingPart(CONTENT_TYPES_NAME.into()))?;
            ContentTypes::from_xml(&xml)?
        };

        let relationships = match read_entry(&mut archive, "_rels/.rels")? {
            Some(xml) => Relationships::from_xml(&xml)?,
            None => Relationships::new(),
        };

        let mut package = Self {
            parts: BTreeMap::new(),
            relationships,
            content_types,
        };

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();
            if name.ends_with('/') || name == CONTENT_TYPES_NAME {
                continue;
            }

            let uri = PartUri::new(&name)?;
            if uri.is_relationships() {
                continue;
            }

            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            let content_type = package
                .content_types
                .get(&uri)
                .unwrap_or("application/octet-stream")
                .to_string();
            package.parts.insert(uri.clone(), Part::new(uri, content_type, data));
        }

        let uris: Vec<PartUri> = package.parts.keys().cloned().collect();
        for uri in uris {
            let rels_uri = uri.relationships_uri();
            if let Some(xml) = read_entry(&mut archive, rels_uri.zip_name())? {
                let rels = Relationships::from_xml(&xml)?;
                if let Some(part) = package.parts.get_mut(&uri) {
                    part.set_relationships(rels);
                }
            }
        }

        log::debug!("read package with {} parts", package.parts.len());
        Ok(package)
    }

    /// Serialize to memory first, then write the file in one call, so a
    /// failed save leaves nothing behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        log::info!("wrote {} bytes to {}", bytes.len(), path.as_ref().display());
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(Cursor::new(&mut buf))?;
        Ok(buf)
    }

    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        zip.start_file(CONTENT_TYPES_NAME, options)?;
        self.content_types.write_to(&mut zip)?;

        if !self.relationships.is_empty() {
            let rels_uri = well_known::root().relationships_uri();
            zip.start_file(rels_uri.zip_name(), options)?;
            self.relationships.write_to(&mut zip)?;
        }

        for (uri, part) in &self.parts {
            log::debug!("writing part {} ({} bytes)", uri, part.data().len());
            zip.start_file(uri.zip_name(), options)?;
            zip.write_all(part.data())?;

            if !part.relationships().is_empty() {
                zip.start_file(uri.relationships_uri().zip_name(), options)?;
                part.relationships().write_to(&mut zip)?;
            }
        }

        zip.finish()?;
        Ok(())
    }

    pub fn part(&self, uri: &PartUri) -> Option<&Part> {
        self.parts.get(uri)
    }

    pub fn part_mut(&mut self, uri: &PartUri) -> Option<&mut Part> {
        self.parts.get_mut(uri)
    }

    /// Add or replace a part; relationships of a replaced part are kept
    pub fn put_part(&mut self, mut part: Part) {
        let uri = part.uri().clone();
        self.content_types.add_override(&uri, part.content_type());
        if let Some(old) = self.parts.remove(&uri) {
            part.set_relationships(old.relationships().clone());
        }
        self.parts.insert(uri, part);
    }

    pub fn parts(&self) -> impl Iterator<Item = (&PartUri, &Part)> {
        self.parts.iter()
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    pub fn relationships_mut(&mut self) -> &mut Relationships {
        &mut self.relationships
    }

    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    /// Part targeted by a package-level relationship of `rel_type`
    pub fn part_by_rel_type(&self, rel_type: &str) -> Option<&Part> {
        let rel = self.relationships.by_type(rel_type)?;
        let uri = well_known::root().resolve(&rel.target).ok()?;
        self.parts.get(&uri)
    }

    pub fn main_document_part(&self) -> Option<&Part> {
        self.part_by_rel_type(rel_types::OFFICE_DOCUMENT)
    }
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::MAIN_DOCUMENT;

    fn sample() -> Package {
        let mut pkg = Package::new();
        pkg.put_part(Part::new(
            well_known::document(),
            MAIN_DOCUMENT,
            b"<w:document/>".to_vec(),
        ));
        pkg.relationships_mut()
            .add(rel_types::OFFICE_DOCUMENT, "word/document.xml");
        pkg
    }

    #[test]
    fn test_new_package_is_empty() {
        let pkg = Package::new();
        assert_eq!(pkg.parts().count(), 0);
        assert!(pkg.relationships().is_empty());
        assert!(pkg.main_document_part().is_none());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let bytes = sample().to_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK");

        let pkg = Package::from_bytes(&bytes).unwrap();
        let doc = pkg.main_document_part().unwrap();
        assert_eq!(doc.data(), b"<w:document/>");
        assert_eq!(doc.content_type(), MAIN_DOCUMENT);
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(sample().to_bytes().unwrap(), sample().to_bytes().unwrap());
    }

    #[test]
    fn test_put_part_keeps_relationships() {
        let mut pkg = sample();
        let uri = well_known::document();
        pkg.part_mut(&uri)
            .unwrap()
            .relationships_mut()
            .add(rel_types::STYLES, "styles.xml");

        pkg.put_part(Part::new(uri.clone(), MAIN_DOCUMENT, b"<new/>".to_vec()));

        let part = pkg.part(&uri).unwrap();
        assert_eq!(part.data(), b"<new/>");
        assert!(part.relationships().by_type(rel_types::STYLES).is_some());
    }

    #[test]
    fn test_missing_content_types() {
        let mut buf = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buf));
            zip.start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"<w:document/>").unwrap();
            zip.finish().unwrap();
        }
        assert!(matches!(
            Package::from_bytes(&buf),
            Err(Error::MissingPart(_))
        ));
    }
}
