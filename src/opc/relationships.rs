//! Relationship parts (`.rels`)

use crate::error::{Error, Result};
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::BTreeSet;
use std::io::Write;

/// Relationships of one source part, in document order
#[derive(Clone, Debug, Default)]
pub struct Relationships {
    items: Vec<Relationship>,
}

/// A single relationship
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id, e.g. "rId1"
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target, relative to the source part's directory
    pub target: String,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `.rels` part
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut rels = Self::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) => {
                    if e.name().local_name().as_ref() == b"Relationship" {
                        rels.items.push(parse_relationship(&e)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Write the `.rels` part
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = Writer::new(writer);
        xml::write_declaration(&mut xml)?;

        let mut root = BytesStart::new("Relationships");
        root.push_attribute(("xmlns", xml::PR));
        xml.write_event(Event::Start(root))?;

        for rel in &self.items {
            let mut elem = BytesStart::new("Relationship");
            elem.push_attribute(("Id", rel.id.as_str()));
            elem.push_attribute(("Type", rel.rel_type.as_str()));
            elem.push_attribute(("Target", rel.target.as_str()));
            xml.write_event(Event::Empty(elem))?;
        }

        xml.write_event(Event::End(BytesEnd::new("Relationships")))?;
        Ok(())
    }

    /// First relationship of the given type
    pub fn by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.items.iter().find(|r| r.rel_type == rel_type)
    }

    /// Add a relationship with the next free `rIdN`, returning the id
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.next_id());
        self.items.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    /// Add a relationship unless one of the same type already exists
    pub fn ensure(&mut self, rel_type: &str, target: &str) {
        if self.by_type(rel_type).is_none() {
            self.add(rel_type, target);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One past the highest `rIdN` in use, or the lowest free N once that
    /// would overflow. Ids of other shapes never collide with `rIdN`.
    fn next_id(&self) -> u32 {
        let used: BTreeSet<u32> = self
            .items
            .iter()
            .filter_map(|r| numeric_id(&r.id))
            .collect();
        match used.last() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .or_else(|| (1..u32::MAX).find(|n| !used.contains(n)))
                .unwrap_or(u32::MAX),
        }
    }
}

fn numeric_id(id: &str) -> Option<u32> {
    id.strip_prefix("rId")?.parse().ok()
}

fn parse_relationship(element: &BytesStart) -> Result<Relationship> {
    let mut id = None;
    let mut rel_type = None;
    let mut target = None;

    for attr in element.attributes() {
        let attr = attr?;
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.local_name().as_ref() {
            b"Id" => id = Some(value),
            b"Type" => rel_type = Some(value),
            b"Target" => target = Some(value),
            _ => {}
        }
    }

    let missing = |attr: &str| Error::MissingAttribute {
        element: "Relationship".into(),
        attr: attr.into(),
    };

    Ok(Relationship {
        id: id.ok_or_else(|| missing("Id"))?,
        rel_type: rel_type.ok_or_else(|| missing("Type"))?,
        target: target.ok_or_else(|| missing("Target"))?,
    })
}

/// Relationship types used by generated documents
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relationships() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

        let mut rels = Relationships::from_xml(xml).unwrap();
        let doc = rels.by_type(rel_types::OFFICE_DOCUMENT).unwrap();
        assert_eq!(doc.target, "word/document.xml");

        // new ids continue after the highest parsed one
        assert_eq!(rels.add(rel_types::STYLES, "styles.xml"), "rId4");
    }

    #[test]
    fn test_missing_target() {
        let xml = r#"<Relationships><Relationship Id="rId1" Type="t"/></Relationships>"#;
        assert!(matches!(
            Relationships::from_xml(xml),
            Err(Error::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut rels = Relationships::new();
        rels.ensure(rel_types::STYLES, "styles.xml");
        rels.ensure(rel_types::STYLES, "styles.xml");
        assert_eq!(rels.len(), 1);
        assert_eq!(rels.iter().next().unwrap().id, "rId1");
    }

    #[test]
    fn test_written_in_id_order() {
        let mut rels = Relationships::new();
        for target in ["a.xml", "b.xml", "c.xml"] {
            rels.add(rel_types::STYLES, target);
        }

        let mut out = Vec::new();
        rels.write_to(&mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        let a = xml.find("a.xml").unwrap();
        let c = xml.find("c.xml").unwrap();
        assert!(a < c);
        assert_eq!(Relationships::from_xml(&xml).unwrap().len(), 3);
    }

    #[test]
    fn test_foreign_ids_are_kept() {
        let xml = r#"<Relationships>
  <Relationship Id="R9f3a" Type="t1" Target="a.xml"/>
  <Relationship Id="rId1" Type="t2" Target="b.xml"/>
</Relationships>"#;

        let mut rels = Relationships::from_xml(xml).unwrap();
        let ids: Vec<_> = rels.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R9f3a", "rId1"]);
        assert_eq!(rels.add(rel_types::STYLES, "styles.xml"), "rId2");

        let mut out = Vec::new();
        rels.write_to(&mut out).unwrap();
        let reparsed = Relationships::from_xml(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(reparsed.len(), 3);
        assert_eq!(reparsed.by_type("t1").unwrap().id, "R9f3a");
    }

    #[test]
    fn test_id_after_max_value() {
        let xml = r#"<Relationships><Relationship Id="rId4294967295" Type="t" Target="a.xml"/></Relationships>"#;

        let mut rels = Relationships::from_xml(xml).unwrap();
        assert_eq!(rels.add(rel_types::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.add(rel_types::STYLES, "other.xml"), "rId2");
        assert_eq!(rels.len(), 3);
    }
}
