//! `[Content_Types].xml`

use crate::error::{Error, Result};
use crate::opc::PartUri;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::BTreeMap;
use std::io::Write;

/// Extension defaults and per-part overrides
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<PartUri, String>,
}

impl ContentTypes {
    /// Content types with the `rels` and `xml` defaults every package needs
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", RELATIONSHIPS);
        ct.add_default("xml", XML);
        ct
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut ct = Self::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"Default" => {
                        let ext = required_attr(&e, "Extension")?;
                        let content_type = required_attr(&e, "ContentType")?;
                        ct.add_default(&ext, &content_type);
                    }
                    b"Override" => {
                        let uri = PartUri::new(&required_attr(&e, "PartName")?)?;
                        let content_type = required_attr(&e, "ContentType")?;
                        ct.overrides.insert(uri, content_type);
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(ct)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = Writer::new(writer);
        xml::write_declaration(&mut xml)?;

        let mut types = BytesStart::new("Types");
        types.push_attribute(("xmlns", xml::CT));
        xml.write_event(Event::Start(types))?;

        for (ext, content_type) in &self.defaults {
            let mut elem = BytesStart::new("Default");
            elem.push_attribute(("Extension", ext.as_str()));
            elem.push_attribute(("ContentType", content_type.as_str()));
            xml.write_event(Event::Empty(elem))?;
        }

        for (uri, content_type) in &self.overrides {
            let mut elem = BytesStart::new("Override");
            elem.push_attribute(("PartName", uri.as_str()));
            elem.push_attribute(("ContentType", content_type.as_str()));
            xml.write_event(Event::Empty(elem))?;
        }

        xml.write_event(Event::End(BytesEnd::new("Types")))?;
        Ok(())
    }

    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_lowercase(), content_type.to_string());
    }

    pub fn add_override(&mut self, uri: &PartUri, content_type: &str) {
        self.overrides.insert(uri.clone(), content_type.to_string());
    }

    /// Override first, then the extension default
    pub fn get(&self, uri: &PartUri) -> Option<&str> {
        self.overrides
            .get(uri)
            .or_else(|| self.defaults.get(&uri.extension()?.to_lowercase()))
            .map(String::as_str)
    }
}

fn required_attr(element: &BytesStart, name: &str) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    Err(Error::MissingAttribute {
        element: String::from_utf8_lossy(element.name().as_ref()).to_string(),
        attr: name.to_string(),
    })
}

pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const XML: &str = "application/xml";
pub const MAIN_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_types() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="XML" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

        let ct = ContentTypes::from_xml(xml).unwrap();
        let doc = PartUri::new("/word/document.xml").unwrap();
        assert_eq!(ct.get(&doc), Some(MAIN_DOCUMENT));

        let other = PartUri::new("/customXml/item1.xml").unwrap();
        assert_eq!(ct.get(&other), Some(XML));
    }

    #[test]
    fn test_unknown_extension() {
        let ct = ContentTypes::new();
        assert_eq!(ct.get(&PartUri::new("/word/media/image1.png").unwrap()), None);
    }

    #[test]
    fn test_override_missing_part_name() {
        let xml = r#"<Types><Override ContentType="application/xml"/></Types>"#;
        assert!(ContentTypes::from_xml(xml).is_err());
    }

    #[test]
    fn test_write_then_parse() {
        let mut ct = ContentTypes::new();
        ct.add_override(&PartUri::new("/word/styles.xml").unwrap(), STYLES);

        let mut out = Vec::new();
        ct.write_to(&mut out).unwrap();
        let parsed = ContentTypes::from_xml(std::str::from_utf8(&out).unwrap()).unwrap();

        assert_eq!(parsed.get(&PartUri::new("/word/styles.xml").unwrap()), Some(STYLES));
        assert_eq!(parsed.get(&PartUri::new("/_rels/.rels").unwrap()), Some(RELATIONSHIPS));
    }
}
