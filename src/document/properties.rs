//! Core document properties (docProps/core.xml)

use crate::error::Result;
use crate::xml::{self, XmlElement};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Title, subject and author metadata shown in Word's file info.
///
/// No created/modified timestamps are written, so the part is identical for
/// identical input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

impl CoreProperties {
    pub fn is_empty(&self) -> bool {
        *self == CoreProperties::default()
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut props = CoreProperties::default();
        let mut buf = Vec::new();
        let mut current: Option<Vec<u8>> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => current = Some(e.name().local_name().as_ref().to_vec()),
                Event::Text(t) => {
                    let text = t.unescape()?.to_string();
                    match current.as_deref() {
                        Some(b"title") => props.title = Some(text),
                        Some(b"subject") => props.subject = Some(text),
                        Some(b"creator") => props.creator = Some(text),
                        _ => {}
                    }
                }
                Event::End(_) => current = None,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(props)
    }

    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let fields = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
        ];

        XmlElement::new("cp:coreProperties")
            .attr("xmlns:cp", xml::CP)
            .attr("xmlns:dc", xml::DC)
            .attr("xmlns:dcterms", xml::DCTERMS)
            .children(fields.into_iter().filter_map(|(name, value)| {
                Some(XmlElement::new(name).text(value.as_deref()?))
            }))
            .to_part_xml()
    }
}
