//! XML helpers shared by the package and document layers

mod element;
mod namespace;

pub use element::{XmlElement, XmlNode};
pub use namespace::*;

use crate::error::Result;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Get an attribute value by its qualified name
pub fn get_attr(element: &BytesStart, name: &str) -> Option<String> {
    element
        .attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name.as_bytes())
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

/// Get `w:val`, falling back to an unprefixed `val`
pub fn get_w_val(element: &BytesStart) -> Option<String> {
    get_attr(element, "w:val").or_else(|| get_attr(element, "val"))
}

/// OOXML toggle: a bare `<w:b/>` is on, otherwise "1", "true" or "on"
pub fn parse_bool(element: &BytesStart) -> bool {
    match get_w_val(element) {
        None => true,
        Some(v) => matches!(v.as_str(), "1" | "true" | "on"),
    }
}

/// Write the standalone UTF-8 declaration every part starts with
pub fn write_declaration<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

/// Write an empty element carrying a single `w:val`
pub fn write_val<W: Write>(writer: &mut Writer<W>, name: &str, val: &str) -> Result<()> {
    let mut elem = BytesStart::new(name);
    elem.push_attribute(("w:val", val));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Skip past the end tag matching `start`, nested same-name elements included
pub fn skip_element<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<()> {
    let name = start.name().as_ref().to_vec();
    let mut depth = 1;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == name => depth += 1,
            Event::End(e) if e.name().as_ref() == name => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
