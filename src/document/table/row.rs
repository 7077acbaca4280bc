//! Table row elements (w:tr)

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

use super::cell::TableCell;

/// Table row (w:tr)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableRow {
    /// Cells
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from cell texts
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        TableRow {
            cells: texts.iter().map(|t| TableCell::new(t.as_ref())).collect(),
        }
    }

    /// Parse from reader (after w:tr start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut row = TableRow::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"tc" => row.cells.push(TableCell::from_reader(reader)?),
                    // trPr, sdt wrappers
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::End(e) if e.name().local_name().as_ref() == b"tr" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(row)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Option<&TableCell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.cells.iter()
    }

    /// Cell texts, in column order
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(TableCell::text).collect()
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:tr")))?;
        for cell in &self.cells {
            cell.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:tr")))?;
        Ok(())
    }
}
