//! Table elements (w:tbl, w:tr, w:tc)

mod cell;
mod row;
mod types;

pub use cell::{TableCell, TableCellProperties};
pub use row::TableRow;
pub use types::{GridColumn, HeaderStyle, Shading, ACCENT_FILL};

use crate::error::{Error, Result};
use crate::xml::{self, get_attr, get_w_val};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Table element (w:tbl)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Table style ID
    pub style: Option<String>,
    /// Table grid
    pub grid: Vec<GridColumn>,
    /// Table rows; the first one is the header row for generated tables
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Build a table whose first row labels the columns.
    ///
    /// Every data row must have exactly `headers.len()` cells. Columns share
    /// `total_width` twips evenly and the header row gets `header_style`.
    pub fn with_header<S, R>(
        headers: &[S],
        rows: &[R],
        total_width: i32,
        header_style: &HeaderStyle,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let columns = headers.len();
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(Error::RowLength {
                row,
                expected: columns,
                found,
            });
        }

        let mut header = TableRow::from_texts(headers);
        for cell in &mut header.cells {
            cell.apply_header_style(header_style);
        }

        let mut table = Table {
            grid: vec![GridColumn::default(); columns],
            rows: std::iter::once(header)
                .chain(rows.iter().map(|r| TableRow::from_texts(r.as_ref())))
                .collect(),
            ..Default::default()
        };
        if columns > 0 {
            table.set_even_widths(total_width);
        }
        Ok(table)
    }

    /// Parse from reader (after w:tbl start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut table = Table::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"tblPr" => table.style = parse_table_style(reader)?,
                    b"tblGrid" => table.grid = parse_table_grid(reader)?,
                    b"tr" => table.rows.push(TableRow::from_reader(reader)?),
                    _ => xml::skip_element(reader, &e)?,
                },
                Event::End(e) if e.name().local_name().as_ref() == b"tbl" => break,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(table)
    }

    /// Get row count, header row included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get column count (based on first row)
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Get cell at position
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }

    /// Texts of the first row
    pub fn header_texts(&self) -> Vec<String> {
        self.rows.first().map(TableRow::texts).unwrap_or_default()
    }

    /// True when every row has as many cells as the first one
    pub fn is_rectangular(&self) -> bool {
        let columns = self.column_count();
        self.rows.iter().all(|r| r.cell_count() == columns)
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = Some(style.into());
    }

    /// Split `total` twips evenly over the grid and every cell
    pub fn set_even_widths(&mut self, total: i32) {
        let columns = self.grid.len().max(1) as i32;
        let width = total / columns;
        for col in &mut self.grid {
            col.width = Some(width);
        }
        for cell in self.rows.iter_mut().flat_map(|r| r.cells.iter_mut()) {
            cell.set_width(width);
        }
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:tbl")))?;

        writer.write_event(Event::Start(BytesStart::new("w:tblPr")))?;
        if let Some(style) = &self.style {
            xml::write_val(writer, "w:tblStyle", style)?;
        }
        let mut width = BytesStart::new("w:tblW");
        width.push_attribute(("w:w", "0"));
        width.push_attribute(("w:type", "auto"));
        writer.write_event(Event::Empty(width))?;
        // first row and first column banding, no vertical banding
        xml::write_val(writer, "w:tblLook", "04A0")?;
        writer.write_event(Event::End(BytesEnd::new("w:tblPr")))?;

        writer.write_event(Event::Start(BytesStart::new("w:tblGrid")))?;
        for col in &self.grid {
            let mut elem = BytesStart::new("w:gridCol");
            if let Some(w) = col.width {
                elem.push_attribute(("w:w", w.to_string().as_str()));
            }
            writer.write_event(Event::Empty(elem))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:tblGrid")))?;

        for row in &self.rows {
            row.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:tbl")))?;
        Ok(())
    }
}

fn parse_table_style<R: BufRead>(reader: &mut Reader<R>) -> Result<Option<String>> {
    let mut style = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => xml::skip_element(reader, &e)?,
            Event::Empty(e) if e.name().local_name().as_ref() == b"tblStyle" => {
                style = get_w_val(&e);
            }
            Event::End(e) if e.name().local_name().as_ref() == b"tblPr" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(style)
}

fn parse_table_grid<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<GridColumn>> {
    let mut columns = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) if e.name().local_name().as_ref() == b"gridCol" => {
                let width = get_attr(&e, "w:w")
                    .or_else(|| get_attr(&e, "w"))
                    .and_then(|v| v.parse().ok());
                columns.push(GridColumn { width });
            }
            Event::End(e) if e.name().local_name().as_ref() == b"tblGrid" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(columns)
}
