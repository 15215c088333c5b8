//! Spreadsheet decoding
//!
//! Every sheet is read in workbook order. The first row of a sheet is its
//! header; each following row becomes a record keyed by header name. Empty
//! cells are left out of the record and rows with no values are dropped.

use crate::error::{Error, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::Path;

/// One spreadsheet row, keyed by column header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRecord {
    fields: HashMap<String, String>,
}

impl SheetRecord {
    /// Build a record from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Trimmed value of a column, `None` when absent or blank
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no populated columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Records decoded from a single sheet
#[derive(Debug, Clone)]
pub struct SheetData {
    /// Sheet name
    pub name: String,
    /// Rows in sheet order
    pub records: Vec<SheetRecord>,
}

/// Read every sheet of a workbook (xlsx, xlsm, xls, xlsb, ods)
pub fn read_workbook(path: &Path) -> Result<Vec<SheetData>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Spreadsheet(format!("cannot open {}: {e}", path.display())))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| Error::Spreadsheet(format!("cannot read sheet {name:?}: {e}")))?;
        tracing::debug!(sheet = %name, rows = range.height(), "decoded sheet");
        sheets.push(SheetData {
            records: records_from_range(&range),
            name,
        });
    }
    Ok(sheets)
}

/// Concatenate the records of all sheets, preserving order
pub fn combine(sheets: &[SheetData]) -> Vec<SheetRecord> {
    sheets
        .iter()
        .flat_map(|s| s.records.iter().cloned())
        .collect()
}

/// Decode a cell range: header row, then one record per non-empty row
pub fn records_from_range(range: &Range<Data>) -> Vec<SheetRecord> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let columns: Vec<Option<String>> = header.iter().map(cell_text).collect();

    rows.map(|row| {
        SheetRecord::from_pairs(row.iter().zip(&columns).filter_map(|(cell, column)| {
            let column = column.as_ref()?;
            cell_text(cell).map(|value| (column.clone(), value))
        }))
    })
    .filter(|record| !record.is_empty())
    .collect()
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.trim().is_empty() => None,
        other => Some(other.to_string()),
    }
}
