//! CSV loading and writing.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use super::Table;
use crate::error_handling::TableError;

/// Reads a comma-separated file with a header row into a [`Table`].
///
/// Cells are kept verbatim; rows with a different field count than the header
/// are rejected by the CSV reader.
pub fn read_table(path: &Path) -> Result<Table, TableError> {
    let file = File::open(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_table_from(file)
}

pub(crate) fn read_table_from<R: Read>(reader: R) -> Result<Table, TableError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::new(headers, rows)
}

/// Writes a [`Table`] as CSV with a header row and no index column.
///
/// Fields are quoted only when they contain a delimiter, quote or line break.
pub fn write_table(table: &Table, path: &Path) -> Result<(), TableError> {
    let file = File::create(path).map_err(|source| TableError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_table_to(table, file)
}

pub(crate) fn write_table_to<W: Write>(table: &Table, writer: W) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
