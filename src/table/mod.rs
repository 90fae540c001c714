//! In-memory table of string cells.
//!
//! The table is loaded once, widened column by column as the pipeline runs,
//! and written out at the end. Rows are never added, removed or reordered
//! after load.

mod io;
mod path;

pub use io::{read_table, write_table};
pub use path::derive_output_path;

use crate::error_handling::TableError;

/// Rows x named columns, every cell kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from a header row and data rows.
    ///
    /// Every row must have exactly one cell per header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if let Some((idx, bad)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(TableError::RaggedRow {
                row: idx + 1,
                expected: headers.len(),
                actual: bad.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Column names in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates over the cells of one column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Writes `values` into the named column, positionally.
    ///
    /// Appends the column if it does not exist yet, otherwise overwrites it in
    /// place. `values` must have exactly one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::RowCountMismatch {
                column: name.to_string(),
                expected: self.rows.len(),
                actual: values.len(),
            });
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["host".into(), "IPs".into()],
            vec![
                vec!["a".into(), "['1.1.1.1']".into()],
                vec!["b".into(), "['2.2.2.2']".into()],
            ],
        )
        .expect("valid table")
    }

    #[test]
    fn test_set_column_appends_new_column() {
        let mut table = sample_table();
        table
            .set_column("sample_ip", vec!["1.1.1.1".into(), "2.2.2.2".into()])
            .expect("lengths match");

        assert_eq!(table.headers(), ["host", "IPs", "sample_ip"]);
        assert_eq!(table.rows()[1], ["b", "['2.2.2.2']", "2.2.2.2"]);
    }

    #[test]
    fn test_set_column_overwrites_existing_column() {
        let mut table = sample_table();
        table
            .set_column("host", vec!["x".into(), "y".into()])
            .expect("lengths match");

        assert_eq!(table.headers().len(), 2);
        let hosts: Vec<&str> = table.column("host").expect("column exists").collect();
        assert_eq!(hosts, ["x", "y"]);
    }

    #[test]
    fn test_set_column_rejects_length_mismatch() {
        let mut table = sample_table();
        let err = table
            .set_column("whois_desc", vec!["only one".into()])
            .expect_err("should reject");

        match err {
            TableError::RowCountMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Nothing was written
        assert_eq!(table.headers().len(), 2);
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Table::new(vec!["a".into(), "b".into()], vec![vec!["1".into()]]);
        assert!(matches!(
            result,
            Err(TableError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_column_missing() {
        assert!(sample_table().column("nope").is_none());
    }
}
