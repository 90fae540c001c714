//! Address sampling.
//!
//! Picks one representative address per record: the first element of the
//! record's `IPs` list.

mod parse;

pub use parse::parse_address_list;

use crate::config::{IPS_COLUMN, SAMPLE_IP_COLUMN};
use crate::error_handling::SampleError;
use crate::table::Table;

/// Returns the first address of a serialized address list.
///
/// `row` is the 1-based data row, used in error messages.
pub fn first_address(cell: &str, row: usize) -> Result<String, SampleError> {
    let addresses =
        parse_address_list(cell).map_err(|reason| SampleError::Malformed { row, reason })?;
    addresses
        .into_iter()
        .next()
        .ok_or(SampleError::Empty { row })
}

/// Fills the `sample_ip` column from the `IPs` column.
///
/// Aborts on the first row whose `IPs` cell is malformed or empty; the table
/// is left untouched in that case.
pub fn sample_first_address(table: &mut Table) -> Result<(), SampleError> {
    let cells = table
        .column(IPS_COLUMN)
        .ok_or_else(|| SampleError::MissingColumn(IPS_COLUMN.to_string()))?;

    let samples = cells
        .enumerate()
        .map(|(idx, cell)| first_address(cell, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Sampled {} addresses from '{}'", samples.len(), IPS_COLUMN);

    table.set_column(SAMPLE_IP_COLUMN, samples)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_ips(cells: &[&str]) -> Table {
        Table::new(
            vec!["name".into(), "IPs".into()],
            cells
                .iter()
                .enumerate()
                .map(|(i, c)| vec![format!("r{i}"), c.to_string()])
                .collect(),
        )
        .expect("valid table")
    }

    #[test]
    fn test_sample_first_address() {
        let mut table = table_with_ips(&["['8.8.8.1','8.8.8.2']", "['10.0.0.1']"]);
        sample_first_address(&mut table).expect("valid lists");

        let samples: Vec<&str> = table.column("sample_ip").expect("added").collect();
        assert_eq!(samples, ["8.8.8.1", "10.0.0.1"]);
    }

    #[test]
    fn test_sample_empty_list_is_fatal() {
        let mut table = table_with_ips(&["['8.8.8.1']", "[]"]);
        let err = sample_first_address(&mut table).expect_err("empty list");

        assert!(matches!(err, SampleError::Empty { row: 2 }));
        assert!(table.column_index("sample_ip").is_none());
    }

    #[test]
    fn test_sample_malformed_list_is_fatal() {
        let mut table = table_with_ips(&["8.8.8.8"]);
        let err = sample_first_address(&mut table).expect_err("not a list");
        assert!(matches!(err, SampleError::Malformed { row: 1, .. }));
    }

    #[test]
    fn test_sample_missing_column() {
        let mut table =
            Table::new(vec!["host".into()], vec![vec!["a".into()]]).expect("valid table");
        let err = sample_first_address(&mut table).expect_err("no IPs column");
        assert!(matches!(err, SampleError::MissingColumn(ref c) if c == "IPs"));
    }
}
