//! Output path derivation.

use std::path::{Path, PathBuf};

use crate::config::{RESULTS_EXTENSION, RESULTS_SUFFIX};
use crate::error_handling::TableError;

/// Derives the results path for an input file.
///
/// Strips the last extension from the file name and appends `_results.csv`
/// in the same directory: `data/report.csv` becomes `data/report_results.csv`
/// and `report` becomes `report_results.csv`. A leading dot is part of the
/// name, not an extension (`.hidden` becomes `.hidden_results.csv`).
pub fn derive_output_path(input: &Path) -> Result<PathBuf, TableError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| TableError::OutputPath(input.to_path_buf()))?;

    let mut name = stem.to_os_string();
    name.push(RESULTS_SUFFIX);
    name.push(".");
    name.push(RESULTS_EXTENSION);

    Ok(input.with_file_name(name))
}
