//! # Reading problems and writing results
//!
//! Problems are read from a simple line based file format, see `problem_file`. The result of a run
//! is written as a human readable report, see `report`.
use std::fs;
use std::path::Path;

use crate::data::linear_program::problem::Problem;
use crate::data::number_types::traits::Real;
use crate::io::error::ImportError;

pub mod error;
pub mod problem_file;
pub mod report;

/// Import a problem from a file.
///
/// Supports files with the `simplex` and `txt` extensions, both in the `problem_file` format.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import<F: Real>(file_path: &Path) -> Result<Problem<F>, ImportError> {
    match file_path.extension().map(|extension| extension.to_str()) {
        Some(Some("simplex" | "txt")) => {
            let program = fs::read_to_string(file_path)?;
            problem_file::parse(&program)
        },
        Some(Some(extension)) => Err(ImportError::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}",
            extension, file_path,
        ))),
        Some(None) => Err(ImportError::FileExtension(format!(
            "Could not convert OsStr to &str, probably invalid unicode: {:?}",
            file_path,
        ))),
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}
