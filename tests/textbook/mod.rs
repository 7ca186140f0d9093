//! Small problems from textbooks, read from problem files.
use std::path::{Path, PathBuf};

mod test;

/// Compute the path of the problem file, stored in the data directory next to this module.
///
/// # Arguments
///
/// * `file_name`: Name of the file, including extension.
fn get_test_file_path(file_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(file!())
        .parent().unwrap()
        .join("data")
        .join(file_name)
}
