//! # Error reporting for reading of problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

use crate::error::SimplexError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a problem.
    ///
    /// # Note
    ///
    /// If the problem is inconsistent, that will not be represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The file is well formed, but describes an inconsistent problem.
    ///
    /// For example, the basis might be of the wrong size.
    #[error(transparent)]
    Problem(#[from] SimplexError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold a file location containing a line number and line, at which the error was caused.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("ParseError: {description}{}", location_suffix(.location))]
pub struct ParseError {
    description: String,
    location: Option<(usize, String)>,
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(super) type FileLocation<'a> = (usize, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// Line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<usize> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

fn location_suffix(location: &Option<(usize, String)>) -> String {
    match location {
        Some((line_number, line)) => format!("\n\tCaused at line\t{}:\t{}", line_number, line),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use crate::io::error::ParseError;

    #[test]
    fn display() {
        assert_eq!(ParseError::new("empty file").to_string(), "ParseError: empty file");
        assert_eq!(
            ParseError::with_file_location("unknown keyword", (3, "foo 1 2")).to_string(),
            "ParseError: unknown keyword\n\tCaused at line\t3:\tfoo 1 2",
        );
    }
}
