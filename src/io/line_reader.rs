//! Line reader with iterator interface
//!
//! Provides a streaming iterator over the raw lines of a notes file,
//! numbering them from 1. No interpretation happens here; trimming and
//! classification are the parser's job.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Read failures mid-file are yielded as Err items in the iterator

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::types::ConvertError;

/// One raw input line together with its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    /// 1-based line number, blank lines included
    pub number: u64,
    /// Line content without its terminator
    pub text: String,
}

/// Streaming reader over the lines of a notes file
///
/// Yields every line, blank ones included, so line numbers in error
/// reports match what an editor shows.
#[derive(Debug)]
pub struct LineReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl LineReader {
    /// Opens a notes file for line-by-line reading.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the notes file
    ///
    /// # Errors
    ///
    /// [`ConvertError::InputOpen`] when the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|error| ConvertError::input_open(path, &error))?;

        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for LineReader {
    type Item = Result<NumberedLine, ConvertError>;

    /// Reads the next line, stripping its `\n` or `\r\n` terminator but
    /// nothing else.
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lines.next()?;
        self.line_num += 1;

        Some(
            result
                .map(|text| NumberedLine {
                    number: self.line_num,
                    text,
                })
                .map_err(ConvertError::from),
        )
    }
}
