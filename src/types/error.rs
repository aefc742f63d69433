//! Error types for the notes-to-CSV converter
//!
//! This module defines all error types that can occur while converting a
//! notes file. Errors are designed to be descriptive and user-friendly for
//! CLI output.
//!
//! Every error is fatal: the first malformed line aborts the whole run. The
//! parse-stage variants all carry the 1-based line number and the offending
//! line text so the user can find the problem in their notes file.

use thiserror::Error;

/// Main error type for the converter
///
/// This enum represents all possible errors that can occur during a
/// conversion run. Each variant includes relevant context to help diagnose
/// and fix the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The input notes file could not be opened
    #[error("failed to open input file '{path}': {message}")]
    InputOpen {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// The output CSV file could not be created
    #[error("failed to create output file '{path}': {message}")]
    OutputCreate {
        /// The path that could not be created
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// I/O error occurred while reading the input
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A date marker or transaction appeared before any year was known
    ///
    /// Raised when no `--year` was given and a non-blank line other than a
    /// `yyyy:` marker is seen before the first year marker.
    #[error("no year given, and line {line} is not a year marker: {content}")]
    MissingYear {
        /// 1-based line number
        line: u64,
        /// The offending line, trimmed
        content: String,
    },

    /// A transaction appeared before any date marker
    #[error("no date marker seen before line {line}: {content}")]
    MissingDate {
        /// 1-based line number
        line: u64,
        /// The offending line, trimmed
        content: String,
    },

    /// A non-blank line matched none of the three line patterns
    #[error("line {line} is not a year marker, date marker, or transaction: {content}")]
    UnrecognizedLine {
        /// 1-based line number
        line: u64,
        /// The offending line, trimmed
        content: String,
    },

    /// A transaction line was matched but its parts could not be used
    ///
    /// Covers an empty amount or payee capture and amount text that fails
    /// decimal parsing.
    #[error("malformed transaction at line {line} ({message}): {content}")]
    MalformedTransaction {
        /// 1-based line number
        line: u64,
        /// The offending line, trimmed
        content: String,
        /// What exactly was wrong with the captured parts
        message: String,
    },

    /// Writing the CSV output failed
    #[error("failed to write CSV output: {message}")]
    CsvWrite {
        /// Description of the write error
        message: String,
    },
}

// Conversion from io::Error to ConvertError
impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ConvertError
impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        ConvertError::CsvWrite {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ConvertError {
    /// Create an InputOpen error
    pub fn input_open(path: &std::path::Path, error: &std::io::Error) -> Self {
        ConvertError::InputOpen {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create an OutputCreate error
    pub fn output_create(path: &std::path::Path, error: &std::io::Error) -> Self {
        ConvertError::OutputCreate {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a MissingYear error
    pub fn missing_year(line: u64, content: &str) -> Self {
        ConvertError::MissingYear {
            line,
            content: content.to_string(),
        }
    }

    /// Create a MissingDate error
    pub fn missing_date(line: u64, content: &str) -> Self {
        ConvertError::MissingDate {
            line,
            content: content.to_string(),
        }
    }

    /// Create an UnrecognizedLine error
    pub fn unrecognized_line(line: u64, content: &str) -> Self {
        ConvertError::UnrecognizedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Create a MalformedTransaction error
    pub fn malformed_transaction(line: u64, content: &str, message: &str) -> Self {
        ConvertError::MalformedTransaction {
            line,
            content: content.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::input_open(
        ConvertError::InputOpen { path: "notes.txt".to_string(), message: "No such file".to_string() },
        "failed to open input file 'notes.txt': No such file"
    )]
    #[case::output_create(
        ConvertError::OutputCreate { path: "out.csv".to_string(), message: "Permission denied".to_string() },
        "failed to create output file 'out.csv': Permission denied"
    )]
    #[case::io_error(
        ConvertError::Io { message: "stream did not contain valid UTF-8".to_string() },
        "I/O error: stream did not contain valid UTF-8"
    )]
    #[case::missing_year(
        ConvertError::MissingYear { line: 1, content: "5.12:".to_string() },
        "no year given, and line 1 is not a year marker: 5.12:"
    )]
    #[case::missing_date(
        ConvertError::MissingDate { line: 2, content: "50 Groceries".to_string() },
        "no date marker seen before line 2: 50 Groceries"
    )]
    #[case::unrecognized_line(
        ConvertError::UnrecognizedLine { line: 7, content: "abc".to_string() },
        "line 7 is not a year marker, date marker, or transaction: abc"
    )]
    #[case::malformed_transaction(
        ConvertError::MalformedTransaction {
            line: 4,
            content: "1..5 taxi".to_string(),
            message: "invalid amount '1..5'".to_string(),
        },
        "malformed transaction at line 4 (invalid amount '1..5'): 1..5 taxi"
    )]
    #[case::csv_write(
        ConvertError::CsvWrite { message: "broken pipe".to_string() },
        "failed to write CSV output: broken pipe"
    )]
    fn test_error_display(#[case] error: ConvertError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::missing_year(
        ConvertError::missing_year(3, "abc"),
        ConvertError::MissingYear { line: 3, content: "abc".to_string() }
    )]
    #[case::missing_date(
        ConvertError::missing_date(5, "50 Groceries"),
        ConvertError::MissingDate { line: 5, content: "50 Groceries".to_string() }
    )]
    #[case::unrecognized_line(
        ConvertError::unrecognized_line(9, "???"),
        ConvertError::UnrecognizedLine { line: 9, content: "???".to_string() }
    )]
    #[case::malformed_transaction(
        ConvertError::malformed_transaction(2, "1..5 taxi", "invalid amount '1..5'"),
        ConvertError::MalformedTransaction {
            line: 2,
            content: "1..5 taxi".to_string(),
            message: "invalid amount '1..5'".to_string(),
        }
    )]
    fn test_helper_functions(#[case] result: ConvertError, #[case] expected: ConvertError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ConvertError = io_error.into();
        assert!(matches!(error, ConvertError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_csv_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let csv_error = csv::Error::from(io_error);
        let error: ConvertError = csv_error.into();
        assert!(matches!(error, ConvertError::CsvWrite { .. }));
    }
}
