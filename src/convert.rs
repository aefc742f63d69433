//! End-to-end conversion pipeline
//!
//! Wires the pieces together: read numbered lines, run them through the
//! stateful parser, then write all collected records as CSV. Processing
//! is strictly sequential because each line's meaning depends on the
//! marker state accumulated from earlier lines.

use std::io::Write;
use std::path::Path;

use crate::core::NotesParser;
use crate::io::{csv_format, LineReader};

use crate::types::ConvertError;

/// Converts a notes file into semicolon-delimited CSV.
///
/// Stops at the first offending line. Output is only written once the
/// whole input has parsed, so a failed run leaves the sink untouched.
///
/// # Arguments
///
/// * `input_path` - Path to the notes file
/// * `output` - Destination for the generated CSV
/// * `default_year` - Year to assume until the first year marker, if any
///
/// # Errors
///
/// Any [`ConvertError`] from opening or reading the input, parsing a
/// line, or writing the output.
pub fn convert(
    input_path: &Path,
    output: &mut dyn Write,
    default_year: Option<&str>,
) -> Result<(), ConvertError> {
    let reader = LineReader::new(input_path)?;
    let mut parser = NotesParser::new(default_year);

    let mut records = Vec::new();
    for line in reader {
        let line = line?;
        if let Some(record) = parser.process_line(line.number, &line.text)? {
            records.push(record);
        }
    }

    csv_format::write_transactions_csv(&records, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_temp_notes(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn convert_to_string(content: &str, default_year: Option<&str>) -> String {
        let file = create_temp_notes(content);
        let mut output = Vec::new();
        convert(file.path(), &mut output, default_year).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn converts_a_small_ledger() {
        let output = convert_to_string("2023:\n\n5.12:\n50 Groceries\n+20 Refund\n", None);

        assert_eq!(
            output,
            "date;payment;info;payee;memo;amount;category;tags\n\
             2023-12-05;3;;Groceries;;-50.00;;\n\
             2023-12-05;3;;Refund;;20.00;;\n"
        );
    }

    #[test]
    fn marker_free_input_uses_the_default_year() {
        let output = convert_to_string("5.12:\n50 Groceries\n", Some("2022"));

        assert!(output.contains("2022-12-05;3;;Groceries;;-50.00;;\n"));
    }

    #[test]
    fn input_without_transactions_yields_header_only() {
        let output = convert_to_string("2023:\n5.12:\n", None);

        assert_eq!(output, "date;payment;info;payee;memo;amount;category;tags\n");
    }

    #[test]
    fn parse_errors_leave_the_output_untouched() {
        let file = create_temp_notes("2023:\n5.12:\nnot a transaction\n");
        let mut output = Vec::new();

        let result = convert(file.path(), &mut output, None);

        assert_eq!(
            result,
            Err(ConvertError::unrecognized_line(3, "not a transaction"))
        );
        assert!(output.is_empty());
    }

    #[test]
    fn error_line_numbers_count_blank_lines() {
        let file = create_temp_notes("2023:\n\n\n50 Groceries\n");
        let mut output = Vec::new();

        let result = convert(file.path(), &mut output, None);

        assert_eq!(result, Err(ConvertError::missing_date(4, "50 Groceries")));
    }

    #[test]
    fn missing_input_file_reports_the_path() {
        let mut output = Vec::new();

        let result = convert(Path::new("does-not-exist.txt"), &mut output, None);

        assert!(matches!(result, Err(ConvertError::InputOpen { .. })));
    }
}
