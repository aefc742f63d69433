//! Input/output module
//!
//! This module contains the file-facing components:
//! - `line_reader` - Streaming, numbering line reader over the notes file
//! - `csv_format` - Output CSV layout and row serialization

pub mod csv_format;
pub mod line_reader;

pub use csv_format::write_transactions_csv;
pub use line_reader::{LineReader, NumberedLine};
