//! notes2homebank CLI
//!
//! Command-line interface for converting plain-text transaction notes
//! into HomeBank-importable CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --input notes.txt --output ledger.csv
//! cargo run -- --input notes.txt --output ledger.csv --year 2023
//! ```
//!
//! The program reads the notes file line by line, tracks year and date
//! markers, and writes one CSV row per transaction to the output file.
//! The first line that fails to parse aborts the run.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unparseable line, write failure, etc.)

use std::fs::File;
use std::process;

use notes2homebank::cli;
use notes2homebank::convert::convert;
use notes2homebank::types::ConvertError;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // The output file is created up front, so a failed run leaves it
    // empty rather than stale
    let mut output = match File::create(&args.output) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: {}", ConvertError::output_create(&args.output, &e));
            process::exit(1);
        }
    };

    if let Err(e) = convert(&args.input, &mut output, args.default_year()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
