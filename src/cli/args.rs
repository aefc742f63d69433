use clap::Parser;
use std::path::PathBuf;

/// Convert plain-text transaction notes to importable CSV
#[derive(Parser, Debug)]
#[command(name = "notes2homebank")]
#[command(about = "Convert plain-text transaction notes to HomeBank CSV", long_about = None)]
pub struct CliArgs {
    /// Input file of noted transactions
    #[arg(
        long = "input",
        value_name = "FILE",
        default_value = "input.txt",
        help = "Input file for noted transactions"
    )]
    pub input: PathBuf,

    /// Output file for the generated CSV
    #[arg(
        long = "output",
        value_name = "FILE",
        default_value = "output.csv",
        help = "Output file for the generated csv"
    )]
    pub output: PathBuf,

    /// Year assumed until the file's first year marker
    #[arg(
        long = "year",
        value_name = "YEAR",
        default_value = "",
        help = "The initial year to use, leave blank if the year is specified as 'yyyy:' in the file"
    )]
    pub year: String,
}

impl CliArgs {
    /// Returns the initial year, treating an empty string as unset.
    ///
    /// # Returns
    ///
    /// `Some(year)` when a non-empty year was given, `None` otherwise.
    pub fn default_year(&self) -> Option<&str> {
        if self.year.is_empty() {
            None
        } else {
            Some(self.year.as_str())
        }
    }
}
