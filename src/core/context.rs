//! Parsing state carried across lines.
//!
//! Notes files declare the year and day/month out of band, on their own
//! marker lines, and every transaction that follows inherits the most
//! recent markers. `ParseContext` holds that inherited state. Markers
//! are sticky: each one overwrites its field and stays in effect until
//! the next marker of the same kind.

/// Mutable year/date state threaded through the parser.
///
/// All three fields store the digit strings exactly as they appeared in
/// the input (or in the `--year` flag). Padding to calendar width only
/// happens when a date stamp is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseContext {
    year: Option<String>,
    month: Option<String>,
    day: Option<String>,
}

impl ParseContext {
    /// Creates a context, optionally seeded with a default year.
    ///
    /// An empty string is treated the same as no default at all, so a
    /// bare `--year ""` on the command line does not count as a year.
    ///
    /// # Arguments
    ///
    /// * `default_year` - Year digits to start with, if any
    pub fn new(default_year: Option<&str>) -> Self {
        ParseContext {
            year: default_year
                .filter(|year| !year.is_empty())
                .map(str::to_owned),
            month: None,
            day: None,
        }
    }

    /// Records a year marker, replacing any previous year.
    pub fn set_year(&mut self, year: &str) {
        self.year = Some(year.to_owned());
    }

    /// Records a date marker, replacing any previous day and month.
    pub fn set_date(&mut self, day: &str, month: &str) {
        self.day = Some(day.to_owned());
        self.month = Some(month.to_owned());
    }

    /// Returns true once a year is known.
    pub fn has_year(&self) -> bool {
        self.year.is_some()
    }

    /// Returns true once a day and month are known.
    pub fn has_date(&self) -> bool {
        self.day.is_some() && self.month.is_some()
    }

    /// Renders the current date as `YYYY-MM-DD`.
    ///
    /// Components shorter than their calendar width are left-padded
    /// with zeros; components already at or beyond it pass through
    /// unchanged.
    ///
    /// # Returns
    ///
    /// The stamp, or `None` while the year or date is still unknown.
    pub fn date_stamp(&self) -> Option<String> {
        match (&self.year, &self.month, &self.day) {
            (Some(year), Some(month), Some(day)) => {
                Some(format!("{year:0>4}-{month:0>2}-{day:0>2}"))
            }
            _ => None,
        }
    }
}
