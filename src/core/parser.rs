//! Stateful line-by-line parsing.
//!
//! A notes file only makes sense read top to bottom: year and date
//! markers set state that every transaction after them inherits. The
//! parser owns that state and consumes one line at a time, yielding a
//! finished record for transaction lines and nothing for markers and
//! blanks.

use crate::core::builder::build_record;
use crate::core::classifier::{classify, LineKind};
use crate::core::context::ParseContext;
use crate::types::{ConvertError, TransactionRecord};

/// Sequential parser over the lines of a notes file.
///
/// Lines must be fed strictly in file order; each transaction's date
/// comes from the markers seen before it.
#[derive(Debug)]
pub struct NotesParser {
    context: ParseContext,
}

impl NotesParser {
    /// Creates a parser, optionally seeded with a default year for
    /// files that do not open with a year marker.
    ///
    /// An empty `default_year` counts as no default.
    pub fn new(default_year: Option<&str>) -> Self {
        NotesParser {
            context: ParseContext::new(default_year),
        }
    }

    /// Processes one raw input line.
    ///
    /// The line is trimmed before classification. Blank lines are
    /// skipped, marker lines update the carried context, and
    /// transaction lines produce a record stamped with the current
    /// date.
    ///
    /// # Arguments
    ///
    /// * `number` - 1-based line number, used in error reports
    /// * `raw` - The line as read, without its terminator
    ///
    /// # Errors
    ///
    /// [`ConvertError::MissingYear`] when no year is in effect and the
    /// line is not a year marker, [`ConvertError::MissingDate`] when a
    /// year is known but no date is and the line is not a marker,
    /// [`ConvertError::MalformedTransaction`] when a matched amount
    /// fails to parse, and [`ConvertError::UnrecognizedLine`] for
    /// everything else.
    pub fn process_line(
        &mut self,
        number: u64,
        raw: &str,
    ) -> Result<Option<TransactionRecord>, ConvertError> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let kind = classify(line);

        if let LineKind::YearMarker { year } = kind {
            self.context.set_year(year);
            return Ok(None);
        }
        if !self.context.has_year() {
            return Err(ConvertError::missing_year(number, line));
        }

        if let LineKind::DateMarker { day, month } = kind {
            self.context.set_date(day, month);
            return Ok(None);
        }
        if !self.context.has_date() {
            return Err(ConvertError::missing_date(number, line));
        }

        if let LineKind::Transaction { amount, payee } = kind {
            return build_record(amount, payee, &self.context)
                .map(Some)
                .map_err(|reason| ConvertError::malformed_transaction(number, line, &reason));
        }

        Err(ConvertError::unrecognized_line(number, line))
    }
}
