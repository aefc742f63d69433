//! Line classification for the notes format
//!
//! Every non-blank line of a notes file is one of three things: a year
//! marker (`2023:`), a date marker (`5.12:`), or a transaction
//! (`50 Groceries`). This module decides which, using an ordered set of
//! hand-written matchers over the trimmed line.
//!
//! # Grammar
//!
//! - Year marker: exactly four digits, optional whitespace, `:`.
//! - Date marker: 1-2 digits, `,` or `.`, 1-2 digits, optional trailing
//!   separator, optional whitespace, optional `:`. The two digit groups are
//!   day and month; whatever trails them is discarded.
//! - Transaction: optional sign, digits, optional `,`/`.`-separated
//!   fraction, optional whitespace, then payee text whose first character is
//!   not a space, digit, or comma and which is at least two characters long.
//!
//! Classification is tried in that order, so a line of pure digits and
//! separators such as `12,50` is always a date marker, never a transaction.
//!
//! Digit and whitespace classes are ASCII throughout. The matchers keep two
//! quirks of the transaction pattern: the fractional part attaches only when
//! its separator is followed by a digit (`50.abc` is amount `50` with payee
//! `.abc`), and a maximal whitespace run between amount and payee backs off
//! one character at a time, so a tab may end up opening the payee.

/// Classification of one trimmed, non-blank notes line
///
/// Borrows its captures from the classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Sets the year for all following date markers
    YearMarker {
        /// The four-digit year text
        year: &'a str,
    },

    /// Sets the day and month for all following transactions
    DateMarker {
        /// First digit group of the marker
        day: &'a str,
        /// Second digit group of the marker
        month: &'a str,
    },

    /// One amount plus free-text payee
    Transaction {
        /// Raw amount text, sign and separator as written
        amount: &'a str,
        /// Payee text up to the end of the line
        payee: &'a str,
    },

    /// None of the above
    Unrecognized,
}

/// Classify one trimmed line
///
/// Matchers are tried in priority order: year marker, date marker,
/// transaction. Lines matching none of them come back as
/// [`LineKind::Unrecognized`]; deciding whether that is fatal is the
/// caller's job.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(year) = match_year_marker(line) {
        return LineKind::YearMarker { year };
    }
    if let Some((day, month)) = match_date_marker(line) {
        return LineKind::DateMarker { day, month };
    }
    if let Some((amount, payee)) = match_transaction(line) {
        return LineKind::Transaction { amount, payee };
    }
    LineKind::Unrecognized
}

/// Match `^\d{4}\s*:$`, returning the year digits
fn match_year_marker(line: &str) -> Option<&str> {
    let before_colon = line.strip_suffix(':')?;
    let digits = before_colon.trim_end_matches(|c: char| c.is_ascii_whitespace());
    (digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Match `^\d{1,2}[,.]\d{1,2}[,.]?\s*:?$`, returning (day, month)
fn match_date_marker(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();

    let day_end = scan_digits(bytes, 0);
    if !(1..=2).contains(&day_end) {
        return None;
    }
    let day = &line[..day_end];

    if day_end >= bytes.len() || !is_separator(bytes[day_end]) {
        return None;
    }

    let month_start = day_end + 1;
    let month_end = scan_digits(bytes, month_start);
    if !(1..=2).contains(&(month_end - month_start)) {
        return None;
    }
    let month = &line[month_start..month_end];

    let mut pos = month_end;
    if pos < bytes.len() && is_separator(bytes[pos]) {
        pos += 1;
    }
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b':' {
        pos += 1;
    }
    (pos == bytes.len()).then_some((day, month))
}

/// Match `^([-+]?\d+([,.]\d+)?)\s*([^ \d,].+)$`, returning (amount, payee)
fn match_transaction(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();

    let mut pos = 0;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }
    let digits_end = scan_digits(bytes, pos);
    if digits_end == pos {
        return None;
    }

    // Fraction is greedy: attach it when the separator is followed by at
    // least one digit, and fall back to leaving the separator for the payee
    // when no payee fits afterwards (`12.3a` is amount `12`, payee `.3a`).
    if digits_end < bytes.len() && is_separator(bytes[digits_end]) {
        let fraction_end = scan_digits(bytes, digits_end + 1);
        if fraction_end > digits_end + 1 {
            if let Some(found) = split_amount_payee(line, fraction_end) {
                return Some(found);
            }
        }
    }
    split_amount_payee(line, digits_end)
}

/// Split the line into amount and payee at a candidate amount end
///
/// Consumes the maximal whitespace run after the amount, then backs the
/// payee start up one character at a time through that run, the way a greedy
/// `\s*` hands characters back. A space can never open the payee, but the
/// other whitespace characters can.
fn split_amount_payee(line: &str, amount_end: usize) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut ws_end = amount_end;
    while ws_end < bytes.len() && bytes[ws_end].is_ascii_whitespace() {
        ws_end += 1;
    }

    let mut payee_start = ws_end;
    loop {
        if let Some(payee) = match_payee(&line[payee_start..]) {
            return Some((&line[..amount_end], payee));
        }
        if payee_start == amount_end {
            return None;
        }
        payee_start -= 1;
    }
}

/// Match `^[^ \d,].+$`, returning the payee text
///
/// The first character may be anything but a space, ASCII digit, or comma;
/// at least one more character must follow, and a payee never spans a
/// newline.
fn match_payee(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if first == ' ' || first == ',' || first.is_ascii_digit() {
        return None;
    }
    if chars.next().is_none() || text.contains('\n') {
        return None;
    }
    Some(text)
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

fn is_separator(byte: u8) -> bool {
    byte == b',' || byte == b'.'
}
