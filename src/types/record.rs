//! Transaction record type emitted by the parser
//!
//! One record corresponds to one transaction line of the notes file and maps
//! 1:1 onto a row of the output CSV.

use rust_decimal::Decimal;

/// One parsed transaction, ready for CSV serialization
///
/// The date is stamped from the parse context that was in effect when the
/// owning transaction line was read; the amount already carries its final
/// sign (unmarked amounts are expenses and come out negative).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Transaction date as `YYYY-MM-DD`, zero-padded
    pub date: String,

    /// Signed amount; rendered with exactly two fraction digits in the CSV
    pub amount: Decimal,

    /// Free-text payee, taken verbatim from the notes line
    pub payee: String,
}
