//! CSV format handling for the generated output
//!
//! This module centralizes the output format concerns:
//! - The column set and header of the target CSV layout
//! - Row serialization, including amount rendering
//!
//! The writer is handed a `Write` sink, so the function stays easy to
//! test against an in-memory buffer.

use std::io::Write;

use csv::WriterBuilder;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::types::{ConvertError, TransactionRecord};

/// Column header of the produced CSV.
///
/// Matches the HomeBank import layout: most columns stay empty, only
/// date, payment mode, payee, and amount are filled.
pub const CSV_HEADER: [&str; 8] = [
    "date", "payment", "info", "payee", "memo", "amount", "category", "tags",
];

// HomeBank payment-mode code for cash.
const PAYMENT_MODE_CASH: &str = "3";

/// One output row in column order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    payment: &'a str,
    info: &'a str,
    payee: &'a str,
    memo: &'a str,
    amount: String,
    category: &'a str,
    tags: &'a str,
}

/// Writes transaction records as semicolon-delimited CSV.
///
/// The header row is written unconditionally, so an input without any
/// transactions still produces a valid, importable file. Every row is
/// marked as a cash payment; info, memo, category, and tags stay empty.
///
/// # Arguments
///
/// * `records` - Finished records in input order
/// * `output` - Destination for the CSV bytes
///
/// # Errors
///
/// [`ConvertError::CsvWrite`] when a row cannot be written,
/// [`ConvertError::Io`] when the final flush fails.
pub fn write_transactions_csv(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), ConvertError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.serialize(CsvRow {
            date: &record.date,
            payment: PAYMENT_MODE_CASH,
            info: "",
            payee: &record.payee,
            memo: "",
            amount: format_amount(record.amount),
            category: "",
            tags: "",
        })?;
    }

    writer.flush()?;

    Ok(())
}

/// Renders an amount with exactly two fraction digits, rounding
/// midpoints away from zero.
fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
