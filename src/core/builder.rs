//! Transaction record construction.
//!
//! The classifier hands over the raw amount and payee text of a
//! transaction line; this module turns them into a finished
//! [`TransactionRecord`] by normalizing the decimal separator, applying
//! the sign convention, and stamping the date carried in the
//! [`ParseContext`].

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::context::ParseContext;
use crate::types::TransactionRecord;

/// Builds a transaction record from matched line parts.
///
/// Amounts may use `,` or `.` as the decimal separator; both parse the
/// same. The sign convention treats entries as expenses by default:
/// unless the raw amount text starts with `+`, the parsed value is
/// negated. A leading `-` therefore flips twice and comes out positive.
/// Zero amounts carry no sign.
///
/// # Arguments
///
/// * `raw_amount` - Amount text exactly as it appeared on the line
/// * `payee` - Payee text exactly as it appeared on the line
/// * `context` - Year/date state in effect for this line
///
/// # Returns
///
/// The finished record, or a reason message when a required part is
/// missing or the amount does not parse as a decimal. The caller is
/// expected to attach line information.
pub fn build_record(
    raw_amount: &str,
    payee: &str,
    context: &ParseContext,
) -> Result<TransactionRecord, String> {
    if raw_amount.is_empty() {
        return Err("empty amount".to_owned());
    }
    if payee.is_empty() {
        return Err("empty payee".to_owned());
    }

    let date = context
        .date_stamp()
        .ok_or_else(|| "no date in effect".to_owned())?;

    let normalized = raw_amount.replace(',', ".");
    let parsed = Decimal::from_str(&normalized)
        .map_err(|error| format!("invalid amount '{raw_amount}': {error}"))?;

    // Entries are expenses unless explicitly marked with a leading '+'.
    let signed = if raw_amount.starts_with('+') {
        parsed
    } else {
        -parsed
    };
    // A negated zero keeps the sign flag and would render as "-0.00".
    let amount = if signed.is_zero() { Decimal::ZERO } else { signed };

    Ok(TransactionRecord {
        date,
        amount,
        payee: payee.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn context_with_date() -> ParseContext {
        let mut context = ParseContext::new(Some("2023"));
        context.set_date("5", "12");
        context
    }

    #[rstest]
    #[case::unsigned_becomes_expense("50", Decimal::new(-50, 0))]
    #[case::plus_stays_income("+50", Decimal::new(50, 0))]
    #[case::minus_flips_to_income("-50", Decimal::new(50, 0))]
    #[case::comma_fraction("12,5", Decimal::new(-125, 1))]
    #[case::dot_fraction("12.5", Decimal::new(-125, 1))]
    #[case::plus_with_fraction("+0,99", Decimal::new(99, 2))]
    fn applies_sign_and_separator_rules(#[case] raw: &str, #[case] expected: Decimal) {
        let record = build_record(raw, "Groceries", &context_with_date()).unwrap();

        assert_eq!(record.amount, expected);
    }

    // Zero compares equal regardless of the sign flag, so the flag is
    // checked directly.
    #[rstest]
    #[case::bare_zero("0")]
    #[case::plus_zero("+0")]
    #[case::minus_zero("-0")]
    #[case::fractional_zero("0,00")]
    fn zero_amounts_carry_no_sign(#[case] raw: &str) {
        let record = build_record(raw, "Freebie", &context_with_date()).unwrap();

        assert_eq!(record.amount, Decimal::ZERO);
        assert!(!record.amount.is_sign_negative());
    }

    #[test]
    fn stamps_date_from_context() {
        let record = build_record("50", "Groceries", &context_with_date()).unwrap();

        assert_eq!(record.date, "2023-12-05");
        assert_eq!(record.payee, "Groceries");
    }

    #[test]
    fn payee_is_kept_verbatim() {
        let record = build_record("50", "\tCafé  7am", &context_with_date()).unwrap();

        assert_eq!(record.payee, "\tCafé  7am");
    }

    #[rstest]
    #[case::empty_amount("", "Groceries", "empty amount")]
    #[case::empty_payee("50", "", "empty payee")]
    fn rejects_missing_parts(#[case] raw: &str, #[case] payee: &str, #[case] reason: &str) {
        let result = build_record(raw, payee, &context_with_date());

        assert_eq!(result, Err(reason.to_owned()));
    }

    #[test]
    fn needs_a_date_in_effect() {
        let context = ParseContext::new(Some("2023"));

        let result = build_record("50", "Groceries", &context);

        assert_eq!(result, Err("no date in effect".to_owned()));
    }

    #[rstest]
    #[case::two_separators("5,2,1")]
    #[case::too_many_digits("99999999999999999999999999999999")]
    fn rejects_unparseable_amounts(#[case] raw: &str) {
        let result = build_record(raw, "Groceries", &context_with_date());

        assert!(result.is_err());
    }
}
