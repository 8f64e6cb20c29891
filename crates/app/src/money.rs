//! Money helpers.
//!
//! Every amount in the system is an integer number of centavos. The sheet
//! service stores amounts as 2-decimal strings, so the conversions live here.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("invalid amount {0:?}")]
    Invalid(String),

    #[error("amount {0:?} out of range")]
    OutOfRange(String),
}

/// Parse a sheet cell such as `"800.00"` into centavos.
///
/// # Errors
///
/// Returns an error when the cell is not a decimal number or is negative.
pub fn parse_amount(cell: &str) -> Result<u64, MoneyParseError> {
    let amount: Decimal = cell
        .trim()
        .parse()
        .map_err(|_parse| MoneyParseError::Invalid(cell.to_string()))?;

    let centavos = (amount * Decimal::ONE_HUNDRED).round();

    centavos
        .to_u64()
        .ok_or_else(|| MoneyParseError::OutOfRange(cell.to_string()))
}

/// Format centavos as a 2-decimal sheet cell, e.g. `80000` -> `"800.00"`.
#[must_use]
pub fn format_amount(centavos: u64) -> String {
    format!("{}.{:02}", centavos / 100, centavos % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_decimal_cells() {
        assert_eq!(parse_amount("800.00"), Ok(800_00));
        assert_eq!(parse_amount("0.50"), Ok(50));
        assert_eq!(parse_amount(" 175.00 "), Ok(175_00));
    }

    #[test]
    fn parses_cells_without_decimals() {
        assert_eq!(parse_amount("75"), Ok(75_00));
        assert_eq!(parse_amount("0"), Ok(0));
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!(matches!(parse_amount("abc"), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(
            parse_amount("-1.00"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn formats_centavos() {
        assert_eq!(format_amount(800_00), "800.00");
        assert_eq!(format_amount(7), "0.07");
        assert_eq!(format_amount(175_50), "175.50");
    }

    #[test]
    fn format_parse_round_trip() {
        for centavos in [0, 1, 99, 100, 500_00, 123_45] {
            assert_eq!(
                parse_amount(&format_amount(centavos)),
                Ok(centavos),
                "round trip failed for {centavos}"
            );
        }
    }
}
