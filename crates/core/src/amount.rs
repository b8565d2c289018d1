//! Exact-decimal amounts.
//!
//! Balances and amounts are `rust_decimal::Decimal`: base-10, 96-bit mantissa,
//! scale up to 28. Addition and subtraction keep the larger operand scale, so
//! `1000.1234 - 100` is exactly `900.1234` and renders that way.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

/// Parse external textual input into an exact amount, keeping the literal's scale.
///
/// Input that would need rounding (more than 28 fractional digits, or more
/// significant digits than the mantissa holds) is rejected.
pub fn parse_amount(input: &str) -> LedgerResult<Decimal> {
    Decimal::from_str_exact(input.trim())
        .map_err(|e| LedgerError::validation(format!("invalid amount '{input}': {e}")))
}

/// Reject negative amounts. Zero passes.
pub fn ensure_non_negative(amount: Decimal) -> LedgerResult<Decimal> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::validation(format!(
            "amount must not be negative (got {amount})"
        )));
    }
    Ok(amount)
}

/// Integer part, truncated toward zero.
pub fn whole_units(amount: Decimal) -> i128 {
    let truncated = amount.trunc();
    truncated.mantissa() / 10i128.pow(truncated.scale())
}

/// Fixed-point rendering: no exponent, scale preserved.
pub fn plain_string(amount: Decimal) -> String {
    amount.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn subtraction_keeps_input_precision() {
        let balance = parse_amount("1000.1234").unwrap();
        let result = balance - Decimal::from(100);
        assert_eq!(result, dec!(900.1234));
        assert_eq!(plain_string(result), "900.1234");
        assert_eq!(whole_units(result), 900);
    }

    #[test]
    fn integral_sums_render_without_fraction() {
        assert_eq!(plain_string(dec!(2500) + dec!(500)), "3000");
    }

    #[test]
    fn tiny_balance_is_strictly_positive() {
        let tiny = parse_amount("0.00000001").unwrap();
        assert!(tiny > Decimal::ZERO);
        assert_eq!(plain_string(tiny), "0.00000001");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_amount("12,5abc"), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn parse_rejects_input_that_would_round() {
        assert!(matches!(
            parse_amount("0.00000000000000000000000000001"),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            parse_amount("1000.12345678901234567890123456789"),
            Err(LedgerError::Validation(_))
        ));
        assert_eq!(
            plain_string(parse_amount("0.0000000000000000000000000001").unwrap()),
            "0.0000000000000000000000000001"
        );
    }

    #[test]
    fn negative_amounts_are_rejected_zero_is_not() {
        assert!(ensure_non_negative(dec!(-0.01)).is_err());
        assert_eq!(ensure_non_negative(Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(ensure_non_negative(dec!(1500.00)), Ok(dec!(1500.00)));
    }

    #[test]
    fn whole_units_truncates_toward_zero() {
        assert_eq!(whole_units(dec!(1100.9999)), 1100);
        assert_eq!(whole_units(dec!(-3.7)), -3);
        assert_eq!(whole_units(dec!(0.5)), 0);
    }

    proptest! {
        /// Parsing a rendered amount gives the same amount back, scale included.
        #[test]
        fn plain_string_is_reparseable(mantissa in -1_000_000_000_000i64..1_000_000_000_000i64, scale in 0u32..10) {
            let amount = Decimal::new(mantissa, scale);
            let reparsed = parse_amount(&plain_string(amount)).unwrap();
            prop_assert_eq!(reparsed, amount);
            prop_assert_eq!(reparsed.scale(), amount.scale());
        }
    }
}
