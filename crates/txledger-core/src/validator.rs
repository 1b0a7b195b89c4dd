//! Amount validation
//!
//! Checked at the API boundary before the store is touched; the store itself
//! never re-validates.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};

/// True iff the amount is present and strictly greater than zero
pub fn validate_amount(amount: Option<&Decimal>) -> bool {
    matches!(amount, Some(a) if a.is_sign_positive() && !a.is_zero())
}

/// Gate form of [`validate_amount`], naming what was wrong
pub fn require_valid_amount(amount: Option<Decimal>) -> CoreResult<Decimal> {
    match amount {
        None => Err(CoreError::invalid_input("amount is required")),
        Some(a) if validate_amount(Some(&a)) => Ok(a),
        Some(a) => Err(CoreError::invalid_input(format!(
            "amount must be greater than zero, got {}",
            a
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_positive_amounts_pass() {
        for s in ["0.01", "4.50", "1", "1000000000.123456789"] {
            assert!(validate_amount(Some(&dec(s))), "{} should be valid", s);
        }
    }

    #[test]
    fn test_zero_and_negative_fail() {
        for s in ["0", "0.00", "-0", "-0.01", "-100"] {
            assert!(!validate_amount(Some(&dec(s))), "{} should be invalid", s);
        }
    }

    #[test]
    fn test_missing_amount_fails() {
        assert!(!validate_amount(None));
    }

    #[test]
    fn test_require_valid_amount() {
        assert_eq!(require_valid_amount(Some(dec("4.50"))), Ok(dec("4.50")));

        let err = require_valid_amount(None).unwrap_err();
        assert_eq!(err, CoreError::invalid_input("amount is required"));

        let err = require_valid_amount(Some(dec("-1"))).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
