//! Transfer objects
//!
//! Shapes that cross the system boundary. Each one mirrors a domain
//! entity field for field and owns the mapping to and from it, so the
//! wire contract only changes when this module changes.

mod account;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};

pub use account::AccountDto;

/// Parse a balance typed by a user (e.g. "250.75", " -3 ", "1.5e3")
pub fn parse_balance(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::decimal("balance is empty"));
    }

    if trimmed.contains(['e', 'E']) {
        return Ok(Decimal::from_scientific(trimmed)?);
    }
    Ok(Decimal::from_str(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balance_keeps_scale() {
        let balance = parse_balance("250.750").unwrap();
        assert_eq!(balance, Decimal::new(25075, 2));
        assert_eq!(balance.to_string(), "250.750");
    }

    #[test]
    fn test_parse_balance_trims_and_signs() {
        assert_eq!(parse_balance("  -3 ").unwrap(), Decimal::new(-3, 0));
    }

    #[test]
    fn test_parse_balance_scientific() {
        assert_eq!(parse_balance("1.5e3").unwrap(), Decimal::new(1500, 0));
    }

    #[test]
    fn test_parse_balance_rejects_garbage() {
        assert!(matches!(parse_balance(""), Err(Error::Decimal(_))));
        assert!(matches!(parse_balance("twelve"), Err(Error::Decimal(_))));
        assert!(matches!(parse_balance("1,000.00"), Err(Error::Decimal(_))));
    }
}
