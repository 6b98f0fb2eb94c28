use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;

/// Number of minor units in one whole unit of currency.
const SCALE: i64 = 100;

/// Most fractional digits an amount may carry.
const MAX_DECIMALS: i64 = 2;

/// Integer digits of `i64::MAX / SCALE`.
const MAX_INTEGER_DIGITS: i64 = 17;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored as a count of hundredths (cents).
///
/// Amounts are parsed through `BigDecimal` and must have at most two decimal
/// places; `"0.1"` and `"0.10"` are the same value, `"0.001"` is rejected
/// rather than rounded, and no float ever touches a balance. Negative values exist so that user input such as `-50` can be
/// represented and then rejected by the account rules.
///
/// # Examples
/// ```
/// use bank_sim::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_minor_units(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_minor_units(value: i64) -> Self {
        Money(value)
    }

    /// Whole units, e.g. `Money::from_units(40)` is `40.00`.
    pub fn from_units(value: i64) -> Self {
        Money(value.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn to_string_2dp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        format!("{sign}{}.{:02}", abs / scale, abs % scale)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        // trailing zeros dropped so "1.50" and "1.5" read the same
        let bd = t.parse::<BigDecimal>()?.normalized();

        // Size checks work on the digit count and exponent only; scaling a
        // value like `1e10000000` would expand it in full first.
        let scale = bd.fractional_digit_count();
        if scale > MAX_DECIMALS {
            return Err(ParseBigDecimalError::Other("too many decimal places".into()));
        }
        let integer_digits = i64::try_from(bd.digits()).unwrap_or(i64::MAX).saturating_sub(scale);
        if integer_digits > MAX_INTEGER_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }

        let value: i64 = (bd * BigDecimal::from(SCALE))
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), Money(0));
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_from_units() {
        assert_eq!(Money::from_units(40), Money(4000));
        assert_eq!(Money::from_units(-5), Money(-500));
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(100));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(150));
        assert_eq!(Money::from_str("1.25").unwrap(), Money(125));
        assert_eq!(Money::from_str("0.01").unwrap(), Money(1));
        assert_eq!(Money::from_str("  2.00 ").unwrap(), Money(200));
        assert_eq!(Money::from_str("-50").unwrap(), Money(-5000));
    }

    #[test]
    fn test_from_str_extra_decimals_rejected() {
        assert!(Money::from_str("1.999").is_err());
        assert!(Money::from_str("0.004").is_err());
        assert!(Money::from_str("10.005").is_err());
        assert!(Money::from_str("1e-3").is_err());
        // trailing zeros are not extra precision
        assert_eq!(Money::from_str("10.500").unwrap(), Money(1050));
        assert_eq!(Money::from_str("0.0100").unwrap(), Money(1));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("1e30").is_err());
    }

    #[test]
    fn test_from_str_huge_exponent_fails_fast() {
        let started = std::time::Instant::now();
        for input in ["1e10000000", "-1e999999999", "1e-999999999", "5e17"] {
            assert!(Money::from_str(input).is_err(), "{input} should be rejected");
        }
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_from_str_limits() {
        assert_eq!(Money::from_str("1e2").unwrap(), Money(10000));
        assert_eq!(
            Money::from_str("92233720368547758.07").unwrap(),
            Money(i64::MAX)
        );
        assert!(Money::from_str("92233720368547758.08").is_err());
        assert!(Money::from_str("99999999999999999").is_err());
        assert!(Money::from_str("100000000000000000").is_err());
        assert_eq!(Money::from_str("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Money(10000).to_string_2dp(), "100.00");
        assert_eq!(Money(125).to_string_2dp(), "1.25");
        assert_eq!(Money(1).to_string_2dp(), "0.01");
        assert_eq!(Money(0).to_string_2dp(), "0.00");
        assert_eq!(Money(-5).to_string_2dp(), "-0.05");
        assert_eq!(Money(i64::MIN).to_string_2dp(), "-92233720368547758.08");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money(6000).to_string(), "60.00");
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(Money(100).checked_add(Money(50)), Some(Money(150)));
        assert_eq!(Money(i64::MAX).checked_add(Money(1)), None);
        assert_eq!(Money(100).checked_sub(Money(100)), Some(Money::zero()));
        assert_eq!(Money(i64::MIN).checked_sub(Money(1)), None);
    }

    #[test]
    fn test_ordering() {
        assert!(Money(100) < Money(150));
        assert!(Money(150) > Money(100));
        assert!(Money(100) <= Money(100));
    }
}
