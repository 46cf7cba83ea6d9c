//! Pure conversion between atomic and display amounts.
//!
//! All math uses `rust_decimal::Decimal` so display amounts such as `1.15`
//! convert exactly. No async, no network calls.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Errors that can occur during amount conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    ZeroDivisor,
    Negative(String),
    Overflow { context: String },
    FractionalAmount { value: String },
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::ZeroDivisor => write!(f, "Decimal divisor must be non-zero"),
            AmountError::Negative(v) => write!(f, "Amount must not be negative, got {}", v),
            AmountError::Overflow { context } => write!(f, "Overflow: {}", context),
            AmountError::FractionalAmount { value } => {
                write!(f, "Fractional atomic units not allowed: {}", value)
            }
        }
    }
}

impl std::error::Error for AmountError {}

/// Converts amounts using a fixed divisor (atomic units per display unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountConverter {
    divisor: u64,
}

impl AmountConverter {
    pub fn new(divisor: u64) -> Result<Self, AmountError> {
        if divisor == 0 {
            return Err(AmountError::ZeroDivisor);
        }
        Ok(Self { divisor })
    }

    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    /// Display amount for an atomic amount (signed or unsigned).
    ///
    /// ```text
    /// display = atomic / divisor
    /// ```
    pub fn from_atomic<A: Into<Decimal>>(&self, atomic: A) -> Decimal {
        (atomic.into() / Decimal::from(self.divisor)).normalize()
    }

    /// Atomic amount for a display amount.
    ///
    /// Rejects negative values and values finer than one atomic unit.
    pub fn to_atomic(&self, amount: Decimal) -> Result<u64, AmountError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AmountError::Negative(amount.to_string()));
        }

        let scaled = amount
            .checked_mul(Decimal::from(self.divisor))
            .ok_or_else(|| AmountError::Overflow {
                context: format!("{} * {}", amount, self.divisor),
            })?;

        if !scaled.fract().is_zero() {
            return Err(AmountError::FractionalAmount {
                value: scaled.normalize().to_string(),
            });
        }

        scaled.to_u64().ok_or_else(|| AmountError::Overflow {
            context: format!("{} does not fit in u64", scaled),
        })
    }
}

impl Default for AmountConverter {
    fn default() -> Self {
        Self {
            divisor: crate::network::DEFAULT_DECIMAL_DIVISOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn converter() -> AmountConverter {
        AmountConverter::new(100).unwrap()
    }

    #[test]
    fn test_to_atomic_exact_decimal() {
        // 1.15 * 100 = 115, no float rounding
        let atomic = converter()
            .to_atomic(Decimal::from_str("1.15").unwrap())
            .unwrap();
        assert_eq!(atomic, 115);
    }

    #[test]
    fn test_from_atomic() {
        assert_eq!(converter().from_atomic(115u64), Decimal::from_str("1.15").unwrap());
        assert_eq!(converter().from_atomic(-250i64), Decimal::from_str("-2.5").unwrap());
        assert_eq!(converter().from_atomic(0u64), Decimal::ZERO);
    }

    #[test]
    fn test_round_trip_integral_values() {
        let c = converter();
        for x in [0u64, 1, 99, 100, 115, 123_456_789, u32::MAX as u64, 1 << 62] {
            assert_eq!(c.to_atomic(c.from_atomic(x)).unwrap(), x, "round trip of {}", x);
        }

        let c = AmountConverter::new(100_000_000).unwrap();
        for x in [1u64, 7, 100_000_001, 21_000_000_00000000] {
            assert_eq!(c.to_atomic(c.from_atomic(x)).unwrap(), x, "round trip of {}", x);
        }
    }

    #[test]
    fn test_negative_rejected() {
        let result = converter().to_atomic(Decimal::from_str("-1").unwrap());
        assert!(matches!(result, Err(AmountError::Negative(_))));
    }

    #[test]
    fn test_fractional_rejected() {
        let result = converter().to_atomic(Decimal::from_str("0.001").unwrap());
        assert!(matches!(result, Err(AmountError::FractionalAmount { .. })));
    }

    #[test]
    fn test_overflow_rejected() {
        let result = converter().to_atomic(Decimal::from(u64::MAX));
        assert!(matches!(result, Err(AmountError::Overflow { .. })));
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert_eq!(AmountConverter::new(0), Err(AmountError::ZeroDivisor));
    }
}
