//! The Collatz rule: one transformation step.
//!
//! For a value n, the next value is n/2 when n is even, 3n + 1 when n is
//! odd. Which branch fired is preserved as an [`Operation`] so callers can
//! label each step of a sequence.

use crate::error::{Error, Result};

/// Which Collatz rule produced a value from its predecessor.
///
/// With the `serde` feature the variants serialize to the wire labels
/// `"divide"` and `"multiply-add"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Even rule: n → n / 2.
    #[cfg_attr(feature = "serde", serde(rename = "divide"))]
    Halve,
    /// Odd rule: n → 3n + 1.
    #[cfg_attr(feature = "serde", serde(rename = "multiply-add"))]
    TripleAddOne,
}

/// Which rule applies to `n`.
///
/// # Examples
///
/// ```
/// use hailstone_core::{parity_rule, Operation};
///
/// assert_eq!(parity_rule(6), Operation::Halve);
/// assert_eq!(parity_rule(7), Operation::TripleAddOne);
/// ```
pub const fn parity_rule(n: u64) -> Operation {
    if n % 2 == 0 {
        Operation::Halve
    } else {
        Operation::TripleAddOne
    }
}

/// Apply one Collatz step to `n`.
///
/// Arithmetic is checked: the odd rule fails with [`Error::Overflow`]
/// when 3n + 1 does not fit in a `u64`, rather than wrapping.
///
/// # Examples
///
/// ```
/// use hailstone_core::next_value;
///
/// assert_eq!(next_value(6)?, 3);
/// assert_eq!(next_value(3)?, 10);
/// assert_eq!(next_value(16)?, 8);
/// # Ok::<(), hailstone_core::Error>(())
/// ```
pub fn next_value(n: u64) -> Result<u64> {
    match parity_rule(n) {
        Operation::Halve => Ok(n / 2),
        Operation::TripleAddOne => n
            .checked_mul(3)
            .and_then(|m| m.checked_add(1))
            .ok_or(Error::Overflow { value: n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_values_halve() {
        assert_eq!(next_value(2).unwrap(), 1);
        assert_eq!(next_value(10).unwrap(), 5);
        assert_eq!(next_value(124).unwrap(), 62);
    }

    #[test]
    fn odd_values_triple_and_add() {
        assert_eq!(next_value(1).unwrap(), 4);
        assert_eq!(next_value(27).unwrap(), 82);
        assert_eq!(next_value(41).unwrap(), 124);
    }

    #[test]
    fn odd_rule_overflow_is_explicit() {
        // u64::MAX is odd, so the odd rule applies and must not wrap
        assert_eq!(
            next_value(u64::MAX),
            Err(Error::Overflow { value: u64::MAX })
        );

        // Largest odd value that still fits: 3n + 1 <= u64::MAX
        let safe = (u64::MAX - 1) / 3;
        let safe = if safe % 2 == 0 { safe - 1 } else { safe };
        assert!(next_value(safe).is_ok());
    }
}
