//! Type-safe price representation.
//!
//! Catalog prices are whole-peso ARS amounts - the shop rounds everything
//! to the peso, so there is no fractional unit to carry. A newtype over
//! `i64` keeps prices out of general integer arithmetic and gives one
//! place to hang the `es-AR` display format.

use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A price in Argentine pesos (whole pesos, no centavos).
///
/// Invariant: never negative. Normalization rejects negative backend
/// amounts before a `Price` is ever constructed from external data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A price of zero pesos.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-peso amount.
    #[must_use]
    pub const fn new(pesos: i64) -> Self {
        debug_assert!(pesos >= 0);
        Self(pesos)
    }

    /// Get the amount in whole pesos.
    #[must_use]
    pub const fn pesos(&self) -> i64 {
        self.0
    }

    /// Multiply by a quantity, saturating at `i64::MAX`.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

/// Display as the shop formats prices: `$ 15.000` (es-AR grouping, no
/// fractional digits).
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "$ {}", group_thousands(self.0))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Insert `.` thousands separators into a non-negative integer.
fn group_thousands(amount: i64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts_without_separator() {
        assert_eq!(Price::new(0).to_string(), "$ 0");
        assert_eq!(Price::new(999).to_string(), "$ 999");
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(Price::new(8500).to_string(), "$ 8.500");
        assert_eq!(Price::new(15000).to_string(), "$ 15.000");
        assert_eq!(Price::new(1_234_567).to_string(), "$ 1.234.567");
    }

    #[test]
    fn multiplies_by_quantity() {
        assert_eq!(Price::new(15000) * 3, Price::new(45000));
    }

    #[test]
    fn sums_line_totals() {
        let total: Price = [Price::new(15000), Price::new(8500)].into_iter().sum();
        assert_eq!(total, Price::new(23500));
    }

    #[test]
    fn orders_numerically() {
        assert!(Price::new(9000) < Price::new(10000));
    }
}
