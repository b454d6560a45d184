//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are held at full precision and only rounded to currency precision
//! (2 decimal places) at the point of display. Summing line totals across a
//! cart therefore never compounds rounding error.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in USD.
///
/// The restaurant operates in a single currency, so no currency code is
/// carried. The inner [`Decimal`] is full precision; use [`Price::rounded`]
/// or [`Price::display`] when handing a value to a customer-facing surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount of dollars.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an integer number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The full-precision amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to currency precision (2 decimal places,
    /// midpoint away from zero).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., `$19.00`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.rounded())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Mul<Decimal> for Price {
    type Output = Self;

    fn mul(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(1900).display(), "$19.00");
        assert_eq!(Price::from_cents(450).display(), "$4.50");
    }

    #[test]
    fn test_rounding_happens_only_at_display() {
        // 28.00 * 0.0725 = 2.03 exactly; 28.01 * 0.0725 = 2.030725
        let rate: Decimal = "0.0725".parse().unwrap();
        let tax = Price::from_cents(2801) * rate;
        assert_eq!(tax.amount().to_string(), "2.030725");
        assert_eq!(tax.display(), "$2.03");
    }

    #[test]
    fn test_sum_accumulates_full_precision() {
        let prices = vec![Price::from_cents(1900), Price::from_cents(450) * 2u32];
        let subtotal: Price = prices.into_iter().sum();
        assert_eq!(subtotal, Price::from_cents(2800));
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let price = Price::from_cents(3003);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"30.03\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
