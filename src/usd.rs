use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as a raw number of dollars and is never rounded
/// while totals accumulate; the [`Display`] implementation formats it with
/// thousands separators and exactly 2 decimal places, e.g. `$12,345.67`.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Usd(f64);

impl Usd {
    /// Returns the raw dollar amount.
    #[must_use]
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Usd {
    fn from(dollars: f64) -> Self {
        Self(dollars)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", self.0.abs());
        let (dollars, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "{sign}${grouped}.{cents}")
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Usd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
