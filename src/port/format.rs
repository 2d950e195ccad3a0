//! Number formatting port and the stock decimal implementation.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Amount;
use crate::error::{FormatError, Result};

/// Locale-aware numeric formatting for amounts crossing the service boundary.
///
/// The pricing service returns amounts as formatted strings (currency
/// symbols, grouping separators); implementations convert between those
/// strings and [`Amount`] values.
pub trait NumberFormat: Send + Sync {
    /// Parse a formatted amount string.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidAmount`] when no amount can be read
    /// from the string.
    fn unformat(&self, raw: &str) -> Result<Amount>;

    /// Render an amount using this format's separators, two decimal places.
    fn format(&self, amount: Amount) -> String;
}

/// Plain decimal formatting with configurable separators.
#[derive(Debug, Clone)]
pub struct DecimalFormat {
    decimal: char,
    thousands: char,
}

impl DecimalFormat {
    /// The `1,234.56` convention.
    #[must_use]
    pub fn point() -> Self {
        Self {
            decimal: '.',
            thousands: ',',
        }
    }

    /// The `1.234,56` convention.
    #[must_use]
    pub fn comma() -> Self {
        Self {
            decimal: ',',
            thousands: '.',
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::point()
    }
}

impl NumberFormat for DecimalFormat {
    fn unformat(&self, raw: &str) -> Result<Amount> {
        // Keep digits, the sign, and the decimal separator; currency
        // symbols together with grouping separators are dropped.
        let mut normalized = String::with_capacity(raw.len());
        for ch in raw.chars() {
            if ch.is_ascii_digit() || ch == '-' {
                normalized.push(ch);
            } else if ch == self.decimal {
                normalized.push('.');
            }
        }

        Decimal::from_str(&normalized).map_err(|_| {
            FormatError::InvalidAmount {
                raw: raw.to_string(),
            }
            .into()
        })
    }

    fn format(&self, amount: Amount) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{rounded:.2}");
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

        let mut out = String::from(sign);
        let digits = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(self.thousands);
            }
            out.push(ch);
        }
        out.push(self.decimal);
        out.push_str(frac_part);
        out
    }
}
