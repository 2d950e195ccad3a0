//! Monetary types for amount representation.

use rust_decimal::Decimal;

/// Monetary amount represented as a Decimal for precision.
pub type Amount = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_are_decimal() {
        let unit_price: Amount = dec!(9.99);
        let tax: Amount = dec!(0.80);

        assert_eq!(unit_price + tax, dec!(10.79));
    }
}
