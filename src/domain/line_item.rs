//! Line items and the amount merge policy.
//!
//! This module provides the core types for a priced order entry:
//!
//! - [`LineItem`] - One order entry: product, quantity, computed amounts
//! - [`ItemAmounts`] - The five resolved monetary fields of an item
//! - [`PricedAmounts`] - Parsed pricing-service output, every field optional
//! - [`merge_amounts`] - The merge policy applied after a pricing pass
//!
//! # Merge Policy
//!
//! A recompute pass can touch an item in one of two ways:
//! - **Full**: all five amounts are replaced by the service's values
//! - **Manual**: the user hand-entered amounts; only the discount is
//!   refreshed and the rest stays as typed
//!
//! # Examples
//!
//! Merging a response into a manually adjusted item:
//!
//! ```
//! use reckoner::domain::{merge_amounts, ItemAmounts, PricedAmounts};
//! use rust_decimal_macros::dec;
//!
//! let current = ItemAmounts {
//!     amount: dec!(20.00),
//!     discount: dec!(0.00),
//!     tax: dec!(1.60),
//!     subtotal: dec!(20.00),
//!     total: dec!(21.60),
//! };
//! let priced = PricedAmounts {
//!     discount: Some(dec!(2.00)),
//!     ..Default::default()
//! };
//!
//! let merged = merge_amounts(&current, &priced, true).unwrap();
//! assert_eq!(merged.discount, dec!(2.00));
//! assert_eq!(merged.total, dec!(21.60));
//! ```

use crate::error::PricingError;

use super::adjustment::Adjustment;
use super::ids::{LineItemId, ProductId};
use super::money::Amount;

/// The five resolved monetary fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemAmounts {
    /// Base amount before discount and tax.
    pub amount: Amount,
    /// Discount applied to the item.
    pub discount: Amount,
    /// Tax applied to the item.
    pub tax: Amount,
    /// Amount after discount, before tax.
    pub subtotal: Amount,
    /// Final amount including tax.
    pub total: Amount,
}

/// Amounts parsed from a pricing response.
///
/// The service may omit any field, so every field is optional here; which
/// ones are required depends on the merge mode (see [`merge_amounts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricedAmounts {
    /// Base amount before discount and tax.
    pub amount: Option<Amount>,
    /// Discount applied to the item.
    pub discount: Option<Amount>,
    /// Tax applied to the item.
    pub tax: Option<Amount>,
    /// Amount after discount, before tax.
    pub subtotal: Option<Amount>,
    /// Final amount including tax.
    pub total: Option<Amount>,
}

/// Merge freshly priced amounts into an item's current amounts.
///
/// With `adjusting_manually` set, the user's hand-entered values win: only
/// the discount is taken from the response. Otherwise the response replaces
/// every field.
///
/// # Errors
///
/// Returns [`PricingError::MissingField`] when the response omits a field
/// the merge mode requires.
pub fn merge_amounts(
    current: &ItemAmounts,
    priced: &PricedAmounts,
    adjusting_manually: bool,
) -> Result<ItemAmounts, PricingError> {
    if adjusting_manually {
        let discount = require(priced.discount, "discount")?;
        return Ok(ItemAmounts {
            discount,
            ..*current
        });
    }

    Ok(ItemAmounts {
        amount: require(priced.amount, "amount")?,
        discount: require(priced.discount, "discount")?,
        tax: require(priced.tax, "tax")?,
        subtotal: require(priced.subtotal, "subtotal")?,
        total: require(priced.total, "total")?,
    })
}

fn require(field: Option<Amount>, name: &'static str) -> Result<Amount, PricingError> {
    field.ok_or(PricingError::MissingField { field: name })
}

/// One entry of an order: a product, a quantity, and its computed amounts.
///
/// A thin data holder. Amounts change only through a recompute pass
/// (see `LineItemCollection::update_amounts`) or direct user edits via the
/// `set_` mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    id: LineItemId,
    product_id: ProductId,
    quantity: u32,
    unit_price: Amount,
    amounts: ItemAmounts,
    adjustments: Vec<Adjustment>,
    adjusting_manually: bool,
}

impl LineItem {
    /// Create a line item with zeroed amounts and no adjustments.
    pub fn new(
        id: impl Into<LineItemId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
        unit_price: Amount,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            quantity,
            unit_price,
            amounts: ItemAmounts::default(),
            adjustments: Vec::new(),
            adjusting_manually: false,
        }
    }

    /// Load previously computed amounts (e.g. from a stored order).
    #[must_use]
    pub fn with_amounts(mut self, amounts: ItemAmounts) -> Self {
        self.amounts = amounts;
        self
    }

    /// Load previously stored adjustments.
    #[must_use]
    pub fn with_adjustments(mut self, adjustments: Vec<Adjustment>) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Mark the item as manually adjusted from the start.
    #[must_use]
    pub fn with_adjusting_manually(mut self, adjusting_manually: bool) -> Self {
        self.adjusting_manually = adjusting_manually;
        self
    }

    pub fn id(&self) -> &LineItemId {
        &self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn amounts(&self) -> ItemAmounts {
        self.amounts
    }

    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Whether the user hand-entered this item's amounts.
    pub fn adjusting_manually(&self) -> bool {
        self.adjusting_manually
    }

    /// Change the ordered quantity.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Change the unit price.
    pub fn set_unit_price(&mut self, unit_price: Amount) {
        self.unit_price = unit_price;
    }

    /// Flag or unflag manual adjustment.
    pub fn set_adjusting_manually(&mut self, adjusting_manually: bool) {
        self.adjusting_manually = adjusting_manually;
    }

    /// Replace the computed amounts.
    pub fn set_amounts(&mut self, amounts: ItemAmounts) {
        self.amounts = amounts;
    }

    /// Replace the stored adjustments.
    pub fn set_adjustments(&mut self, adjustments: Vec<Adjustment>) {
        self.adjustments = adjustments;
    }
}
