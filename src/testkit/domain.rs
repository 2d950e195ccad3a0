//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`LineItem`], [`PricingResponse`],
//! and a fixed [`OrderContext`] so tests focus on assertions rather than
//! construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{DiscountId, LineItem};
use crate::port::{OrderContext, PricingResponse};

/// Create a [`LineItem`] with quantity 1, unit price 10.00, zeroed amounts.
pub fn line_item(id: &str, product_id: &str) -> LineItem {
    LineItem::new(id, product_id, 1, Decimal::new(1000, 2))
}

/// Create a [`PricingResponse`] carrying all five amount fields.
pub fn full_response(
    amount: &str,
    discount: &str,
    tax: &str,
    subtotal: &str,
    total: &str,
) -> PricingResponse {
    PricingResponse {
        amount: Some(amount.to_string()),
        discount: Some(discount.to_string()),
        tax: Some(tax.to_string()),
        subtotal: Some(subtotal.to_string()),
        total: Some(total.to_string()),
        adjustments: Vec::new(),
    }
}

/// Fixed order context backing [`OrderContext`] in tests.
///
/// Fields are public so a test can change the order state between passes.
#[derive(Debug, Clone)]
pub struct TestOrder {
    pub country: String,
    pub region: String,
    pub discounts: Vec<DiscountId>,
}

impl TestOrder {
    pub fn new(country: &str, region: &str) -> Self {
        Self {
            country: country.to_string(),
            region: region.to_string(),
            discounts: Vec::new(),
        }
    }

    /// Apply order-level discounts.
    #[must_use]
    pub fn with_discounts(mut self, ids: &[&str]) -> Self {
        self.discounts = ids.iter().map(|id| DiscountId::from(*id)).collect();
        self
    }
}

impl Default for TestOrder {
    fn default() -> Self {
        Self::new("US", "TN")
    }
}

impl OrderContext for TestOrder {
    fn tax_country(&self) -> String {
        self.country.clone()
    }

    fn tax_region(&self) -> String {
        self.region.clone()
    }

    fn discount_ids(&self) -> Vec<DiscountId> {
        self.discounts.clone()
    }
}
