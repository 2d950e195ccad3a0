//! Pricing service port.
//!
//! This module defines the trait for the external service that computes
//! per-item amounts (tax, discount, subtotal, total), together with the
//! request and response shapes that cross that boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Adjustment, Amount, DiscountId, LineItem, PricedAmounts, PricingInputs, ProductId,
};
use crate::error::Result;

use super::format::NumberFormat;

/// One item's pricing request: the shared order inputs plus the item's own
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Tax country applied to the order.
    pub country: String,
    /// Tax region applied to the order.
    pub region: String,
    /// Products of every item in the order.
    pub product_ids: Vec<ProductId>,
    /// Discounts applied at the order level.
    pub discount_ids: Vec<DiscountId>,
    /// The product being priced.
    pub product_id: ProductId,
    /// Ordered quantity of that product.
    pub quantity: u32,
    /// Unit price of that product.
    pub unit_price: Amount,
}

impl PricingRequest {
    /// Build the request for one item against the resolved pass inputs.
    #[must_use]
    pub fn for_item(item: &LineItem, inputs: &PricingInputs) -> Self {
        Self {
            country: inputs.country.clone(),
            region: inputs.region.clone(),
            product_ids: inputs.product_ids.clone(),
            discount_ids: inputs.discount_ids.clone(),
            product_id: item.product_id().clone(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
        }
    }
}

/// Computed amounts for one item, formatted by the service's locale rules.
///
/// Every numeric field is an optional formatted string; which fields a
/// pass requires depends on the item's merge mode (see
/// [`merge_amounts`](crate::domain::merge_amounts)). Adjustments are
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<Adjustment>,
}

impl PricingResponse {
    /// Parse the formatted numeric fields through the number-format port.
    ///
    /// Absent fields stay `None`.
    ///
    /// # Errors
    ///
    /// A present field that does not parse fails the whole decode.
    pub fn decode(&self, format: &dyn NumberFormat) -> Result<PricedAmounts> {
        Ok(PricedAmounts {
            amount: unformat_opt(format, self.amount.as_deref())?,
            discount: unformat_opt(format, self.discount.as_deref())?,
            tax: unformat_opt(format, self.tax.as_deref())?,
            subtotal: unformat_opt(format, self.subtotal.as_deref())?,
            total: unformat_opt(format, self.total.as_deref())?,
        })
    }
}

fn unformat_opt(format: &dyn NumberFormat, raw: Option<&str>) -> Result<Option<Amount>> {
    raw.map(|s| format.unformat(s)).transpose()
}

/// External service computing amounts for one line item.
///
/// Implementations wrap whatever transport the embedding surface uses
/// (HTTP endpoint, RPC, in-process rules engine). One request prices one
/// item; a recompute pass issues them concurrently.
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Compute amounts for one item.
    ///
    /// # Errors
    ///
    /// Returns an error when the service is unreachable or rejects the
    /// request. Failures are isolated to the requesting item.
    async fn price_item(&self, request: &PricingRequest) -> Result<PricingResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::format::DecimalFormat;
    use rust_decimal_macros::dec;

    #[test]
    fn decode_parses_present_fields_and_keeps_absent_none() {
        let response = PricingResponse {
            discount: Some("1,000.50".to_string()),
            total: Some("19.50".to_string()),
            ..Default::default()
        };

        let priced = response.decode(&DecimalFormat::point()).unwrap();
        assert_eq!(priced.discount, Some(dec!(1000.50)));
        assert_eq!(priced.total, Some(dec!(19.50)));
        assert!(priced.amount.is_none());
        assert!(priced.tax.is_none());
        assert!(priced.subtotal.is_none());
    }

    #[test]
    fn decode_fails_on_malformed_present_field() {
        let response = PricingResponse {
            amount: Some("twenty".to_string()),
            ..Default::default()
        };

        assert!(response.decode(&DecimalFormat::point()).is_err());
    }

    #[test]
    fn response_deserializes_with_missing_fields() {
        let response: PricingResponse = serde_json::from_str(
            r#"{ "discount": "1.00", "adjustments": [{ "id": 5 }] }"#,
        )
        .unwrap();

        assert_eq!(response.discount.as_deref(), Some("1.00"));
        assert!(response.amount.is_none());
        assert_eq!(response.adjustments.len(), 1);
    }

    #[test]
    fn request_for_item_combines_inputs_and_item_fields() {
        let item = LineItem::new("item-1", "product-9", 2, dec!(10.00));
        let inputs = PricingInputs {
            country: "US".to_string(),
            region: "CA".to_string(),
            product_ids: vec![ProductId::from("product-9")],
            discount_ids: vec![DiscountId::from("discount-5")],
        };

        let request = PricingRequest::for_item(&item, &inputs);
        assert_eq!(request.country, "US");
        assert_eq!(request.region, "CA");
        assert_eq!(request.product_id, ProductId::from("product-9"));
        assert_eq!(request.quantity, 2);
        assert_eq!(request.unit_price, dec!(10.00));
        assert_eq!(request.discount_ids, inputs.discount_ids);
    }
}
