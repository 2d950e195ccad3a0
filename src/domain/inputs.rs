//! Pricing input resolution: derived defaults and caller overrides.

use serde::{Deserialize, Serialize};

use super::ids::{DiscountId, ProductId};

/// Fully resolved inputs shared by every request of one recompute pass.
///
/// Derived from current order state at the moment the pass starts, then
/// combined with the caller's [`PricingOverrides`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PricingInputs {
    /// Tax country applied to the order.
    pub country: String,
    /// Tax region applied to the order.
    pub region: String,
    /// Products of every item in the collection.
    pub product_ids: Vec<ProductId>,
    /// Discounts applied at the order level.
    pub discount_ids: Vec<DiscountId>,
}

/// Partial pricing inputs supplied by the caller of a recompute pass.
///
/// A present field takes precedence over the derived default for that field;
/// absent fields fall back. Deserializable so embedding surfaces can pass
/// override payloads straight through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<ProductId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_ids: Option<Vec<DiscountId>>,
}

impl PricingOverrides {
    /// An empty override set (every field falls back to its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tax country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Override the tax region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the product-id list.
    #[must_use]
    pub fn product_ids(mut self, product_ids: Vec<ProductId>) -> Self {
        self.product_ids = Some(product_ids);
        self
    }

    /// Override the discount-id list.
    #[must_use]
    pub fn discount_ids(mut self, discount_ids: Vec<DiscountId>) -> Self {
        self.discount_ids = Some(discount_ids);
        self
    }

    /// Resolve against derived defaults. Present fields win, field by field.
    pub fn merge(self, defaults: PricingInputs) -> PricingInputs {
        PricingInputs {
            country: self.country.unwrap_or(defaults.country),
            region: self.region.unwrap_or(defaults.region),
            product_ids: self.product_ids.unwrap_or(defaults.product_ids),
            discount_ids: self.discount_ids.unwrap_or(defaults.discount_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PricingInputs {
        PricingInputs {
            country: "US".to_string(),
            region: "TN".to_string(),
            product_ids: vec![ProductId::from("product-1")],
            discount_ids: vec![DiscountId::from("discount-1")],
        }
    }

    #[test]
    fn empty_overrides_keep_every_default() {
        let inputs = PricingOverrides::new().merge(defaults());
        assert_eq!(inputs, defaults());
    }

    #[test]
    fn present_fields_win_absent_fields_fall_back() {
        let inputs = PricingOverrides::new()
            .country("CA")
            .region("BC")
            .merge(defaults());

        assert_eq!(inputs.country, "CA");
        assert_eq!(inputs.region, "BC");
        assert_eq!(inputs.product_ids, defaults().product_ids);
        assert_eq!(inputs.discount_ids, defaults().discount_ids);
    }

    #[test]
    fn list_overrides_replace_wholesale() {
        let inputs = PricingOverrides::new()
            .discount_ids(vec![DiscountId::from("flash-sale")])
            .merge(defaults());

        assert_eq!(inputs.discount_ids, vec![DiscountId::from("flash-sale")]);
    }

    #[test]
    fn overrides_deserialize_from_partial_payload() {
        let overrides: PricingOverrides =
            serde_json::from_str(r#"{ "country": "GB" }"#).unwrap();

        assert_eq!(overrides.country.as_deref(), Some("GB"));
        assert!(overrides.region.is_none());
        assert!(overrides.product_ids.is_none());
    }
}
