//! Order context port: read access to order-level pricing state.

use crate::domain::DiscountId;

/// Read-only view of the order state that seeds pricing defaults.
///
/// A recompute pass reads these accessors when it starts, never earlier,
/// so implementations should answer with current values rather than a
/// snapshot taken at construction time.
pub trait OrderContext: Send + Sync {
    /// Tax country currently applied to the order.
    fn tax_country(&self) -> String;

    /// Tax region currently applied to the order.
    fn tax_region(&self) -> String;

    /// Identifiers of the discounts applied at the order level.
    fn discount_ids(&self) -> Vec<DiscountId>;
}
