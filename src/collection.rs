//! Line-item collection and the amount recalculation pass.
//!
//! Provides [`LineItemCollection`], which owns an order's line items plus
//! the session collaborators (pricing service, number format, notifiers)
//! and drives the whole recompute flow: derive defaults from order state,
//! merge caller overrides, fan out one pricing request per item, apply the
//! settled responses, notify.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{
    merge_amounts, ItemFailure, LineItem, LineItemId, PricingInputs, PricingOverrides, ProductId,
    UpdateOutcome,
};
use crate::error::{PricingError, Result};
use crate::port::{
    Event, NotifierRegistry, NumberFormat, OrderContext, PricingRequest, PricingResponse,
    PricingService,
};

/// Ordered collection of an order's line items.
///
/// Item order is display order; nothing in the recompute pass depends on
/// it. Collaborators are injected once per editing session.
pub struct LineItemCollection {
    items: Vec<LineItem>,
    pricing: Arc<dyn PricingService>,
    format: Arc<dyn NumberFormat>,
    notifiers: Arc<NotifierRegistry>,
    request_timeout: Option<Duration>,
}

impl LineItemCollection {
    /// Create an empty collection bound to its session collaborators.
    pub fn new(
        pricing: Arc<dyn PricingService>,
        format: Arc<dyn NumberFormat>,
        notifiers: Arc<NotifierRegistry>,
    ) -> Self {
        Self {
            items: Vec::new(),
            pricing,
            format,
            notifiers,
            request_timeout: None,
        }
    }

    /// Bound each pricing request to `limit`.
    ///
    /// A request exceeding the limit counts as that item's failure. Unset,
    /// a hung request stalls the whole pass.
    #[must_use]
    pub fn with_request_timeout(mut self, limit: Duration) -> Self {
        self.request_timeout = Some(limit);
        self
    }

    /// Append an item to the collection.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove an item by id, returning it when present.
    pub fn remove(&mut self, id: &LineItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Find an item by id.
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Find an item by id for mutation.
    pub fn get_mut(&mut self, id: &LineItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// All items, in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Product ids of every item, in collection order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items
            .iter()
            .map(|item| item.product_id().clone())
            .collect()
    }

    /// Derive the default pricing inputs from current order state.
    pub fn default_inputs(&self, order: &dyn OrderContext) -> PricingInputs {
        PricingInputs {
            country: order.tax_country(),
            region: order.tax_region(),
            product_ids: self.product_ids(),
            discount_ids: order.discount_ids(),
        }
    }

    /// Recompute every item's amounts through the pricing service.
    ///
    /// Defaults are read from `order` at the moment of the call and
    /// resolved against `overrides` (present override fields win). Every
    /// item gets one request; requests run concurrently and the pass
    /// settles only after all of them have. Each refreshed item fires
    /// [`Event::ItemAmountsUpdated`]; a failed item keeps its prior
    /// amounts and stays silent. [`Event::AmountsUpdated`] fires exactly
    /// once per pass, after all item events.
    ///
    /// All pass bookkeeping lives in this call's locals; exclusive access
    /// serializes passes on one collection.
    pub async fn update_amounts(
        &mut self,
        order: &dyn OrderContext,
        overrides: PricingOverrides,
    ) -> UpdateOutcome {
        let inputs = overrides.merge(self.default_inputs(order));
        debug!(
            items = self.items.len(),
            country = %inputs.country,
            region = %inputs.region,
            "Dispatching pricing requests"
        );

        // Price all items in parallel
        let pricing = self.pricing.as_ref();
        let limit = self.request_timeout;
        let inputs = &inputs;
        let futures: Vec<_> = self
            .items
            .iter()
            .map(|item| {
                let id = item.id().clone();
                async move {
                    let result = fetch_amounts(item, pricing, inputs, limit).await;
                    (id, result)
                }
            })
            .collect();

        let results = futures_util::future::join_all(futures).await;

        // Apply settled responses item by item
        let mut outcome = UpdateOutcome::default();
        for (item, (id, result)) in self.items.iter_mut().zip(results) {
            let applied = result.and_then(|response| {
                let priced = response.decode(self.format.as_ref())?;
                let merged = merge_amounts(&item.amounts(), &priced, item.adjusting_manually())?;
                Ok((merged, response.adjustments))
            });

            match applied {
                Ok((merged, adjustments)) => {
                    item.set_amounts(merged);
                    item.set_adjustments(adjustments);
                    self.notifiers
                        .notify_all(Event::ItemAmountsUpdated { id: id.clone() });
                    outcome.updated.push(id);
                }
                Err(error) => {
                    warn!(
                        item = %id,
                        error = %error,
                        "Item refresh failed; amounts left unchanged"
                    );
                    outcome.failures.push(ItemFailure::new(id, error));
                }
            }
        }

        let (updated, failed) = (outcome.updated.len(), outcome.failures.len());
        info!(updated, failed, "Amount recalculation settled");
        self.notifiers
            .notify_all(Event::AmountsUpdated { updated, failed });

        outcome
    }
}

/// Request one item's amounts, bounding the wait when a timeout is set.
async fn fetch_amounts(
    item: &LineItem,
    pricing: &dyn PricingService,
    inputs: &PricingInputs,
    limit: Option<Duration>,
) -> Result<PricingResponse> {
    let request = PricingRequest::for_item(item, inputs);
    match limit {
        Some(limit) => match tokio::time::timeout(limit, pricing.price_item(&request)).await {
            Ok(result) => result,
            Err(_) => Err(PricingError::TimedOut { limit }.into()),
        },
        None => pricing.price_item(&request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::DecimalFormat;
    use crate::testkit::domain::{line_item, TestOrder};
    use crate::testkit::pricing::ScriptedPricing;

    fn collection() -> LineItemCollection {
        LineItemCollection::new(
            Arc::new(ScriptedPricing::new()),
            Arc::new(DecimalFormat::point()),
            Arc::new(NotifierRegistry::new()),
        )
    }

    #[test]
    fn push_get_and_remove_items() {
        let mut items = collection();
        assert!(items.is_empty());

        items.push(line_item("item-1", "product-1"));
        items.push(line_item("item-2", "product-2"));
        assert_eq!(items.len(), 2);

        let id = LineItemId::from("item-1");
        assert_eq!(items.get(&id).unwrap().product_id().as_str(), "product-1");

        items.get_mut(&id).unwrap().set_quantity(4);
        assert_eq!(items.get(&id).unwrap().quantity(), 4);

        let removed = items.remove(&id).unwrap();
        assert_eq!(removed.id(), &id);
        assert_eq!(items.len(), 1);
        assert!(items.remove(&id).is_none());
    }

    #[test]
    fn product_ids_follow_collection_order() {
        let mut items = collection();
        items.push(line_item("item-1", "product-b"));
        items.push(line_item("item-2", "product-a"));

        let ids: Vec<_> = items.product_ids();
        assert_eq!(ids, vec![ProductId::from("product-b"), ProductId::from("product-a")]);
    }

    #[test]
    fn default_inputs_reflect_order_state_and_items() {
        let mut items = collection();
        items.push(line_item("item-1", "product-1"));

        let order = TestOrder::new("US", "TN").with_discounts(&["discount-1"]);
        let inputs = items.default_inputs(&order);

        assert_eq!(inputs.country, "US");
        assert_eq!(inputs.region, "TN");
        assert_eq!(inputs.product_ids, vec![ProductId::from("product-1")]);
        assert_eq!(inputs.discount_ids.len(), 1);
    }
}
