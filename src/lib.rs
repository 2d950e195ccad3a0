//! Reckoner - order line-item amount recalculation.
//!
//! This crate keeps a collection of order line items in sync with an
//! external pricing service: when pricing inputs change (tax jurisdiction,
//! applied discounts, manual overrides), a single recompute pass prices
//! every item concurrently, merges the settled results into item state,
//! and notifies observers.
//!
//! # Architecture
//!
//! The crate uses hexagonal layering:
//!
//! - **`domain`** - Pure data and policy: items, amounts, the merge rules
//! - **`port`** - Traits for external collaborators: pricing service,
//!   number formatting, order state, notification sinks
//! - **`collection`** - The application core: fan-out, apply, notify
//!
//! # Modules
//!
//! - [`domain`] - Order-editing domain types: ids, amounts, line items,
//!   input resolution, pass outcomes
//! - [`port`] - Trait definitions for external collaborators
//! - [`collection`] - The line-item collection and its recompute pass
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose the mock pricing service, recording notifier, and
//!   domain builders to integration tests
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use reckoner::collection::LineItemCollection;
//! use reckoner::domain::{LineItem, PricingOverrides};
//! use reckoner::port::{DecimalFormat, LogNotifier, NotifierRegistry};
//! use rust_decimal::Decimal;
//! # use async_trait::async_trait;
//! # use reckoner::port::{PricingRequest, PricingResponse, PricingService};
//! # struct StubPricing;
//! # #[async_trait]
//! # impl PricingService for StubPricing {
//! #     async fn price_item(
//! #         &self,
//! #         _request: &PricingRequest,
//! #     ) -> reckoner::error::Result<PricingResponse> {
//! #         Ok(PricingResponse::default())
//! #     }
//! # }
//!
//! let mut notifiers = NotifierRegistry::new();
//! notifiers.register(Box::new(LogNotifier));
//!
//! let mut items = LineItemCollection::new(
//!     Arc::new(StubPricing),
//!     Arc::new(DecimalFormat::point()),
//!     Arc::new(notifiers),
//! );
//! items.push(LineItem::new("item-1", "product-9", 2, Decimal::new(1999, 2)));
//!
//! let overrides = PricingOverrides::new().country("US").region("CA");
//! // items.update_amounts(&order, overrides).await drives the recompute.
//! # let _ = overrides;
//! assert_eq!(items.len(), 1);
//! ```

pub mod collection;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
