//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`pricing`] - Mock [`PricingService`](crate::port::PricingService)
//!   implementation: `ScriptedPricing` with per-product scripts.
//! - [`notifier`] - Event-recording [`Notifier`](crate::port::Notifier).
//! - [`domain`] - Builders for domain primitives: items, orders, responses.

pub mod domain;
pub mod notifier;
pub mod pricing;
