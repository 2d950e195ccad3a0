//! Recompute pass result types.
//!
//! This module provides types for representing the outcome of one amount
//! recalculation pass over a collection:
//!
//! - [`UpdateOutcome`] - Overall outcome of the pass
//! - [`ItemFailure`] - One item whose refresh failed
//!
//! # Pass Outcomes
//!
//! A pass always runs to completion; per-item results fall out three ways:
//! - **Success**: every item refreshed from the pricing service
//! - **Partial**: some items refreshed, the rest kept their prior amounts
//! - **Failed**: no item refreshed
//!
//! # Examples
//!
//! Handling a partially failed pass:
//!
//! ```
//! use reckoner::domain::{ItemFailure, LineItemId, UpdateOutcome};
//! use reckoner::error::{Error, PricingError};
//!
//! let outcome = UpdateOutcome {
//!     updated: vec![LineItemId::from("item-1")],
//!     failures: vec![ItemFailure::new(
//!         LineItemId::from("item-2"),
//!         Error::from(PricingError::Unavailable {
//!             reason: "connection refused".to_string(),
//!         }),
//!     )],
//! };
//!
//! assert!(outcome.is_partial());
//! assert_eq!(outcome.failures[0].id.as_str(), "item-2");
//! ```

use crate::error::Error;

use super::ids::LineItemId;

/// One item whose refresh failed during a recompute pass.
///
/// The item kept its prior amounts and no item-level notification fired.
#[derive(Debug)]
pub struct ItemFailure {
    /// Item whose pricing request or merge failed.
    pub id: LineItemId,
    /// What went wrong.
    pub error: Error,
}

impl ItemFailure {
    /// Creates a new failure record.
    pub fn new(id: LineItemId, error: Error) -> Self {
        Self { id, error }
    }
}

/// Result of one recompute pass over a line-item collection.
///
/// The pass settles only after every item's request has, successes and
/// failures alike.
#[derive(Debug, Default)]
pub struct UpdateOutcome {
    /// Items refreshed from the pricing service, in collection order.
    pub updated: Vec<LineItemId>,
    /// Items left unchanged because their request or merge failed.
    pub failures: Vec<ItemFailure>,
}

impl UpdateOutcome {
    /// Returns true if every item refreshed (an empty pass counts).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true if some items refreshed and some failed.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.updated.is_empty() && !self.failures.is_empty()
    }

    /// Returns true if items failed and none refreshed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.updated.is_empty() && !self.failures.is_empty()
    }
}
