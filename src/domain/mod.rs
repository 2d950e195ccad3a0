//! Order-editing domain logic.

mod adjustment;
mod ids;
mod inputs;
mod line_item;
mod money;
mod outcome;

// Core domain types
pub use adjustment::Adjustment;
pub use ids::{DiscountId, LineItemId, ProductId};
pub use inputs::{PricingInputs, PricingOverrides};
pub use line_item::{merge_amounts, ItemAmounts, LineItem, PricedAmounts};
pub use money::Amount;

// Pass outcomes
pub use outcome::{ItemFailure, UpdateOutcome};
