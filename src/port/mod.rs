//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the pricing backend, locale formatting, the surrounding
//! order editor, notification sinks).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Collection         │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └───────────┬─────────────┘              │
//!     │                          │                            │
//!     ▼                          ▼                            ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Pricing │            │   Format    │              │ Notifier  │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`PricingService`] - External amount computation, one request per item
//! - [`NumberFormat`] - Locale-aware parsing and rendering of amounts
//! - [`OrderContext`] - Read access to order-level state (tax, discounts)
//! - [`Notifier`] - Event notifications (views, logging, etc.)

mod format;
mod notifier;
mod order;
mod pricing;

// Pricing port
pub use pricing::{PricingRequest, PricingResponse, PricingService};

// Number formatting port
pub use format::{DecimalFormat, NumberFormat};

// Order state port
pub use order::OrderContext;

// Notifier port
pub use notifier::{Event, LogNotifier, Notifier, NotifierRegistry, NullNotifier};
