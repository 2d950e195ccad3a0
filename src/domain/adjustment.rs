//! Opaque adjustment records attached to line items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An adjustment record (fee, credit, tax line) attached to a line item.
///
/// The payload is carried verbatim from the pricing service response and
/// handed back out unchanged; this core never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Adjustment(Value);

impl Adjustment {
    /// Wrap a raw adjustment payload.
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Borrow the raw payload.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    /// Consume the record, returning the raw payload.
    pub fn into_payload(self) -> Value {
        self.0
    }
}

impl From<Value> for Adjustment {
    fn from(payload: Value) -> Self {
        Self::new(payload)
    }
}
