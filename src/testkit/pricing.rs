//! Mock [`PricingService`] implementations for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ProductId;
use crate::error::{PricingError, Result};
use crate::port::{PricingRequest, PricingResponse, PricingService};

/// What a [`ScriptedPricing`] does when asked to price a product.
#[derive(Debug, Clone)]
pub enum Script {
    /// Respond immediately.
    Respond(PricingResponse),
    /// Respond after a delay (settle-order tests).
    RespondAfter(Duration, PricingResponse),
    /// Fail with `PricingError::Unavailable`.
    Fail(String),
    /// Never settle.
    Hang,
}

/// A mock pricing service with per-product scripted outcomes.
///
/// Every request is recorded for later assertions. A product without a
/// script fails with `PricingError::Unavailable`.
pub struct ScriptedPricing {
    scripts: HashMap<ProductId, Script>,
    requests: Arc<Mutex<Vec<PricingRequest>>>,
}

impl ScriptedPricing {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the outcome for one product.
    #[must_use]
    pub fn with_script(mut self, product_id: impl Into<ProductId>, script: Script) -> Self {
        self.scripts.insert(product_id.into(), script);
        self
    }

    /// Shorthand for an immediate response.
    #[must_use]
    pub fn with_response(
        self,
        product_id: impl Into<ProductId>,
        response: PricingResponse,
    ) -> Self {
        self.with_script(product_id, Script::Respond(response))
    }

    /// Snapshot of every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<PricingRequest> {
        self.requests.lock().expect("lock recorded requests").clone()
    }

    /// How many requests were seen.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("lock recorded requests").len()
    }
}

impl Default for ScriptedPricing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingService for ScriptedPricing {
    async fn price_item(&self, request: &PricingRequest) -> Result<PricingResponse> {
        self.requests
            .lock()
            .expect("lock recorded requests")
            .push(request.clone());

        match self.scripts.get(&request.product_id).cloned() {
            Some(Script::Respond(response)) => Ok(response),
            Some(Script::RespondAfter(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            Some(Script::Fail(reason)) => Err(PricingError::Unavailable { reason }.into()),
            Some(Script::Hang) => std::future::pending().await,
            None => Err(PricingError::Unavailable {
                reason: format!("no script for product {}", request.product_id),
            }
            .into()),
        }
    }
}
