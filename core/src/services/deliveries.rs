//! Delivery chain service
//!
//! Authoring and progression of multi-stop delivery chains. Progression goes
//! through the chain's own state machine; callers never touch the stop index
//! directly.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{ChainStatus, DeliveryChain, StopDraft};
use shared::validation::validate_positive_quantity;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Service behind the delivery tracking screens
#[derive(Clone)]
pub struct DeliveryService {
    store: Arc<MemStore>,
}

impl DeliveryService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Author a chain from ordered stop drafts
    ///
    /// The final stop becomes the non-intermediate destination regardless of
    /// draft flags. A chain with no stops is rejected.
    pub fn create_chain(
        &self,
        product_id: Uuid,
        quantity: Decimal,
        stops: Vec<StopDraft>,
    ) -> AppResult<DeliveryChain> {
        validate_positive_quantity(quantity)
            .map_err(|message| AppError::validation("quantity", message))?;

        let chain = DeliveryChain::from_drafts(product_id, quantity, stops)
            .map_err(|message| AppError::InvalidChain(message.to_string()))?;

        self.store.delivery_chains.insert(chain.id, chain.clone());
        tracing::info!(
            chain = %chain.id,
            product = %product_id,
            stops = chain.stops.len(),
            "delivery chain created"
        );
        Ok(chain)
    }

    /// Mark the current stop delivered and move the shipment forward
    ///
    /// Advancing a completed chain is a no-op and returns the terminal state
    /// unchanged.
    pub fn advance(&self, chain_id: Uuid) -> AppResult<DeliveryChain> {
        let updated = self
            .store
            .delivery_chains
            .update(&chain_id, |chain| {
                chain.advance();
            })
            .ok_or_else(|| AppError::NotFound("Delivery chain".to_string()))?;

        if updated.overall_status == ChainStatus::Completed {
            tracing::info!(chain = %chain_id, "delivery chain completed");
        }
        Ok(updated)
    }

    /// Flag a stop as delayed and recompute the chain status
    pub fn mark_stop_delayed(&self, chain_id: Uuid, stop_index: usize) -> AppResult<DeliveryChain> {
        let chain = self.get(chain_id)?;
        if stop_index >= chain.stops.len() {
            return Err(AppError::validation("stop_index", "Stop index out of range"));
        }

        let mut next = chain;
        next.mark_stop_delayed(stop_index)
            .map_err(|message| AppError::InvalidStateTransition(message.to_string()))?;

        let updated = self
            .store
            .delivery_chains
            .update(&chain_id, |chain| *chain = next.clone())
            .ok_or_else(|| AppError::NotFound("Delivery chain".to_string()))?;

        tracing::warn!(chain = %chain_id, stop = stop_index, "delivery stop delayed");
        Ok(updated)
    }

    pub fn get(&self, id: Uuid) -> AppResult<DeliveryChain> {
        self.store
            .delivery_chains
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Delivery chain".to_string()))
    }

    /// Chains moving one product, newest first
    pub fn list_for_product(&self, product_id: Uuid) -> Vec<DeliveryChain> {
        let mut chains = self
            .store
            .delivery_chains
            .filter(|chain| chain.product_id == product_id);
        chains.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        chains
    }

    pub fn list(&self) -> Vec<DeliveryChain> {
        let mut chains = self.store.delivery_chains.all();
        chains.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        chains
    }
}
