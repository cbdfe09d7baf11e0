//! Administration of manually entered products
//!
//! Entries come from free-text quote lines and wait for an administrator to
//! approve, reject, or link them to a canonical catalog record. Rejection is
//! a soft transition; nothing is ever deleted.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{is_valid_entry_transition, ManualEntry, ManualEntryStatus};
use shared::types::{PaginatedResponse, Pagination};
use shared::validation::{validate_positive_price, validate_required_name, validate_sku};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Service for the manual product administration pages
#[derive(Clone)]
pub struct ManualProductService {
    store: Arc<MemStore>,
}

/// Input for registering a manual entry from a quote line
#[derive(Debug, Deserialize)]
pub struct CreateManualEntryInput {
    pub quote_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub sku: Option<String>,
    pub description: Option<String>,
}

impl ManualProductService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Register a manual entry, pending reconciliation
    pub fn create(&self, input: CreateManualEntryInput) -> AppResult<ManualEntry> {
        validate_required_name(&input.name)
            .map_err(|message| AppError::validation("name", message))?;
        validate_positive_price(input.price)
            .map_err(|message| AppError::validation("price", message))?;
        if let Some(sku) = &input.sku {
            validate_sku(sku).map_err(|message| AppError::validation("sku", message))?;
        }

        let now = Utc::now();
        let entry = ManualEntry {
            id: Uuid::new_v4(),
            quote_id: input.quote_id,
            name: input.name.trim().to_string(),
            price: input.price,
            sku: input.sku,
            description: input.description,
            status: ManualEntryStatus::Pending,
            linked_catalog_item_id: None,
            created_at: now,
            updated_at: now,
        };

        self.store.manual_entries.insert(entry.id, entry.clone());
        tracing::info!(entry = %entry.id, quote = %entry.quote_id, "manual entry registered");
        Ok(entry)
    }

    pub fn get(&self, id: Uuid) -> AppResult<ManualEntry> {
        self.store
            .manual_entries
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Manual entry".to_string()))
    }

    /// List entries, newest first, optionally filtered by lifecycle status
    pub fn list(
        &self,
        status: Option<ManualEntryStatus>,
        pagination: &Pagination,
    ) -> PaginatedResponse<ManualEntry> {
        let mut entries = match status {
            Some(status) => self
                .store
                .manual_entries
                .filter(|entry| entry.status == status),
            None => self.store.manual_entries.all(),
        };
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        PaginatedResponse::paginate(entries, pagination)
    }

    /// Approve a pending entry
    pub fn approve(&self, id: Uuid) -> AppResult<ManualEntry> {
        self.transition(id, ManualEntryStatus::Approved, None)
    }

    /// Reject an entry (soft transition, entry is kept)
    pub fn reject(&self, id: Uuid) -> AppResult<ManualEntry> {
        self.transition(id, ManualEntryStatus::Rejected, None)
    }

    /// Link an entry to an existing catalog record
    ///
    /// Future orders then reference the canonical record instead of the
    /// free-text line.
    pub fn link(&self, id: Uuid, catalog_item_id: Uuid) -> AppResult<ManualEntry> {
        if !self.store.catalog_items.contains(&catalog_item_id) {
            return Err(AppError::NotFound("Catalog item".to_string()));
        }
        self.transition(id, ManualEntryStatus::Linked, Some(catalog_item_id))
    }

    fn transition(
        &self,
        id: Uuid,
        to: ManualEntryStatus,
        linked_catalog_item_id: Option<Uuid>,
    ) -> AppResult<ManualEntry> {
        let entry = self.get(id)?;
        if !is_valid_entry_transition(entry.status, to) {
            return Err(AppError::InvalidStateTransition(format!(
                "Manual entry cannot move from {} to {}",
                entry.status, to
            )));
        }

        let updated = self
            .store
            .manual_entries
            .update(&id, |entry| {
                entry.status = to;
                if linked_catalog_item_id.is_some() {
                    entry.linked_catalog_item_id = linked_catalog_item_id;
                }
                entry.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Manual entry".to_string()))?;

        tracing::info!(entry = %id, status = %updated.status, "manual entry transitioned");
        Ok(updated)
    }
}
