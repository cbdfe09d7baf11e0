//! Supplier directory service

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use shared::models::Supplier;
use shared::types::Address;
use shared::validation::{validate_email, validate_phone, validate_required_name};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Service behind the company/supplier detail pages
#[derive(Clone)]
pub struct SupplierService {
    store: Arc<MemStore>,
}

/// Input for registering a supplier
#[derive(Debug, Deserialize)]
pub struct CreateSupplierInput {
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

impl SupplierService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        validate_required_name(&input.name)
            .map_err(|message| AppError::validation("name", message))?;
        if let Some(email) = &input.contact_email {
            validate_email(email).map_err(|message| AppError::validation("contact_email", message))?;
        }
        if let Some(phone) = &input.phone {
            validate_phone(phone).map_err(|message| AppError::validation("phone", message))?;
        }

        let name = input.name.trim().to_string();
        let duplicate = self
            .store
            .suppliers
            .filter(|supplier| supplier.name.eq_ignore_ascii_case(&name));
        if !duplicate.is_empty() {
            return Err(AppError::DuplicateEntry("supplier name".to_string()));
        }

        let supplier = Supplier {
            id: Uuid::new_v4(),
            name,
            contact_email: input.contact_email,
            phone: input.phone,
            address: input.address,
            active: true,
            created_at: Utc::now(),
        };

        self.store.suppliers.insert(supplier.id, supplier.clone());
        tracing::info!(supplier = %supplier.id, name = %supplier.name, "supplier registered");
        Ok(supplier)
    }

    pub fn get(&self, id: Uuid) -> AppResult<Supplier> {
        self.store
            .suppliers
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Supplier".to_string()))
    }

    /// Directory listing in name order
    pub fn list(&self, active_only: bool) -> Vec<Supplier> {
        let mut suppliers = if active_only {
            self.store.suppliers.filter(|supplier| supplier.active)
        } else {
            self.store.suppliers.all()
        };
        suppliers.sort_by(|a, b| a.name.cmp(&b.name));
        suppliers
    }

    /// Soft-deactivate a supplier; idempotent
    pub fn deactivate(&self, id: Uuid) -> AppResult<Supplier> {
        let updated = self
            .store
            .suppliers
            .update(&id, |supplier| {
                supplier.active = false;
            })
            .ok_or_else(|| AppError::NotFound("Supplier".to_string()))?;

        tracing::info!(supplier = %id, "supplier deactivated");
        Ok(updated)
    }
}
