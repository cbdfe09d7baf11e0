//! Product catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A canonical catalog product
///
/// Immutable reference data during a matching session; manual entries are
/// linked against these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub sku: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub available_quantity: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            sku: None,
            brand: None,
            category: None,
            description: None,
            available_quantity: Decimal::ZERO,
            created_at: Utc::now(),
        }
    }
}
