//! Procurement Admin Platform - Core Services
//!
//! Decision logic behind the purchase-order / warehouse administration
//! dashboard: catalog matching for manually entered products, reception and
//! outbound quantity reconciliation, delivery chain tracking, purchase order
//! assembly, and the supporting directories and preferences.
//!
//! Everything operates on an in-memory store; the surrounding UI shell owns
//! rendering, routing, and any persistence it chooses to add.

pub mod config;
pub mod error;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorDetail};
pub use store::MemStore;
