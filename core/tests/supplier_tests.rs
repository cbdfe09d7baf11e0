//! Supplier directory tests

use std::sync::Arc;

use procurement_admin_core::error::AppError;
use procurement_admin_core::services::suppliers::{CreateSupplierInput, SupplierService};
use procurement_admin_core::store::MemStore;

fn service() -> SupplierService {
    SupplierService::new(Arc::new(MemStore::new()))
}

fn input(name: &str) -> CreateSupplierInput {
    CreateSupplierInput {
        name: name.to_string(),
        contact_email: None,
        phone: None,
        address: None,
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_created_supplier_is_active() {
        let supplier = service().create(input("Bureau Plus")).unwrap();
        assert!(supplier.active);
    }

    #[test]
    fn test_duplicate_name_rejected_case_insensitively() {
        let suppliers = service();
        suppliers.create(input("Bureau Plus")).unwrap();

        let result = suppliers.create(input("bureau plus"));
        assert!(matches!(result, Err(AppError::DuplicateEntry(_))));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut bad = input("Bureau Plus");
        bad.contact_email = Some("not-an-email".to_string());
        let result = service().create(bad);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let mut bad = input("Bureau Plus");
        bad.phone = Some("call me".to_string());
        let result = service().create(bad);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_listing_sorts_by_name_and_filters_active() {
        let suppliers = service();
        suppliers.create(input("Zeta Logistique")).unwrap();
        let closed = suppliers.create(input("Atelier Morel")).unwrap();
        suppliers.create(input("Bureau Plus")).unwrap();
        suppliers.deactivate(closed.id).unwrap();

        let all: Vec<String> = suppliers
            .list(false)
            .into_iter()
            .map(|supplier| supplier.name)
            .collect();
        assert_eq!(all, ["Atelier Morel", "Bureau Plus", "Zeta Logistique"]);

        let active = suppliers.list(true);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|supplier| supplier.active));
    }

    #[test]
    fn test_deactivation_is_idempotent() {
        let suppliers = service();
        let supplier = suppliers.create(input("Bureau Plus")).unwrap();

        suppliers.deactivate(supplier.id).unwrap();
        let again = suppliers.deactivate(supplier.id).unwrap();
        assert!(!again.active);
    }
}
