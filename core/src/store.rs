//! In-memory data store
//!
//! The dashboard runs entirely on in-memory data; there is no database or
//! network layer. Each collection hands out clones so callers work on
//! snapshots and replace records atomically, which keeps every service
//! operation safe to race without coordination.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{
    CatalogItem, DeliveryChain, ManualEntry, NotificationPreferences, OutboundShipment,
    PurchaseOrder, ReceptionRecord, Supplier,
};
use shared::types::Address;

/// A keyed collection guarded by a read/write lock
///
/// Lock poisoning is recovered by taking the inner value: records are always
/// replaced whole, so a panicked writer cannot leave a half-updated record.
pub struct Collection<T> {
    items: RwLock<HashMap<Uuid, T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn insert(&self, id: Uuid, value: T) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, value);
    }

    /// Replace a record in place, returning the updated snapshot
    pub fn update<F>(&self, id: &Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let value = items.get_mut(id)?;
        f(value);
        Some(value.clone())
    }

    pub fn all(&self) -> Vec<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|value| predicate(value))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All dashboard data, one collection per entity
#[derive(Default)]
pub struct MemStore {
    pub catalog_items: Collection<CatalogItem>,
    pub manual_entries: Collection<ManualEntry>,
    pub suppliers: Collection<Supplier>,
    pub delivery_chains: Collection<DeliveryChain>,
    pub receptions: Collection<ReceptionRecord>,
    pub outbound_shipments: Collection<OutboundShipment>,
    pub purchase_orders: Collection<PurchaseOrder>,
    /// Keyed by user id
    pub notification_preferences: Collection<NotificationPreferences>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo catalog and supplier directory
    pub fn with_mock_data() -> Self {
        let store = Self::new();

        for item in mock_catalog() {
            store.catalog_items.insert(item.id, item);
        }
        for supplier in mock_suppliers() {
            store.suppliers.insert(supplier.id, supplier);
        }

        store
    }
}

fn mock_catalog() -> Vec<CatalogItem> {
    let mut laptop = CatalogItem::new("Dell XPS 13 Laptop", Decimal::new(129_999, 2));
    laptop.sku = Some("XPS-13-9340".to_string());
    laptop.brand = Some("Dell".to_string());
    laptop.category = Some("IT Equipment".to_string());
    laptop.description = Some("13-inch ultrabook, 16GB RAM, 512GB SSD".to_string());
    laptop.available_quantity = Decimal::from(12);

    let mut probook = CatalogItem::new("HP ProBook 450 G10", Decimal::new(89_900, 2));
    probook.sku = Some("PB450-G10".to_string());
    probook.brand = Some("HP".to_string());
    probook.category = Some("IT Equipment".to_string());
    probook.available_quantity = Decimal::from(8);

    let mut drill = CatalogItem::new("Bosch GSB 18V Drill", Decimal::new(18_950, 2));
    drill.sku = Some("GSB-18V-55".to_string());
    drill.brand = Some("Bosch".to_string());
    drill.category = Some("Power Tools".to_string());
    drill.description = Some("Cordless combi drill, two batteries".to_string());
    drill.available_quantity = Decimal::from(30);

    let mut helmet = CatalogItem::new("Site Safety Helmet", Decimal::new(2_450, 2));
    helmet.sku = Some("HEL-STD-01".to_string());
    helmet.category = Some("Safety".to_string());
    helmet.available_quantity = Decimal::from(200);

    vec![laptop, probook, drill, helmet]
}

fn mock_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: Uuid::new_v4(),
            name: "TechDirect Distribution".to_string(),
            contact_email: Some("sales@techdirect.example".to_string()),
            phone: Some("+33 1 44 55 66 77".to_string()),
            address: Some(Address::new("12 rue de la Logistique", "Paris")),
            active: true,
            created_at: Utc::now(),
        },
        Supplier {
            id: Uuid::new_v4(),
            name: "BTP Fournitures".to_string(),
            contact_email: Some("contact@btpfournitures.example".to_string()),
            phone: Some("+33 4 78 12 34 56".to_string()),
            address: Some(Address::new("8 avenue des Chantiers", "Lyon")),
            active: true,
            created_at: Utc::now(),
        },
    ]
}
