//! End-to-end walkthrough of the dashboard services
//!
//! Registers a manual quote line, searches the catalog for matches, builds a
//! purchase order, tracks the delivery chain, and records the warehouse
//! reception. Run with:
//!
//! ```sh
//! RUST_LOG=info cargo run --example dashboard_flow
//! ```

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use procurement_admin_core::config::Config;
use procurement_admin_core::services::manual_products::CreateManualEntryInput;
use procurement_admin_core::services::purchase_orders::OrderLineInput;
use procurement_admin_core::services::receptions::{ReceivedItemInput, RecordReceptionInput};
use procurement_admin_core::services::{
    DeliveryService, ManualProductService, MatchingService, PurchaseOrderService, ReceptionService,
    SupplierService,
};
use procurement_admin_core::store::MemStore;
use shared::models::{ItemCondition, StopDraft, StopLocationType};
use shared::types::Address;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::load()?;
    let store = Arc::new(MemStore::with_mock_data());

    let manual = ManualProductService::new(store.clone());
    let matching = MatchingService::new(store.clone(), config.matching.clone());
    let suppliers = SupplierService::new(store.clone());
    let orders = PurchaseOrderService::new(store.clone());
    let deliveries = DeliveryService::new(store.clone());
    let receptions = ReceptionService::new(store.clone());

    // A quote arrived with a free-text line the catalog might already cover
    let entry = manual.create(CreateManualEntryInput {
        quote_id: Uuid::new_v4(),
        name: "Dell XPS 13 ultrabook".to_string(),
        price: dec("1250.00"),
        sku: None,
        description: Some("13-inch laptop, 16GB RAM".to_string()),
    })?;

    let candidates = matching.search_candidates(entry.id, "laptop")?;
    println!("Catalog candidates for {:?}:", entry.name);
    for candidate in &candidates {
        let label = candidate
            .label
            .map(|label| label.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>3}  {:<14} {}", candidate.score, label, candidate.item.name);
    }

    // The operator confirms the best suggestion
    if let Some(best) = candidates.first() {
        manual.link(entry.id, best.item.id)?;
    }

    // Order the linked item from the first active supplier
    let supplier = suppliers.list(true).into_iter().next().expect("seeded supplier");
    let catalog_item = store.catalog_items.all().into_iter().next().expect("seeded catalog");
    let order = orders.create_draft(
        supplier.id,
        vec![OrderLineInput::Catalog {
            catalog_item_id: catalog_item.id,
            quantity: dec("4"),
            unit_price: Some(dec("1250.00")),
        }],
    )?;
    let order = orders.submit(order.id)?;
    println!("Order {} submitted, total {}", order.id, order.total);

    // The shipment routes through the warehouse before the project site
    let chain = deliveries.create_chain(
        catalog_item.id,
        dec("4"),
        vec![
            StopDraft {
                location_type: StopLocationType::Supplier,
                address: Address::new("12 rue de la Logistique", "Paris"),
            },
            StopDraft {
                location_type: StopLocationType::Warehouse,
                address: Address::new("3 chemin des Entrepots", "Creteil"),
            },
            StopDraft {
                location_type: StopLocationType::ProjectSite,
                address: Address::new("27 avenue du Chantier", "Versailles"),
            },
        ],
    )?;
    deliveries.advance(chain.id)?;
    let chain = deliveries.advance(chain.id)?;
    println!("Delivery reached stop {}, status {:?}", chain.current_stop_index, chain.overall_status);

    // Only three of the four units arrive intact
    let record = receptions.record(RecordReceptionInput {
        delivery_id: chain.id,
        items: vec![ReceivedItemInput {
            variant_id: catalog_item.id,
            quantity_expected: dec("4"),
            quantity_received: dec("3"),
            condition: ItemCondition::Good,
        }],
    })?;
    println!("Reception recorded as {}", record.status);

    Ok(())
}
