//! Business logic services for the Procurement Admin Platform

pub mod deliveries;
pub mod manual_products;
pub mod matching;
pub mod notifications;
pub mod outbound;
pub mod purchase_orders;
pub mod receptions;
pub mod suppliers;

pub use deliveries::DeliveryService;
pub use manual_products::ManualProductService;
pub use matching::MatchingService;
pub use notifications::NotificationPreferenceService;
pub use outbound::OutboundService;
pub use purchase_orders::PurchaseOrderService;
pub use receptions::ReceptionService;
pub use suppliers::SupplierService;
