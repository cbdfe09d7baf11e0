//! WebAssembly module for the Procurement Admin Platform
//!
//! Provides client-side computation for:
//! - Product similarity scoring and match labels
//! - Reception completeness checks
//! - Quantity clamping and line totals
//! - Offline data validation

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

/// Score a manual product against a catalog candidate (0..=100)
#[wasm_bindgen]
pub fn score_product_match(
    manual_name: &str,
    manual_price: f64,
    manual_description: Option<String>,
    candidate_name: &str,
    candidate_price: f64,
    candidate_description: Option<String>,
) -> i32 {
    score_fields(
        manual_name,
        to_decimal(manual_price),
        manual_description.as_deref(),
        candidate_name,
        to_decimal(candidate_price),
        candidate_description.as_deref(),
        default_price_tolerance(),
    )
}

/// Presentation label for a match score ("High Match", "Possible Match", "")
#[wasm_bindgen]
pub fn match_label_for_score(score: i32) -> String {
    match match_label(score, 50, 20) {
        Some(label) => format!("{}", label),
        None => String::new(),
    }
}

/// Derive the completeness status of a reception batch from JSON lines
#[wasm_bindgen]
pub fn reception_status_from_json(items_json: &str) -> Result<String, JsValue> {
    let items: Vec<ReceivedItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))?;

    match derive_reception_status(&items) {
        Some(status) => Ok(format!("{}", status)),
        None => Err(JsValue::from_str("Reception batch has no items")),
    }
}

/// Clamp a received quantity to [0, expected]
#[wasm_bindgen]
pub fn clamp_received(expected: f64, received: f64) -> f64 {
    let clamped = clamp_received_quantity(to_decimal(expected), to_decimal(received));
    clamped.to_string().parse().unwrap_or(0.0)
}

/// Line total for an order or outbound line
#[wasm_bindgen]
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    if quantity <= 0.0 || unit_price < 0.0 {
        return 0.0;
    }
    quantity * unit_price
}

/// Validate a manual product name for inline form feedback
#[wasm_bindgen]
pub fn is_valid_product_name(name: &str) -> bool {
    validate_required_name(name).is_ok()
}

/// Validate a price entered on a quote line
#[wasm_bindgen]
pub fn is_valid_price(price: f64) -> bool {
    price > 0.0 && validate_positive_price(to_decimal(price)).is_ok()
}
