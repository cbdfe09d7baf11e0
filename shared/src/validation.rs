//! Validation utilities for the Procurement Admin Platform
//!
//! Input boundary checks shared by the core services and the dashboard UI.

use rust_decimal::Decimal;

// ============================================================================
// Product & Order Validations
// ============================================================================

/// Validate a required display name (non-blank after trimming)
pub fn validate_required_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required");
    }
    if name.len() > 200 {
        return Err("Name must be at most 200 characters");
    }
    Ok(())
}

/// Validate a price entered on a quote or order line
pub fn validate_positive_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Price must be positive");
    }
    Ok(())
}

/// Validate an ordered/requested quantity
pub fn validate_positive_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a SKU format (3-32 characters, alphanumeric plus dashes)
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.len() < 3 {
        return Err("SKU must be at least 3 characters");
    }
    if sku.len() > 32 {
        return Err("SKU must be at most 32 characters");
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err("SKU must be alphanumeric with optional dashes");
    }
    Ok(())
}

// ============================================================================
// Warehouse Validations
// ============================================================================

/// Clamp a received quantity to the valid range for its line
///
/// Free numeric input from the reception form can go negative or exceed the
/// expected quantity; the reconciler assumes callers clamped first.
pub fn clamp_received_quantity(expected: Decimal, received: Decimal) -> Decimal {
    received.clamp(Decimal::ZERO, expected)
}

/// Validate an expected quantity on a reception line
pub fn validate_expected_quantity(expected: Decimal) -> Result<(), &'static str> {
    if expected < Decimal::ZERO {
        return Err("Expected quantity cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a contact phone number (7-15 digits, separators allowed)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 7 || digits.len() > 15 {
        return Err("Invalid phone number");
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')' | '.'))
    {
        return Err("Phone number contains invalid characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ========================================================================
    // Product & Order Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_required_name() {
        assert!(validate_required_name("Dell XPS 13 Laptop").is_ok());
        assert!(validate_required_name("").is_err());
        assert!(validate_required_name("   ").is_err());
        assert!(validate_required_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price(dec("1299.99")).is_ok());
        assert!(validate_positive_price(Decimal::ZERO).is_err());
        assert!(validate_positive_price(dec("-5")).is_err());
    }

    #[test]
    fn test_validate_positive_quantity() {
        assert!(validate_positive_quantity(dec("0.5")).is_ok());
        assert!(validate_positive_quantity(Decimal::ZERO).is_err());
        assert!(validate_positive_quantity(dec("-1")).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("XPS-13-9340").is_ok());
        assert!(validate_sku("ABC").is_ok());
        assert!(validate_sku("AB").is_err()); // Too short
        assert!(validate_sku(&"A".repeat(33)).is_err()); // Too long
        assert!(validate_sku("SKU_123").is_err()); // Underscore
    }

    // ========================================================================
    // Warehouse Validation Tests
    // ========================================================================

    #[test]
    fn test_clamp_received_quantity_in_range() {
        assert_eq!(clamp_received_quantity(dec("5"), dec("3")), dec("3"));
        assert_eq!(clamp_received_quantity(dec("5"), dec("5")), dec("5"));
    }

    #[test]
    fn test_clamp_received_quantity_out_of_range() {
        assert_eq!(clamp_received_quantity(dec("5"), dec("8")), dec("5"));
        assert_eq!(clamp_received_quantity(dec("5"), dec("-2")), Decimal::ZERO);
    }

    #[test]
    fn test_validate_expected_quantity() {
        assert!(validate_expected_quantity(Decimal::ZERO).is_ok());
        assert!(validate_expected_quantity(dec("10")).is_ok());
        assert!(validate_expected_quantity(dec("-1")).is_err());
    }

    // ========================================================================
    // General Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("achats@fournisseur.fr").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+33 1 23 45 67 89").is_ok());
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("(555) 123-4567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("abcdefghij").is_err());
    }
}
