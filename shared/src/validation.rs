//! Validation helpers for the Footwear Order Management Platform
//!
//! All quantity/price enforcement lives here and in the service layer that
//! calls these helpers. The pricing engine itself trusts its inputs.

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate a product unit price (Toman, per pair)
pub fn validate_price(price: i64) -> Result<(), &'static str> {
    if price < 0 {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a product name
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Product name cannot be empty");
    }
    if trimmed.chars().count() > 100 {
        return Err("Product name must be at most 100 characters");
    }
    Ok(())
}

// ============================================================================
// Order Validations
// ============================================================================

/// Validate a line item's quantity fields at the data-entry boundary.
///
/// Plain items need `quantity >= 1`. Carton items need `carton_count >= 1`
/// and `pairs_per_carton >= 1`; zero-valued carton fields are rejected for
/// new entries even though existing rows price to zero.
pub fn validate_order_item(
    quantity: i64,
    is_carton: bool,
    carton_count: i64,
    pairs_per_carton: i64,
) -> Result<(), &'static str> {
    if is_carton {
        if carton_count < 1 {
            return Err("Carton count must be at least 1");
        }
        if pairs_per_carton < 1 {
            return Err("Pairs per carton must be at least 1");
        }
    } else if quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    Ok(())
}

// ============================================================================
// Customer Validations
// ============================================================================

/// Validate a customer name
pub fn validate_customer_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Customer name cannot be empty");
    }
    if trimmed.chars().count() > 100 {
        return Err("Customer name must be at most 100 characters");
    }
    Ok(())
}

/// Validate an Iranian phone number format
/// Accepts: 09123456789, 0912-345-6789, +989123456789, 00989123456789
pub fn validate_iranian_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Domestic mobile: 11 digits starting with 09
    if digits.len() == 11 && digits.starts_with("09") {
        return Ok(());
    }
    // Without the leading zero: 10 digits starting with 9
    if digits.len() == 10 && digits.starts_with('9') {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 98
    if digits.len() == 12 && digits.starts_with("98") {
        return Ok(());
    }
    // International format with 00 prefix: 14 digits starting with 0098
    if digits.len() == 14 && digits.starts_with("0098") {
        return Ok(());
    }

    Err("Invalid Iranian phone number format")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Catalog Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_price_valid() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(100_000).is_ok());
    }

    #[test]
    fn test_validate_price_negative() {
        assert!(validate_price(-1).is_err());
        assert!(validate_price(-100_000).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Classic leather boot").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"x".repeat(101)).is_err());
    }

    // ========================================================================
    // Order Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_order_item_plain() {
        assert!(validate_order_item(1, false, 0, 0).is_ok());
        assert!(validate_order_item(25, false, 0, 0).is_ok());
    }

    #[test]
    fn test_validate_order_item_plain_invalid_quantity() {
        assert!(validate_order_item(0, false, 0, 0).is_err());
        assert!(validate_order_item(-3, false, 0, 0).is_err());
    }

    #[test]
    fn test_validate_order_item_carton() {
        assert!(validate_order_item(1, true, 4, 12).is_ok());
        assert!(validate_order_item(0, true, 1, 1).is_ok());
    }

    #[test]
    fn test_validate_order_item_carton_invalid_fields() {
        assert!(validate_order_item(1, true, 0, 12).is_err());
        assert!(validate_order_item(1, true, 4, 0).is_err());
        assert!(validate_order_item(1, true, -1, 12).is_err());
        assert!(validate_order_item(1, true, 4, -12).is_err());
    }

    #[test]
    fn test_carton_fields_ignored_for_plain_items() {
        // A plain item with zeroed carton fields is fine
        assert!(validate_order_item(2, false, -5, -5).is_ok());
    }

    // ========================================================================
    // Customer Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Hossein Karimi").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("  ").is_err());
        assert!(validate_customer_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_iranian_phone_valid() {
        // Standard Iranian mobile
        assert!(validate_iranian_phone("09123456789").is_ok());
        // With dashes
        assert!(validate_iranian_phone("0912-345-6789").is_ok());
        // Without leading zero
        assert!(validate_iranian_phone("9123456789").is_ok());
        // International format
        assert!(validate_iranian_phone("+989123456789").is_ok());
        assert!(validate_iranian_phone("989123456789").is_ok());
        assert!(validate_iranian_phone("00989123456789").is_ok());
    }

    #[test]
    fn test_validate_iranian_phone_invalid() {
        assert!(validate_iranian_phone("12345").is_err());
        assert!(validate_iranian_phone("08123456789").is_err());
        assert!(validate_iranian_phone("091234567890123").is_err());
        assert!(validate_iranian_phone("abcdefghijk").is_err());
    }
}
