//! # Validation Module
//!
//! Order precondition checks for FoodDash.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI form (whatever the binding is)                            │
//! │  ├── Immediate feedback while typing                                   │
//! │  └── Advisory only - never trusted                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before OrderSubmitter enters Submitting)        │
//! │  ├── Delivery name / phone / address non-empty after trimming          │
//! │  └── Cart non-empty                                                     │
//! │                                                                         │
//! │  A failure here is reported through the Notifier and leaves every      │
//! │  piece of state - cart, form, submit affordance - exactly as it was.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rules are deliberately exactly "non-empty after trim": the hosted
//! backend performs no further order validation, and inventing stricter
//! format rules here would reject orders the storefront accepts today.

use crate::cart::Cart;
use crate::error::{ValidationError, ValidationResult};
use crate::types::DeliveryDetails;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the customer name. Returns the trimmed value.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    require_non_empty("name", name)
}

/// Validates the contact phone. Returns the trimmed value.
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    require_non_empty("phone", phone)
}

/// Validates the delivery address. Returns the trimmed value.
pub fn validate_address(address: &str) -> ValidationResult<String> {
    require_non_empty("address", address)
}

fn require_non_empty(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a full set of delivery details.
///
/// Returns a trimmed copy on success; the first missing field fails the
/// whole set (name, then phone, then address).
///
/// ## Example
/// ```rust
/// use fooddash_core::types::DeliveryDetails;
/// use fooddash_core::validation::validate_delivery_details;
///
/// let details = DeliveryDetails {
///     name: "  Asha  ".to_string(),
///     phone: "9812897289".to_string(),
///     address: "42 MG Road".to_string(),
/// };
/// let trimmed = validate_delivery_details(&details).unwrap();
/// assert_eq!(trimmed.name, "Asha");
/// ```
pub fn validate_delivery_details(details: &DeliveryDetails) -> ValidationResult<DeliveryDetails> {
    Ok(DeliveryDetails {
        name: validate_customer_name(&details.name)?,
        phone: validate_phone(&details.phone)?,
        address: validate_address(&details.address)?,
    })
}

/// Validates that the cart has something to order.
pub fn validate_cart_non_empty(cart: &Cart) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validators_trim() {
        assert_eq!(validate_customer_name("  Asha ").unwrap(), "Asha");
        assert_eq!(validate_phone(" 98128 ").unwrap(), "98128");
        assert_eq!(validate_address(" 42 MG Road ").unwrap(), "42 MG Road");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(validate_customer_name("").is_err());
        assert!(validate_phone("   ").is_err());
        assert!(validate_address("\t\n").is_err());
    }

    #[test]
    fn test_delivery_details_all_required() {
        let details = DeliveryDetails {
            name: "Asha".to_string(),
            phone: "".to_string(),
            address: "42 MG Road".to_string(),
        };
        assert_eq!(
            validate_delivery_details(&details),
            Err(ValidationError::Required { field: "phone" })
        );
    }

    #[test]
    fn test_delivery_details_trimmed_copy() {
        let details = DeliveryDetails {
            name: " Asha ".to_string(),
            phone: " 9812897289 ".to_string(),
            address: " 42 MG Road ".to_string(),
        };
        let trimmed = validate_delivery_details(&details).unwrap();
        assert_eq!(trimmed.name, "Asha");
        assert_eq!(trimmed.phone, "9812897289");
        assert_eq!(trimmed.address, "42 MG Road");
        // Input is untouched
        assert_eq!(details.name, " Asha ");
    }

    #[test]
    fn test_cart_non_empty() {
        let mut cart = Cart::new();
        assert_eq!(
            validate_cart_non_empty(&cart),
            Err(ValidationError::EmptyCart)
        );

        cart.add("burger");
        assert!(validate_cart_non_empty(&cart).is_ok());
    }
}
