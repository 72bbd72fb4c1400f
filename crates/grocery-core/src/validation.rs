//! # Validation Module
//!
//! Field validation for catalog records and user-entered product ids.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog wire adapter (grocery-catalog)                       │
//! │  ├── Decodes JSON, sanitises prices                                    │
//! │  └── Calls THIS MODULE per field and decides:                          │
//! │        id empty              → record dropped (warn)                   │
//! │        category missing      → record kept   (warn)                    │
//! │        price / stock < 0     → clamped to 0  (warn)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands                                          │
//! │  └── validate_product_id before lookups                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart Store                                                    │
//! │  └── Stock ceiling enforced by construction, never by error            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::validation::{validate_available, validate_product_id};
//!
//! assert!(validate_product_id("coke-330").is_ok());
//! assert!(validate_product_id("  ").is_err());
//! assert_eq!(validate_available(24).unwrap(), 24);
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog product id.
///
/// Any non-blank id is accepted, whatever its length.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates that a product carries a category.
///
/// A failure here is tolerated by the catalog: the product stays listed
/// under "all" but matches no specific category.
pub fn validate_category(category: Option<&str>) -> ValidationResult<()> {
    match category.map(str::trim) {
        Some(c) if !c.is_empty() => Ok(()),
        _ => Err(ValidationError::Required {
            field: "category".to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items, unparseable catalog prices)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock count and narrows it to the cart's quantity type.
///
/// ## Rules
/// - Between 0 and `u32::MAX`
pub fn validate_available(available: i64) -> ValidationResult<u32> {
    u32::try_from(available).map_err(|_| ValidationError::OutOfRange {
        field: "available".to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("coke").is_ok());
        assert!(validate_product_id("7f3c-11").is_ok());

        assert_eq!(
            validate_product_id(""),
            Err(ValidationError::Required {
                field: "id".to_string()
            })
        );
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"x".repeat(65)).is_ok());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category(Some("drinks")).is_ok());
        assert!(validate_category(Some(" ")).is_err());
        assert!(validate_category(None).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_minor(1099)).is_ok());
        assert!(validate_price(Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_validate_available() {
        assert_eq!(validate_available(0).unwrap(), 0);
        assert_eq!(validate_available(24).unwrap(), 24);
        assert!(validate_available(-3).is_err());
        assert!(validate_available(i64::from(u32::MAX) + 1).is_err());
    }
}
