//! # Validation Module
//!
//! Field validation for catalog input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system (Rust)                                           │
//! │  ├── Money for prices, i64 for quantities                              │
//! │  └── Non-Product values cannot reach typed operations                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - catalog rules                                  │
//! │  ├── name non-empty                                                    │
//! │  ├── price strictly positive                                           │
//! │  └── quantity strictly positive                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Constructors and setters                                     │
//! │  └── Reject-and-retain: a failed write never corrupts prior state      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lavka_core::money::Money;
//! use lavka_core::validation::{validate_price, validate_quantity};
//!
//! validate_price(Money::from_kopecks(1099)).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// The name is also the merge key: `resolve` matches candidates by exact
/// name equality, so an empty name would merge unrelated records.
///
/// ## Example
/// ```rust
/// use lavka_core::validation::validate_product_name;
///
/// assert!(validate_product_name("iPhone 13").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - Zero is NOT a valid price; free items do not exist in this catalog
///
/// ## Example
/// ```rust
/// use lavka_core::money::Money;
/// use lavka_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_kopecks(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_kopecks(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Parses and validates a price from a fractional ruble amount.
///
/// Catalog documents carry prices as JSON numbers; this is the single entry
/// point that turns them into a valid `Money`.
///
/// ## Rules
/// - Must be a finite number within the representable range
/// - Must be strictly positive after rounding to kopecks
pub fn parse_price(value: f64) -> ValidationResult<Money> {
    let price = Money::try_from_rubles(value).map_err(|err| match err {
        ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason,
        },
        other => other,
    })?;

    validate_price(price)?;
    Ok(price)
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be strictly positive (> 0)
///
/// ## Example
/// ```rust
/// use lavka_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-5).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
