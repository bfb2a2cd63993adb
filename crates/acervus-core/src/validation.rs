//! # Validation Module
//!
//! Input validation and name matching for Acervus.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (apps/cli)                                               │
//! │  ├── Raw text → typed values: parse_quantity, parse_price              │
//! │  └── Errors shown, session continues                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: InventoryStore (acervus-store)                               │
//! │  ├── Range checks: validate_stock_quantity, validate_sale_quantity     │
//! │  └── Runs before any mutation                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Codec (decode)                                               │
//! │  └── Same parsers; a failure drops the line instead of erroring        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acervus_core::validation::{parse_price, parse_quantity, validate_sale_quantity};
//!
//! let quantity = parse_quantity(" 20 ", "quantity").unwrap();
//! validate_sale_quantity(quantity).unwrap();
//!
//! assert_eq!(parse_price("45.00").unwrap().cents(), 4500);
//! assert!(parse_price("forty").is_err());
//! ```

use crate::error::{ParseMoneyError, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Name Rules
// =============================================================================

/// Case-insensitive equality on the full string.
///
/// Compares the Unicode lowercase expansion of both names, so `"RICE"`,
/// `"rice"` and `"Rice"` all match, while `"Rice "` and `"Ric"` do not.
/// No trimming and no partial matching.
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Validates a product name.
///
/// ## Rules
/// - Must contain at least one non-whitespace character
/// - Must not contain `\n` or `\r` (one record per line on disk)
///
/// The name is stored exactly as given; surrounding whitespace is kept
/// and takes part in matching.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain a line break".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock level (add, update quantity).
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity to sell.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sell Product                                                           │
/// │                                                                         │
/// │  User enters quantity: 20                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_sale_quantity(20) ← THIS FUNCTION                            │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       └── OK → lookup, stock check, then sale                          │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use acervus_core::money::Money;
/// use acervus_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses user-typed integer text. Surrounding whitespace is ignored.
///
/// Only the format is checked here; range rules belong to the operation.
pub fn parse_quantity(input: &str, field: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    input
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

/// Parses user-typed decimal price text into [`Money`].
///
/// Surrounding whitespace is ignored; negative prices are rejected.
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price: Money = input.parse().map_err(|e: ParseMoneyError| {
        ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: e.to_string(),
        }
    })?;
    validate_price(price)?;

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
