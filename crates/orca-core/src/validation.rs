//! # Validation Module
//!
//! Input validation utilities for Orca.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Field checks before catalog edits and save-quote                  │
//! │  └── Phone check gating the send-quote collaborator                    │
//! │                                                                         │
//! │  The pricing engine itself never validates: it is a total function     │
//! │  and prices whatever draft it is given.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orca_core::validation::{validate_entry_name, validate_quantity};
//!
//! validate_entry_name("Shower Installation").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_DRAFT_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog entry or material name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 120 characters
///
/// ## Example
/// ```rust
/// use orca_core::validation::validate_entry_name;
///
/// assert!(validate_entry_name("20A Breaker").is_ok());
/// assert!(validate_entry_name("   ").is_err());
/// ```
pub fn validate_entry_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates the client name on a draft before it can be saved.
///
/// ## Rules
/// - Must not be empty after trimming (a quote without a client is noise)
/// - Must be at most 120 characters
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "client name".to_string(),
        });
    }

    if name.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "client name".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates a phone number for the send-quote collaborator.
///
/// ## Rules
/// - At least 8 digits once separators are stripped
/// - Everything except digits is ignored ("(11) 98888-7777" is fine)
///
/// ## Returns
/// The digits-only string, ready for a wa.me style link.
///
/// ## Example
/// ```rust
/// use orca_core::validation::validate_phone;
///
/// assert_eq!(validate_phone("(11) 98888-7777").unwrap(), "11988887777");
/// assert!(validate_phone("123").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 8 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain at least 8 digits".to_string(),
        });
    }

    Ok(digits)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a draft row quantity.
///
/// ## Rules
/// - Must be zero or more (zero keeps the row visible but priced at nothing)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Draft: Set Quantity                                                    │
/// │                                                                         │
/// │  User types quantity: 5                                                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty < 0?   → Error: "quantity must not be negative"          │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 0 and 999"     │
/// │       │                                                                 │
/// │       └── OK → row updated, breakdown recomputed                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (the inspection service bills no material)
///
/// ## Example
/// ```rust
/// use orca_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2500).is_ok());  // R$ 25,00
/// assert!(validate_price_cents(0).is_ok());     // free
/// assert!(validate_price_cents(-100).is_err()); // invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (the ledger clamps at zero, manual edits
///   must not sneak below it)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates draft size (number of rows) before adding another.
///
/// ## Rules
/// - Must not exceed MAX_DRAFT_ITEMS (100)
pub fn validate_draft_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_DRAFT_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "draft items".to_string(),
            min: 0,
            max: MAX_DRAFT_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
