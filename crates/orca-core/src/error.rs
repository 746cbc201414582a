//! # Error Types
//!
//! Domain-specific error types for orca-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orca-core errors (this file)                                          │
//! │  ├── CoreError        - Draft manipulation failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  orca-store errors (separate crate)                                    │
//! │  └── StoreError       - Persistence and workflow failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → host shell           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the pricing engine and stock ledger are NOT here: they are total
//! functions. Only draft edits and input checks can fail.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (row id, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations while editing a draft.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Draft row cannot be found.
    ///
    /// ## When This Occurs
    /// - Quantity edit targets a row id not in the draft
    /// - A custom row was already removed
    #[error("Draft item not found: {0}")]
    ItemNotFound(String),

    /// Draft has exceeded the maximum allowed rows.
    #[error("Draft cannot have more than {max} items")]
    DraftTooLarge { max: usize },

    /// Row quantity exceeds the maximum allowed.
    ///
    /// ## When This Occurs
    /// Guards against fat-finger quantities (1000 instead of 10).
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Every row in the draft has quantity zero.
    ///
    /// Pricing an all-zero draft is fine (it shows the visit fee), but
    /// saving one as a quote is rejected.
    #[error("Draft has no items selected")]
    EmptyDraft,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., too few phone digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
