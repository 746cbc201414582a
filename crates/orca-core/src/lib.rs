//! # orca-core: Pure Business Logic for Orca
//!
//! This crate is the **heart** of Orca. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Orca Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript PWA)                    │   │
//! │  │   New Quote ──► Select Services ──► Review ──► Send/History     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ host shell IPC                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 orca-store (QuoteSession)                       │   │
//! │  │    save_quote, catalog management, history, dashboard           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ orca-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │   stock   │   │   │
//! │  │   │ Material  │  │   Money   │  │ breakdown │  │  ledger   │   │   │
//! │  │   │   Quote   │  │MarginRate │  │   math    │  │  clamp    │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   draft   │  │  catalog  │  │ validation│                  │   │
//! │  │   │QuoteDraft │  │  starter  │  │   rules   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Material, ServiceCatalogEntry, Quote, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The quote breakdown engine
//! - [`stock`] - The stock ledger (clamped deduction)
//! - [`draft`] - The in-progress quote
//! - [`catalog`] - Starter services and materials
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation helpers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, clock and random ids are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Engines**: Pricing and stock never fail; only draft edits return Results
//!
//! ## Example Usage
//!
//! ```rust
//! use orca_core::catalog::starter_services;
//! use orca_core::draft::QuoteDraft;
//! use orca_core::types::RateSettings;
//!
//! let catalog = starter_services();
//! let mut draft = QuoteDraft::new(&catalog);
//!
//! // Two outlets at the default Medium difficulty
//! draft.set_quantity("1", 2).unwrap();
//!
//! let breakdown = draft.price(&RateSettings::default());
//! assert_eq!(breakdown.total_cents, 16800); // R$ 168,00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod draft;
pub mod error;
pub mod money;
pub mod pricing;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orca_core::Money` instead of
// `use orca_core::money::Money`

pub use draft::QuoteDraft;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_breakdown, QuoteBreakdown};
pub use stock::apply_stock_deduction;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum rows allowed in a single draft.
///
/// ## Business Reason
/// The catalog contributes a handful of rows; the rest is custom additions.
/// A hundred rows is far past any real quote and keeps the draft bounded.
pub const MAX_DRAFT_ITEMS: usize = 100;

/// Maximum quantity of a single row.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
