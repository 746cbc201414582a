//! # orca-store: Persistence and Workflow Layer for Orca
//!
//! This crate owns everything stateful: the SQLite-backed collection store
//! and the [`QuoteSession`] that drives the quote workflow on top of the
//! pure engines in `orca-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Orca Data Flow                                  │
//! │                                                                         │
//! │  Host Shell (Tauri command / test)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    orca-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ QuoteSession  │    │     Store     │    │  Migrations  │  │   │
//! │  │   │ (session.rs)  │    │   (pool.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ draft edits   │───►│ SqlitePool    │    │ 001_collec-  │  │   │
//! │  │   │ save-quote    │    │ Collection    │◄───│ tions.sql    │  │   │
//! │  │   │ catalog mgmt  │    │ Repository    │    │              │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │ pricing + stock ledger                             │   │
//! │  │           ▼                                                    │   │
//! │  │      orca-core (pure, no I/O)                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   one `collections` table, one JSON document per collection    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - Collection repository (named JSON documents)
//! - [`session`] - The quote workflow context
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orca_store::{QuoteSession, Store, StoreConfig};
//!
//! // Open the store (creates the file and runs migrations)
//! let store = Store::new(StoreConfig::new("path/to/orca.db")).await?;
//!
//! // Open a session and work a quote
//! let mut session = QuoteSession::open(store).await?;
//! session.set_quantity("1", 2)?;
//! let quote = session.save_quote().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod session;

// =============================================================================
// Collection Names
// =============================================================================

/// Well-known collection names.
///
/// Constants because the names are a storage contract: renaming one orphans
/// every install's data under the old name.
pub mod collection {
    pub const SETTINGS: &str = "settings";
    pub const HISTORY: &str = "history";
    pub const SERVICES: &str = "services";
    pub const USER_PROFILE: &str = "user-profile";
    pub const MATERIALS: &str = "materials";
}

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};
pub use session::{DashboardSummary, QuoteSession};

// Repository re-export for convenience
pub use repository::collection::CollectionRepository;
