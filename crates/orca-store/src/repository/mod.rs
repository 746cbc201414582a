//! # Repository Module
//!
//! Store repository implementations for Orca.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  QuoteSession                                                          │
//! │       │                                                                 │
//! │       │  store.collections().load_settings()                           │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  CollectionRepository                                                  │
//! │  ├── load(&self, name)                                                 │
//! │  ├── save(&self, name, value)                                          │
//! │  ├── save_many(&self, entries)                                         │
//! │  └── delete(&self, name)                                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • Easy to test (in-memory store)                                      │
//! │  • SQL is isolated in one place                                        │
//! │  • Can swap database implementations                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`collection::CollectionRepository`] - Named JSON collection load/save

pub mod collection;
