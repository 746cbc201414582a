//! # Quote Draft
//!
//! The in-progress quote: client, difficulty and one row per service.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QuoteDraft                                       │
//! │                                                                         │
//! │  new(catalog) ──► one row per entry, all quantities 0                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_quantity / bump_quantity / add_custom_item / remove_item           │
//! │       │                                                                 │
//! │       ├── catalog edited? ──► reconcile(catalog)                        │
//! │       │     keeps quantities of surviving rows, zeroes new entries,     │
//! │       │     drops vanished entries, re-appends custom rows              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price(rates) ──► QuoteBreakdown        (at any time, read-only)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  saved by the session ──► reset(catalog) back to all-zero rows          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a retail cart, rows are never removed by setting quantity to 0:
//! the draft always shows the whole catalog so the next service is one tap
//! away. Only custom rows come and go.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::{compute_breakdown, QuoteBreakdown};
use crate::types::{ClientInfo, Difficulty, LineItem, RateSettings, ServiceCatalogEntry};
use crate::{MAX_DRAFT_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Quote Draft
// =============================================================================

/// The quote being built right now.
///
/// Owned by the application-state context and passed by reference to the
/// pricing engine and stock ledger. Plain data: no locks, no I/O.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteDraft {
    pub client: ClientInfo,
    pub items: Vec<LineItem>,
    pub difficulty: Difficulty,
}

impl QuoteDraft {
    /// Creates a fresh draft: one zero-quantity row per catalog entry,
    /// blank client, default difficulty.
    pub fn new(catalog: &[ServiceCatalogEntry]) -> Self {
        QuoteDraft {
            client: ClientInfo::default(),
            items: catalog.iter().map(|e| LineItem::from_entry(e, 0)).collect(),
            difficulty: Difficulty::default(),
        }
    }

    /// Re-derives the catalog rows after a catalog edit.
    ///
    /// Left-joins the new catalog against the current rows: surviving
    /// entries keep their quantity (and pick up the entry's new prices),
    /// new entries start at 0, vanished entries are dropped. Custom rows
    /// belong to the draft, not the catalog, so they are re-appended
    /// unchanged at the end.
    pub fn reconcile(&mut self, catalog: &[ServiceCatalogEntry]) {
        let mut next: Vec<LineItem> = catalog
            .iter()
            .map(|entry| {
                let existing_qty = self
                    .items
                    .iter()
                    .find(|item| !item.is_custom && item.id == entry.id)
                    .map(|item| item.quantity)
                    .unwrap_or(0);
                LineItem::from_entry(entry, existing_qty)
            })
            .collect();

        next.extend(self.items.iter().filter(|item| item.is_custom).cloned());
        self.items = next;
    }

    /// Sets a row's quantity outright.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        item.quantity = quantity.max(0);
        Ok(())
    }

    /// Nudges a row's quantity by a delta (the +/− steppers).
    ///
    /// Clamps at zero on the way down; the row stays visible. Extreme
    /// deltas saturate instead of overflowing.
    pub fn bump_quantity(&mut self, item_id: &str, delta: i64) -> CoreResult<()> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        let next = item.quantity.saturating_add(delta).max(0);
        self.set_quantity(item_id, next)
    }

    /// Adds an ad-hoc row built by the caller.
    pub fn add_custom_item(&mut self, item: LineItem) -> CoreResult<()> {
        if self.items.len() >= MAX_DRAFT_ITEMS {
            return Err(CoreError::DraftTooLarge {
                max: MAX_DRAFT_ITEMS,
            });
        }

        if item.quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: item.quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes a row entirely. Meant for custom rows; a removed catalog row
    /// reappears on the next reconcile.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);

        if self.items.len() == before {
            return Err(CoreError::ItemNotFound(item_id.to_string()));
        }

        Ok(())
    }

    /// Number of rows with a non-zero quantity.
    pub fn active_item_count(&self) -> usize {
        self.items.iter().filter(|item| item.quantity > 0).count()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// True when nothing has been selected yet (all quantities zero).
    pub fn is_empty(&self) -> bool {
        self.total_quantity() == 0
    }

    /// Prices the draft as it stands.
    pub fn price(&self, rates: &RateSettings) -> QuoteBreakdown {
        compute_breakdown(&self.items, self.difficulty, rates)
    }

    /// Starts over: all-zero catalog rows, blank client, default difficulty.
    /// Custom rows are discarded.
    pub fn reset(&mut self, catalog: &[ServiceCatalogEntry]) {
        *self = QuoteDraft::new(catalog);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
