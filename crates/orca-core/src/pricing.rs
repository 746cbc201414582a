//! # Pricing Engine
//!
//! Turns a draft's line items into the four-figure quote breakdown.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       compute_breakdown                                 │
//! │                                                                         │
//! │  items ──► Σ labor_cents × qty ──► × difficulty ──► LABOR              │
//! │                                         │                               │
//! │  items ──► Σ material_cents × qty ──────┼──► direct materials          │
//! │                                         │         │                     │
//! │                                         ▼         ▼                     │
//! │                            labor × global_profit + direct ──► MATERIALS │
//! │                                                                         │
//! │  rates ──► min_visit_fee (flat, once per quote) ──► TRAVEL             │
//! │                                                                         │
//! │  LABOR + MATERIALS + TRAVEL ──────────────────────► TOTAL              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Evaluation Order Is Fixed
//! The difficulty multiplier scales ONLY the labor subtotal, and the profit
//! margin is computed on the already-scaled labor. Reordering those two
//! steps changes real invoices, so the order above is part of the contract.
//!
//! ## Totality
//! This function never fails and never mutates its inputs. Whatever draft
//! it is given, it prices: empty drafts still carry the visit fee.
//!
//! ## Example
//! ```rust
//! use orca_core::pricing::compute_breakdown;
//! use orca_core::types::{Difficulty, LineItem, RateSettings};
//!
//! let items = vec![LineItem::custom_service(
//!     "custom-1".into(),
//!     "Panel labeling".into(),
//!     5000,
//!     1,
//! )];
//! let breakdown = compute_breakdown(&items, Difficulty::Medium, &RateSettings::default());
//!
//! assert_eq!(breakdown.labor_cents, 6500);   // 50,00 × 1.3
//! assert_eq!(breakdown.materials_cents, 1300); // 20% margin on labor
//! assert_eq!(breakdown.travel_cents, 6000);  // flat visit fee
//! assert_eq!(breakdown.total_cents, 13800);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Difficulty, LineItem, RateSettings};

// =============================================================================
// Quote Breakdown
// =============================================================================

/// The priced view of a draft: what the client sees on the quote.
///
/// `materials_cents` is the client-facing materials figure: direct material
/// charges plus the profit margin folded in. `direct_materials_cents` keeps
/// the pre-margin number around for internal review screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteBreakdown {
    /// Labor subtotal after difficulty scaling.
    pub labor_cents: i64,

    /// Material charges before the margin (internal figure).
    pub direct_materials_cents: i64,

    /// Materials as quoted: direct charges + margin on labor.
    pub materials_cents: i64,

    /// Flat travel fee, charged once per quote.
    pub travel_cents: i64,

    /// Grand total: labor + materials + travel.
    pub total_cents: i64,
}

impl QuoteBreakdown {
    /// Returns the labor figure as Money.
    #[inline]
    pub fn labor(&self) -> Money {
        Money::from_cents(self.labor_cents)
    }

    /// Returns the quoted materials figure as Money.
    #[inline]
    pub fn materials(&self) -> Money {
        Money::from_cents(self.materials_cents)
    }

    /// Returns the travel figure as Money.
    #[inline]
    pub fn travel(&self) -> Money {
        Money::from_cents(self.travel_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// Prices a draft. Pure and total: same inputs, same breakdown, no failure.
///
/// ## Rules
/// 1. Labor: Σ(labor × qty), then scaled by the difficulty multiplier.
/// 2. Direct materials: Σ(material × qty), never difficulty-scaled.
/// 3. Materials as quoted: direct + margin(labor, global_profit).
/// 4. Travel: the minimum visit fee, flat.
/// 5. Total: labor + materials + travel.
///
/// Zero-quantity rows contribute nothing. An empty draft still bills the
/// visit fee, matching how call-outs are actually charged.
pub fn compute_breakdown(
    items: &[LineItem],
    difficulty: Difficulty,
    rates: &RateSettings,
) -> QuoteBreakdown {
    let mut labor_base = Money::zero();
    let mut direct_materials = Money::zero();

    for item in items {
        labor_base += item.labor_line();
        direct_materials += item.material_line();
    }

    let labor = labor_base.scale_by(difficulty);
    let materials = direct_materials + labor.margin(rates.profit_margin());
    let travel = rates.visit_fee();
    let total = labor + materials + travel;

    QuoteBreakdown {
        labor_cents: labor.cents(),
        direct_materials_cents: direct_materials.cents(),
        materials_cents: materials.cents(),
        travel_cents: travel.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarginRate, MaterialLink, ServiceCatalogEntry};

    fn outlet_entry() -> ServiceCatalogEntry {
        ServiceCatalogEntry {
            id: "1".to_string(),
            name: "Outlet".to_string(),
            icon: "power".to_string(),
            labor_cents: 2500,
            material_cents: Some(1500),
            linked_materials: vec![
                MaterialLink {
                    material_id: "m1".to_string(),
                    quantity: 1,
                },
                MaterialLink {
                    material_id: "m5".to_string(),
                    quantity: 1,
                },
                MaterialLink {
                    material_id: "m3".to_string(),
                    quantity: 2,
                },
            ],
        }
    }

    #[test]
    fn test_reference_quote() {
        // Two outlets at Medium difficulty with default rates:
        // labor    = 25,00 × 2 × 1.3          = 65,00
        // direct   = 15,00 × 2                = 30,00
        // materials= 30,00 + 20% of 65,00     = 43,00
        // travel   =                            60,00
        // total    =                           168,00
        let items = vec![LineItem::from_entry(&outlet_entry(), 2)];
        let b = compute_breakdown(&items, Difficulty::Medium, &RateSettings::default());

        assert_eq!(b.labor_cents, 6500);
        assert_eq!(b.direct_materials_cents, 3000);
        assert_eq!(b.materials_cents, 4300);
        assert_eq!(b.travel_cents, 6000);
        assert_eq!(b.total_cents, 16800);
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let items = vec![
            LineItem::from_entry(&outlet_entry(), 3),
            LineItem::custom_service("custom-1".into(), "Odd job".into(), 1234, 7),
            LineItem::custom_material("custom-2".into(), "Conduit (m)".into(), 567, 11),
        ];

        for difficulty in Difficulty::ALL {
            let b = compute_breakdown(&items, difficulty, &RateSettings::default());
            assert_eq!(
                b.total_cents,
                b.labor_cents + b.materials_cents + b.travel_cents
            );
        }
    }

    #[test]
    fn test_labor_scales_with_difficulty() {
        let items = vec![LineItem::from_entry(&outlet_entry(), 2)];
        let rates = RateSettings::default();

        let easy = compute_breakdown(&items, Difficulty::Easy, &rates);
        let emergency = compute_breakdown(&items, Difficulty::Emergency, &rates);

        // base labor 50,00: ×1.0 and ×2.0 are both exact
        assert_eq!(easy.labor_cents, 5000);
        assert_eq!(emergency.labor_cents, 10000);

        // direct materials never scale
        assert_eq!(easy.direct_materials_cents, emergency.direct_materials_cents);
    }

    #[test]
    fn test_empty_draft_still_bills_the_visit_fee() {
        let b = compute_breakdown(&[], Difficulty::Hard, &RateSettings::default());

        assert_eq!(b.labor_cents, 0);
        assert_eq!(b.direct_materials_cents, 0);
        assert_eq!(b.materials_cents, 0);
        assert_eq!(b.travel_cents, 6000);
        assert_eq!(b.total_cents, 6000);
    }

    #[test]
    fn test_zero_quantity_rows_contribute_nothing() {
        let priced = vec![LineItem::from_entry(&outlet_entry(), 2)];
        let with_zeros = vec![
            LineItem::from_entry(&outlet_entry(), 2),
            LineItem::custom_service("custom-1".into(), "Not chosen".into(), 99999, 0),
            LineItem::from_entry(&outlet_entry(), 0),
        ];

        let a = compute_breakdown(&priced, Difficulty::Medium, &RateSettings::default());
        let b = compute_breakdown(&with_zeros, Difficulty::Medium, &RateSettings::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_item_order_does_not_matter() {
        let mut items = vec![
            LineItem::from_entry(&outlet_entry(), 1),
            LineItem::custom_service("custom-1".into(), "Odd job".into(), 3333, 2),
            LineItem::custom_material("custom-2".into(), "Conduit (m)".into(), 450, 5),
        ];

        let forward = compute_breakdown(&items, Difficulty::Medium, &RateSettings::default());
        items.reverse();
        let backward = compute_breakdown(&items, Difficulty::Medium, &RateSettings::default());

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_margin_applies_to_scaled_labor() {
        // The margin must see the difficulty-scaled labor, not the base.
        let items = vec![LineItem::from_entry(&outlet_entry(), 2)];
        let mut rates = RateSettings::default();
        rates.multipliers.global_profit = MarginRate::from_bps(1000); // 10%

        let b = compute_breakdown(&items, Difficulty::Emergency, &rates);

        // labor 50,00 × 2.0 = 100,00; 10% of that is 10,00
        assert_eq!(b.labor_cents, 10000);
        assert_eq!(b.materials_cents, 3000 + 1000);
    }

    #[test]
    fn test_zero_profit_margin() {
        let items = vec![LineItem::from_entry(&outlet_entry(), 1)];
        let mut rates = RateSettings::default();
        rates.multipliers.global_profit = MarginRate::zero();

        let b = compute_breakdown(&items, Difficulty::Easy, &rates);
        assert_eq!(b.materials_cents, b.direct_materials_cents);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let items = vec![LineItem::from_entry(&outlet_entry(), 2)];
        let before = serde_json::to_string(&items).unwrap();

        let _ = compute_breakdown(&items, Difficulty::Medium, &RateSettings::default());

        assert_eq!(serde_json::to_string(&items).unwrap(), before);
    }

    #[test]
    fn test_money_accessors() {
        let b = compute_breakdown(&[], Difficulty::Easy, &RateSettings::default());
        assert_eq!(b.travel().to_string(), "R$ 60,00");
        assert_eq!(b.total(), b.labor() + b.materials() + b.travel());
    }
}
