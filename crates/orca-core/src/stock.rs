//! # Stock Ledger
//!
//! Deducts consumed materials from internal stock when a quote is saved.
//!
//! ## How Consumption Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     apply_stock_deduction                               │
//! │                                                                         │
//! │  LineItem "Outlet" × 2                                                  │
//! │    links: m1 × 1, m5 × 1, m3 × 2                                        │
//! │       │                                                                 │
//! │       ▼  consumption = link.quantity × item.quantity                    │
//! │  ┌─────────────────────────────┐                                        │
//! │  │  m1: 2     m5: 2     m3: 4  │  (aggregated across ALL items)        │
//! │  └─────────────────────────────┘                                        │
//! │       │                                                                 │
//! │       ▼  stock' = max(0, stock − consumed)                              │
//! │  m1: 50 → 48    m5: 100 → 98    m3: 200 → 196                           │
//! │  m2, m4: untouched, returned unchanged                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clamping Is the Contract
//! Stock never goes negative. Over-consuming a material quietly floors it at
//! zero; an electrician who quoted 30m of wire with 20m on the shelf buys
//! the rest, and the ledger should not block the quote over it.
//!
//! ## Orphaned Links
//! A link naming a material id that no longer exists is skipped silently.
//! Catalog edits can orphan links, and pricing/saving must keep working
//! until the entry is cleaned up.

use std::collections::HashMap;

use crate::types::{LineItem, Material};

// =============================================================================
// Deduction
// =============================================================================

/// Applies a saved quote's material consumption to the inventory.
///
/// Pure and total: the input slice is never mutated, the returned vector is
/// the next inventory state in the same order, and nothing can fail.
///
/// ## Rules
/// - Only rows with `quantity > 0` consume anything.
/// - Consumption per link is `link.quantity × item.quantity`, aggregated
///   across all rows before applying.
/// - `stock' = max(0, stock − consumed)`: clamped, never negative.
/// - Links to unknown material ids are skipped silently.
/// - Materials nothing consumed are returned unchanged.
pub fn apply_stock_deduction(materials: &[Material], items: &[LineItem]) -> Vec<Material> {
    let consumed = consumed_by_material(items);

    materials
        .iter()
        .map(|material| {
            let used = consumed.get(&material.id).copied().unwrap_or(0);
            if used == 0 {
                return material.clone();
            }

            let mut next = material.clone();
            next.stock = (material.stock - used).max(0);
            next
        })
        .collect()
}

/// Aggregates consumption per material id across every row.
///
/// Ids with no matching material are harmless here: the lookup in
/// `apply_stock_deduction` simply never asks for them.
fn consumed_by_material(items: &[LineItem]) -> HashMap<String, i64> {
    let mut consumed: HashMap<String, i64> = HashMap::new();

    for item in items {
        if item.quantity <= 0 {
            continue;
        }

        for link in &item.linked_materials {
            *consumed.entry(link.material_id.clone()).or_insert(0) +=
                link.quantity * item.quantity;
        }
    }

    consumed
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, MaterialLink, MaterialUnit};

    fn material(id: &str, stock: i64) -> Material {
        Material {
            id: id.to_string(),
            name: format!("Material {id}"),
            unit: MaterialUnit::Piece,
            cost_cents: 500,
            stock,
        }
    }

    fn item_with_links(links: Vec<(&str, i64)>, quantity: i64) -> LineItem {
        LineItem {
            id: "1".to_string(),
            name: "Outlet".to_string(),
            icon: "power".to_string(),
            labor_cents: 2500,
            material_cents: Some(1500),
            linked_materials: links
                .into_iter()
                .map(|(id, qty)| MaterialLink {
                    material_id: id.to_string(),
                    quantity: qty,
                })
                .collect(),
            quantity,
            is_custom: false,
        }
    }

    fn stock_of<'a>(materials: &'a [Material], id: &str) -> i64 {
        materials.iter().find(|m| m.id == id).map(|m| m.stock).unwrap()
    }

    #[test]
    fn test_reference_deduction() {
        // Outlet × 2 consuming m1×1, m5×1, m3×2 per unit.
        let inventory = vec![
            material("m1", 50),
            material("m2", 40),
            material("m3", 200),
            material("m4", 20),
            material("m5", 100),
        ];
        let items = vec![item_with_links(vec![("m1", 1), ("m5", 1), ("m3", 2)], 2)];

        let next = apply_stock_deduction(&inventory, &items);

        assert_eq!(stock_of(&next, "m1"), 48);
        assert_eq!(stock_of(&next, "m5"), 98);
        assert_eq!(stock_of(&next, "m3"), 196);
        // untouched materials unchanged
        assert_eq!(stock_of(&next, "m2"), 40);
        assert_eq!(stock_of(&next, "m4"), 20);
    }

    #[test]
    fn test_stock_clamps_at_zero() {
        let inventory = vec![material("m3", 20)];
        // 30 meters needed, 20 on the shelf
        let items = vec![item_with_links(vec![("m3", 30)], 1)];

        let next = apply_stock_deduction(&inventory, &items);
        assert_eq!(stock_of(&next, "m3"), 0);
    }

    #[test]
    fn test_exact_consumption_reaches_zero() {
        let inventory = vec![material("m4", 6)];
        let items = vec![item_with_links(vec![("m4", 2)], 3)];

        let next = apply_stock_deduction(&inventory, &items);
        assert_eq!(stock_of(&next, "m4"), 0);
    }

    #[test]
    fn test_unknown_material_id_is_skipped() {
        let inventory = vec![material("m1", 50)];
        let items = vec![item_with_links(vec![("ghost", 5), ("m1", 1)], 2)];

        let next = apply_stock_deduction(&inventory, &items);

        // the ghost link neither errors nor creates a row
        assert_eq!(next.len(), 1);
        assert_eq!(stock_of(&next, "m1"), 48);
    }

    #[test]
    fn test_zero_quantity_items_consume_nothing() {
        let inventory = vec![material("m1", 50)];
        let items = vec![item_with_links(vec![("m1", 3)], 0)];

        let next = apply_stock_deduction(&inventory, &items);
        assert_eq!(stock_of(&next, "m1"), 50);
    }

    #[test]
    fn test_consumption_aggregates_across_items() {
        let inventory = vec![material("m3", 100)];
        let items = vec![
            item_with_links(vec![("m3", 2)], 2),  // 4
            item_with_links(vec![("m3", 5)], 3),  // 15
        ];

        let next = apply_stock_deduction(&inventory, &items);
        assert_eq!(stock_of(&next, "m3"), 81);
    }

    #[test]
    fn test_custom_rows_have_no_effect() {
        let inventory = vec![material("m1", 50)];
        let items = vec![LineItem::custom_material(
            "custom-1".to_string(),
            "Conduit (m)".to_string(),
            700,
            10,
        )];

        let next = apply_stock_deduction(&inventory, &items);
        assert_eq!(stock_of(&next, "m1"), 50);
    }

    #[test]
    fn test_no_items_returns_inventory_unchanged() {
        let inventory = vec![material("m1", 50), material("m2", 40)];
        let next = apply_stock_deduction(&inventory, &[]);

        assert_eq!(next.len(), 2);
        assert_eq!(stock_of(&next, "m1"), 50);
        assert_eq!(stock_of(&next, "m2"), 40);
    }

    #[test]
    fn test_input_slice_is_not_mutated() {
        let inventory = vec![material("m1", 50)];
        let items = vec![item_with_links(vec![("m1", 1)], 10)];

        let _ = apply_stock_deduction(&inventory, &items);

        assert_eq!(stock_of(&inventory, "m1"), 50);
    }

    #[test]
    fn test_order_preserved() {
        let inventory = vec![material("m5", 100), material("m1", 50), material("m3", 200)];
        let items = vec![item_with_links(vec![("m1", 1)], 1)];

        let next = apply_stock_deduction(&inventory, &items);
        let ids: Vec<&str> = next.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m5", "m1", "m3"]);
    }
}
