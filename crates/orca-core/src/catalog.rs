//! # Starter Catalog
//!
//! The services and materials a fresh install ships with.
//!
//! Used in two places: the store falls back to these when a collection has
//! never been written (first run), and the seed binary writes them out
//! explicitly. Ids are short and human (`"1"`, `"m3"`); entries created
//! later through catalog management get UUID ids instead.
//!
//! Prices here are starting points for a solo electrician, not gospel.
//! Everything is editable in settings.

use crate::types::{Material, MaterialLink, MaterialUnit, ServiceCatalogEntry};

/// The six services a fresh install offers.
pub fn starter_services() -> Vec<ServiceCatalogEntry> {
    vec![
        ServiceCatalogEntry {
            id: "1".to_string(),
            name: "Outlet".to_string(),
            icon: "power".to_string(),
            labor_cents: 25_00,
            material_cents: Some(15_00),
            linked_materials: vec![
                link("m1", 1),
                link("m5", 1),
                link("m3", 2),
            ],
        },
        ServiceCatalogEntry {
            id: "2".to_string(),
            name: "Switch".to_string(),
            icon: "toggle_on".to_string(),
            labor_cents: 20_00,
            material_cents: Some(12_00),
            linked_materials: vec![link("m2", 1), link("m5", 1)],
        },
        ServiceCatalogEntry {
            id: "3".to_string(),
            name: "Light Point".to_string(),
            icon: "lightbulb".to_string(),
            labor_cents: 45_00,
            material_cents: Some(25_00),
            linked_materials: vec![link("m3", 5)],
        },
        ServiceCatalogEntry {
            id: "4".to_string(),
            name: "Shower Installation".to_string(),
            icon: "shower".to_string(),
            labor_cents: 120_00,
            material_cents: Some(85_00),
            linked_materials: vec![link("m3", 4), link("m4", 1)],
        },
        ServiceCatalogEntry {
            id: "5".to_string(),
            name: "Breaker Replacement".to_string(),
            icon: "bolt".to_string(),
            labor_cents: 80_00,
            material_cents: Some(45_00),
            linked_materials: vec![link("m4", 1)],
        },
        ServiceCatalogEntry {
            id: "6".to_string(),
            name: "Electrical Inspection".to_string(),
            icon: "content_paste_search".to_string(),
            labor_cents: 150_00,
            material_cents: Some(0),
            linked_materials: Vec::new(),
        },
    ]
}

/// The five internal stock materials a fresh install tracks.
pub fn starter_materials() -> Vec<Material> {
    vec![
        material("m1", "10A Outlet", MaterialUnit::Piece, 8_50, 50),
        material("m2", "Simple Switch", MaterialUnit::Piece, 7_20, 40),
        material("m3", "2.5mm Wire", MaterialUnit::Meter, 3_80, 200),
        material("m4", "20A Breaker", MaterialUnit::Piece, 15_00, 20),
        material("m5", "Mounting Plate", MaterialUnit::Piece, 4_50, 100),
    ]
}

fn link(material_id: &str, quantity: i64) -> MaterialLink {
    MaterialLink {
        material_id: material_id.to_string(),
        quantity,
    }
}

fn material(id: &str, name: &str, unit: MaterialUnit, cost_cents: i64, stock: i64) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        unit,
        cost_cents,
        stock,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
