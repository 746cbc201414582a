//! # Domain Types
//!
//! Core domain types used throughout Orca.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │    Material     │   │ServiceCatalogEntry│  │    LineItem     │      │
//! │  │  ─────────────  │   │  ──────────────── │  │  ─────────────  │      │
//! │  │  id ("m3")      │   │  id ("1")         │  │  entry fields + │      │
//! │  │  unit (m, un)   │   │  labor_cents      │  │  quantity       │      │
//! │  │  cost_cents     │   │  material_cents?  │  │  is_custom      │      │
//! │  │  stock          │   │  linked_materials │  │                 │      │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────┘      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   MarginRate    │   │   Difficulty    │   │     Quote       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Easy    ×1.0   │   │  id, date       │       │
//! │  │  2000 = 20%     │   │  Medium  ×1.3   │   │  client, items  │       │
//! │  └─────────────────┘   │  Hard    ×1.6   │   │  total, status  │       │
//! │                        │  Emerg.  ×2.0   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Notes
//! Catalog entries and materials use short human ids in the starter data
//! (`"1"`, `"m3"`) and UUID v4 strings once created through the store layer.
//! Quote ids are four-digit display codes, not storage keys.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Margin Rate
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (the default global profit margin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarginRate(u32);

impl MarginRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        MarginRate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        MarginRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        MarginRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for MarginRate {
    fn default() -> Self {
        MarginRate::zero()
    }
}

// =============================================================================
// Difficulty
// =============================================================================

/// Job difficulty, scaling the labor subtotal of a quote.
///
/// The four levels are the only multipliers that exist; each is an exact
/// number of tenths so labor scaling stays in integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Open wall, easy access (×1.0).
    Easy,
    /// Typical residential job (×1.3).
    Medium,
    /// Cramped or risky access (×1.6).
    Hard,
    /// Drop-everything call-out (×2.0).
    Emergency,
}

impl Difficulty {
    /// Every difficulty level, in ascending multiplier order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Emergency,
    ];

    /// The multiplier in tenths: ×1.3 is 13.
    ///
    /// Labor scaling uses `(cents * tenths + 5) / 10`, so the multiplier
    /// never exists as a float anywhere in the money path.
    #[inline]
    pub const fn multiplier_tenths(&self) -> i64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 13,
            Difficulty::Hard => 16,
            Difficulty::Emergency => 20,
        }
    }
}

/// New drafts start at the typical residential level.
impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

// =============================================================================
// Material Unit
// =============================================================================

/// Unit a material is counted in.
///
/// Serialized as the short wire codes the catalog has always used
/// (`"un"`, `"m"`, `"cm"`, `"kg"`, `"kit"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MaterialUnit {
    /// Single pieces (outlets, breakers).
    #[serde(rename = "un")]
    Piece,
    /// Meters (wire, conduit).
    #[serde(rename = "m")]
    Meter,
    /// Centimeters.
    #[serde(rename = "cm")]
    Centimeter,
    /// Kilograms.
    #[serde(rename = "kg")]
    Kilogram,
    /// Pre-assembled kits.
    #[serde(rename = "kit")]
    Kit,
}

impl MaterialUnit {
    /// The short code used on the wire and in labels.
    pub const fn code(&self) -> &'static str {
        match self {
            MaterialUnit::Piece => "un",
            MaterialUnit::Meter => "m",
            MaterialUnit::Centimeter => "cm",
            MaterialUnit::Kilogram => "kg",
            MaterialUnit::Kit => "kit",
        }
    }
}

impl std::fmt::Display for MaterialUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Material
// =============================================================================

/// An internal inventory material.
///
/// Stock is mutated only by the stock ledger when a quote is saved;
/// creating and editing materials is catalog management.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Material {
    /// Identifier (`"m1"`..`"m5"` in the starter data, UUID v4 after).
    pub id: String,

    /// Display name shown in stock views.
    pub name: String,

    /// Unit the stock level is counted in.
    pub unit: MaterialUnit,

    /// Cost per unit in cents (for restock budgeting, never negative).
    pub cost_cents: i64,

    /// Current stock level in units (never negative).
    pub stock: i64,
}

impl Material {
    /// Returns the unit cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Checks whether any stock remains.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Material Link
// =============================================================================

/// How much of one material a single unit of a service consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaterialLink {
    /// Id of the consumed material.
    pub material_id: String,

    /// Units consumed per unit of service (always positive).
    pub quantity: i64,
}

// =============================================================================
// Service Catalog Entry
// =============================================================================

/// A service offered in the catalog.
///
/// Draft rows are derived from these; the entry itself never carries a
/// quantity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceCatalogEntry {
    /// Identifier (`"1"`..`"6"` in the starter data, UUID v4 after).
    pub id: String,

    /// Display name shown on quotes.
    pub name: String,

    /// Opaque icon hint for the UI (Material Symbols name).
    pub icon: String,

    /// Labor price per unit in cents, before difficulty scaling.
    pub labor_cents: i64,

    /// Optional flat material charge per unit in cents.
    /// Absent means the service bills no direct material.
    pub material_cents: Option<i64>,

    /// Materials one unit of this service consumes from internal stock.
    #[serde(default)]
    pub linked_materials: Vec<MaterialLink>,
}

impl ServiceCatalogEntry {
    /// Returns the labor price as Money.
    #[inline]
    pub fn labor(&self) -> Money {
        Money::from_cents(self.labor_cents)
    }

    /// Returns the material charge as Money (absent counts as zero).
    #[inline]
    pub fn material_price(&self) -> Money {
        Money::from_cents(self.material_cents.unwrap_or(0))
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A row in a quote draft.
///
/// Uses the snapshot pattern: catalog prices are frozen into the row when it
/// is created, so later catalog edits never rewrite an open draft's numbers
/// (only a reconcile does, by re-deriving rows).
///
/// A quantity of 0 contributes nothing to any subtotal but remains a
/// visible, editable row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Catalog entry id, or a `custom-` id for ad-hoc rows.
    pub id: String,

    /// Name at the time the row was created (frozen).
    pub name: String,

    /// Icon hint carried from the entry.
    pub icon: String,

    /// Labor price per unit in cents (frozen).
    pub labor_cents: i64,

    /// Flat material charge per unit in cents (frozen).
    pub material_cents: Option<i64>,

    /// Stock links carried from the entry. Custom rows never have any.
    #[serde(default)]
    pub linked_materials: Vec<MaterialLink>,

    /// Units of this service on the quote (never negative).
    pub quantity: i64,

    /// True for ad-hoc rows added mid-draft rather than from the catalog.
    #[serde(default)]
    pub is_custom: bool,
}

impl LineItem {
    /// Creates a row from a catalog entry at the given quantity.
    pub fn from_entry(entry: &ServiceCatalogEntry, quantity: i64) -> Self {
        LineItem {
            id: entry.id.clone(),
            name: entry.name.clone(),
            icon: entry.icon.clone(),
            labor_cents: entry.labor_cents,
            material_cents: entry.material_cents,
            linked_materials: entry.linked_materials.clone(),
            quantity,
            is_custom: false,
        }
    }

    /// Creates an ad-hoc labor row (no stock links, no material charge).
    pub fn custom_service(id: String, name: String, labor_cents: i64, quantity: i64) -> Self {
        LineItem {
            id,
            name,
            icon: "handyman".to_string(),
            labor_cents,
            material_cents: None,
            linked_materials: Vec::new(),
            quantity,
            is_custom: true,
        }
    }

    /// Creates an ad-hoc material row (no labor, no stock links).
    pub fn custom_material(id: String, name: String, material_cents: i64, quantity: i64) -> Self {
        LineItem {
            id,
            name,
            icon: "inventory_2".to_string(),
            labor_cents: 0,
            material_cents: Some(material_cents),
            linked_materials: Vec::new(),
            quantity,
            is_custom: true,
        }
    }

    /// Labor for the whole row (unit labor × quantity), before difficulty.
    #[inline]
    pub fn labor_line(&self) -> Money {
        Money::from_cents(self.labor_cents).multiply_quantity(self.quantity)
    }

    /// Direct material charge for the whole row (absent counts as zero).
    #[inline]
    pub fn material_line(&self) -> Money {
        Money::from_cents(self.material_cents.unwrap_or(0)).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Client Info
// =============================================================================

/// The customer a quote is addressed to.
///
/// Free-form strings on purpose: the UI offers chips for service type and
/// environment but stores whatever label was picked or typed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// e.g. "Installation", "Repair", "Maintenance".
    pub service_type: String,
    /// e.g. "Residential", "Commercial".
    pub environment: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        ClientInfo {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            service_type: "Installation".to_string(),
            environment: "Residential".to_string(),
        }
    }
}

// =============================================================================
// User Profile
// =============================================================================

/// Whether the electrician operates as an individual or a company.
/// Wire codes follow Brazilian tax terms (PF/PJ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PersonType {
    #[serde(rename = "PF")]
    Individual,
    #[serde(rename = "PJ")]
    Company,
}

/// The electrician's own letterhead data, printed on every quote.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub name: String,
    pub company_name: String,
    pub address: String,
    pub phone: String,
    /// Digits-only number used by the send-quote collaborator.
    pub whatsapp: String,
    pub person_type: PersonType,
}

/// A filled-in sample profile so the app works before onboarding.
impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "João Silva".to_string(),
            company_name: "EletroSolutions".to_string(),
            address: "Rua das Flores, 123".to_string(),
            phone: "(11) 98888-7777".to_string(),
            whatsapp: "5511988887777".to_string(),
            person_type: PersonType::Individual,
        }
    }
}

// =============================================================================
// Quote Status
// =============================================================================

/// Lifecycle of a saved quote.
///
/// Quotes are born pending; collaborators flip them later when the client
/// answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for QuoteStatus {
    fn default() -> Self {
        QuoteStatus::Pending
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A saved quote in history.
///
/// Carries the full row list as it stood at save time, zero-quantity rows
/// included, so viewing a quote can restore the draft exactly.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    /// Four-digit display code. Not unique, not a storage key.
    pub id: String,

    /// Preformatted display date (e.g. "23 Aug 2026").
    pub date: String,

    pub client: ClientInfo,
    pub items: Vec<LineItem>,
    pub difficulty: Difficulty,

    /// Grand total in cents at save time.
    pub total_cents: i64,

    pub status: QuoteStatus,
}

impl Quote {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Rate Settings
// =============================================================================

/// Per-job base rates from an earlier version of the pricing model.
///
/// Retained and round-tripped so older installs keep their data; current
/// pricing never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BaseServiceRates {
    pub installation_cents: i64,
    pub breaker_change_cents: i64,
    pub revision_cents: i64,
}

impl Default for BaseServiceRates {
    fn default() -> Self {
        BaseServiceRates {
            installation_cents: 50_00,
            breaker_change_cents: 80_00,
            revision_cents: 150_00,
        }
    }
}

/// Travel pricing knobs. Only the minimum visit fee is read today; the
/// per-km rate is retained for the planned distance-based fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogisticsRates {
    pub km_rate_cents: i64,
    pub min_visit_fee_cents: i64,
}

impl Default for LogisticsRates {
    fn default() -> Self {
        LogisticsRates {
            km_rate_cents: 2_50,
            min_visit_fee_cents: 60_00,
        }
    }
}

/// Percentage knobs. Pricing reads only `global_profit`; the urgency pair
/// is retained unread (difficulty took over that job).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MultiplierRates {
    pub urgency_rate: MarginRate,
    pub global_profit: MarginRate,
    pub urgency_active: bool,
}

impl Default for MultiplierRates {
    fn default() -> Self {
        MultiplierRates {
            urgency_rate: MarginRate::from_bps(3000),
            global_profit: MarginRate::from_bps(2000),
            urgency_active: true,
        }
    }
}

/// All pricing settings, persisted as the `settings` collection.
///
/// ## Round-Trip Rule
/// Every field survives load → save unchanged, including the blocks pricing
/// no longer reads. Deleting "dead" settings would wipe data users may rely
/// on after a future feature revives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateSettings {
    pub base_services: BaseServiceRates,
    pub logistics: LogisticsRates,
    pub multipliers: MultiplierRates,
}

impl Default for RateSettings {
    fn default() -> Self {
        RateSettings {
            base_services: BaseServiceRates::default(),
            logistics: LogisticsRates::default(),
            multipliers: MultiplierRates::default(),
        }
    }
}

impl RateSettings {
    /// The global profit margin applied to the labor subtotal.
    #[inline]
    pub fn profit_margin(&self) -> MarginRate {
        self.multipliers.global_profit
    }

    /// The flat travel fee charged once per quote.
    #[inline]
    pub fn visit_fee(&self) -> Money {
        Money::from_cents(self.logistics.min_visit_fee_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_rate_from_bps() {
        let rate = MarginRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert!((rate.percentage() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_margin_rate_from_percentage() {
        let rate = MarginRate::from_percentage(20.0);
        assert_eq!(rate.bps(), 2000);
    }

    #[test]
    fn test_difficulty_multipliers() {
        assert_eq!(Difficulty::Easy.multiplier_tenths(), 10);
        assert_eq!(Difficulty::Medium.multiplier_tenths(), 13);
        assert_eq!(Difficulty::Hard.multiplier_tenths(), 16);
        assert_eq!(Difficulty::Emergency.multiplier_tenths(), 20);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_serde_names() {
        let json = serde_json::to_string(&Difficulty::Emergency).unwrap();
        assert_eq!(json, r#""emergency""#);
        let back: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Difficulty::Emergency);
    }

    #[test]
    fn test_material_unit_codes() {
        assert_eq!(MaterialUnit::Piece.code(), "un");
        assert_eq!(MaterialUnit::Meter.code(), "m");
        assert_eq!(serde_json::to_string(&MaterialUnit::Kit).unwrap(), r#""kit""#);

        let unit: MaterialUnit = serde_json::from_str(r#""un""#).unwrap();
        assert_eq!(unit, MaterialUnit::Piece);
    }

    #[test]
    fn test_quote_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Pending).unwrap(),
            r#""PENDING""#
        );
        assert_eq!(QuoteStatus::default(), QuoteStatus::Pending);
    }

    #[test]
    fn test_person_type_wire_names() {
        assert_eq!(serde_json::to_string(&PersonType::Individual).unwrap(), r#""PF""#);
        assert_eq!(serde_json::to_string(&PersonType::Company).unwrap(), r#""PJ""#);
    }

    #[test]
    fn test_line_item_from_entry_freezes_prices() {
        let entry = ServiceCatalogEntry {
            id: "1".to_string(),
            name: "Outlet".to_string(),
            icon: "power".to_string(),
            labor_cents: 2500,
            material_cents: Some(1500),
            linked_materials: vec![MaterialLink {
                material_id: "m1".to_string(),
                quantity: 1,
            }],
        };

        let item = LineItem::from_entry(&entry, 2);
        assert_eq!(item.id, "1");
        assert_eq!(item.labor_cents, 2500);
        assert_eq!(item.quantity, 2);
        assert!(!item.is_custom);
        assert_eq!(item.labor_line().cents(), 5000);
        assert_eq!(item.material_line().cents(), 3000);
    }

    #[test]
    fn test_custom_rows_have_no_links() {
        let service = LineItem::custom_service("custom-1".into(), "Panel label".into(), 1500, 1);
        assert!(service.is_custom);
        assert!(service.linked_materials.is_empty());
        assert_eq!(service.material_line().cents(), 0);

        let material = LineItem::custom_material("custom-2".into(), "Conduit (m)".into(), 700, 3);
        assert!(material.is_custom);
        assert!(material.linked_materials.is_empty());
        assert_eq!(material.labor_line().cents(), 0);
        assert_eq!(material.material_line().cents(), 2100);
    }

    #[test]
    fn test_material_line_absent_price_is_zero() {
        let item = LineItem {
            id: "6".to_string(),
            name: "Electrical Inspection".to_string(),
            icon: "content_paste_search".to_string(),
            labor_cents: 15000,
            material_cents: None,
            linked_materials: Vec::new(),
            quantity: 4,
            is_custom: false,
        };
        assert_eq!(item.material_line().cents(), 0);
        assert_eq!(item.labor_line().cents(), 60000);
    }

    #[test]
    fn test_rate_settings_defaults() {
        let settings = RateSettings::default();
        assert_eq!(settings.profit_margin().bps(), 2000);
        assert_eq!(settings.visit_fee().cents(), 6000);
        assert_eq!(settings.base_services.installation_cents, 5000);
        assert_eq!(settings.logistics.km_rate_cents, 250);
        assert!(settings.multipliers.urgency_active);
    }

    #[test]
    fn test_rate_settings_round_trip_preserves_legacy_blocks() {
        // The legacy blocks must survive load → save unchanged even though
        // pricing never reads them.
        let mut settings = RateSettings::default();
        settings.base_services.revision_cents = 123_45;
        settings.logistics.km_rate_cents = 9_99;
        settings.multipliers.urgency_rate = MarginRate::from_bps(4500);
        settings.multipliers.urgency_active = false;

        let json = serde_json::to_string(&settings).unwrap();
        let back: RateSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);

        let json_again = serde_json::to_string(&back).unwrap();
        assert_eq!(json_again, json);
    }

    #[test]
    fn test_line_item_optional_fields_default_on_deserialize() {
        // Older payloads may omit linked_materials and is_custom entirely.
        let json = r#"{
            "id": "5",
            "name": "Breaker Replacement",
            "icon": "bolt",
            "labor_cents": 8000,
            "material_cents": 4500,
            "quantity": 1
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert!(item.linked_materials.is_empty());
        assert!(!item.is_custom);
    }
}
