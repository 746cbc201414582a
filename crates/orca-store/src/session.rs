//! # Quote Session
//!
//! The application-state context: one loaded copy of every collection plus
//! the in-progress draft, with persistence on every completed action.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       QuoteSession                                      │
//! │                                                                         │
//! │  QuoteSession::open(store)                                             │
//! │       │  loads settings, services, materials, history, profile         │
//! │       │  (missing collections fall back to starter data)               │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │ In-memory working state                     │                       │
//! │  │  - draft (QuoteDraft, one row per service)  │                       │
//! │  │  - services, materials, history, settings   │                       │
//! │  └─────────────────────────────────────────────┘                       │
//! │       │                                                                 │
//! │       │  edit draft ──► set_quantity / add_custom_service / ...        │
//! │       │  price      ──► price_draft() (pure, no I/O)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save_quote()                                                          │
//! │       │  1. validate client name, reject all-zero draft                │
//! │       │  2. price the draft one last time                              │
//! │       │  3. stage: quote → front of history copy                       │
//! │       │  4. stage: stock ledger deducts linked materials               │
//! │       │  5. staged state saved in ONE transaction                      │
//! │       │  6. commit staged state, reset draft to all-zero rows          │
//! │       ▼                                                                 │
//! │  history / dashboard / status flips / restore-for-editing              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! The session is single-user by design: one electrician, one open app.
//! It is plain owned state behind `&mut self`; the host shell decides how
//! to share it (Tauri wraps it in a Mutex, tests just own it).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::pool::Store;
use orca_core::validation;
use orca_core::{
    apply_stock_deduction, catalog, ClientInfo, CoreError, Difficulty, LineItem, Material,
    MaterialUnit, Quote, QuoteBreakdown, QuoteDraft, QuoteStatus, RateSettings,
    ServiceCatalogEntry, UserProfile,
};

// =============================================================================
// Dashboard Summary
// =============================================================================

/// Aggregates the dashboard reads from history in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_quotes: usize,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub pending_total_cents: i64,
    pub approved_total_cents: i64,
    /// Share of all quotes approved, in basis points (0 when history is empty).
    pub approval_rate_bps: u32,
}

// =============================================================================
// Quote Session
// =============================================================================

/// A loaded session: every collection in memory plus the working draft.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::new(StoreConfig::new("./orca.db")).await?;
/// let mut session = QuoteSession::open(store).await?;
///
/// session.set_quantity("1", 2)?;
/// let breakdown = session.price_draft();
/// let quote = session.save_quote().await?;
/// ```
#[derive(Debug)]
pub struct QuoteSession {
    store: Store,
    profile: UserProfile,
    settings: RateSettings,
    services: Vec<ServiceCatalogEntry>,
    materials: Vec<Material>,
    history: Vec<Quote>,
    draft: QuoteDraft,
}

impl QuoteSession {
    /// Opens a session, loading every collection from the store.
    ///
    /// ## First Run
    /// Collections that don't exist yet fall back to defaults: the starter
    /// catalog and materials, empty history, default settings and profile.
    /// Nothing is written until the first action that persists.
    pub async fn open(store: Store) -> StoreResult<Self> {
        let repo = store.collections();

        let settings = repo.load_settings().await?.unwrap_or_default();
        let services = repo
            .load_services()
            .await?
            .unwrap_or_else(catalog::starter_services);
        let materials = repo
            .load_materials()
            .await?
            .unwrap_or_else(catalog::starter_materials);
        let history = repo.load_history().await?.unwrap_or_default();
        let profile = repo.load_profile().await?.unwrap_or_default();

        let draft = QuoteDraft::new(&services);

        info!(
            services = services.len(),
            materials = materials.len(),
            quotes = history.len(),
            "Session opened"
        );

        Ok(QuoteSession {
            store,
            profile,
            settings,
            services,
            materials,
            history,
            draft,
        })
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// The in-progress draft.
    pub fn draft(&self) -> &QuoteDraft {
        &self.draft
    }

    /// Current pricing settings.
    pub fn settings(&self) -> &RateSettings {
        &self.settings
    }

    /// The service catalog.
    pub fn services(&self) -> &[ServiceCatalogEntry] {
        &self.services
    }

    /// The material inventory.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Saved quotes, newest first.
    pub fn history(&self) -> &[Quote] {
        &self.history
    }

    /// The electrician's letterhead profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    // =========================================================================
    // Draft Editing
    // =========================================================================

    /// Replaces the draft's client block.
    pub fn set_client(&mut self, client: ClientInfo) {
        self.draft.client = client;
    }

    /// Sets the draft's difficulty tier.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.draft.difficulty = difficulty;
    }

    /// Sets a draft row's quantity outright.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> StoreResult<()> {
        self.draft.set_quantity(item_id, quantity)?;
        Ok(())
    }

    /// Nudges a draft row's quantity (the +/− steppers).
    pub fn bump_quantity(&mut self, item_id: &str, delta: i64) -> StoreResult<()> {
        self.draft.bump_quantity(item_id, delta)?;
        Ok(())
    }

    /// Adds an ad-hoc labor row to the draft at quantity 1.
    ///
    /// ## Returns
    /// The generated `custom-` row id, for later quantity edits or removal.
    pub fn add_custom_service(&mut self, name: &str, labor_cents: i64) -> StoreResult<String> {
        validation::validate_entry_name(name).map_err(CoreError::from)?;
        validation::validate_price_cents(labor_cents).map_err(CoreError::from)?;

        let id = format!("custom-{}", Uuid::new_v4());
        let row = LineItem::custom_service(id.clone(), name.trim().to_string(), labor_cents, 1);
        self.draft.add_custom_item(row)?;

        debug!(id = %id, "Custom service row added");
        Ok(id)
    }

    /// Adds an ad-hoc material row to the draft at quantity 1.
    ///
    /// The display name carries the unit code ("Conduit (m)") since custom
    /// rows have no catalog entry to look the unit up from later.
    pub fn add_custom_material(
        &mut self,
        name: &str,
        unit: MaterialUnit,
        price_cents: i64,
    ) -> StoreResult<String> {
        validation::validate_entry_name(name).map_err(CoreError::from)?;
        validation::validate_price_cents(price_cents).map_err(CoreError::from)?;

        let id = format!("custom-{}", Uuid::new_v4());
        let display_name = format!("{} ({})", name.trim(), unit.code());
        let row = LineItem::custom_material(id.clone(), display_name, price_cents, 1);
        self.draft.add_custom_item(row)?;

        debug!(id = %id, "Custom material row added");
        Ok(id)
    }

    /// Removes a draft row entirely (meant for custom rows).
    pub fn remove_draft_item(&mut self, item_id: &str) -> StoreResult<()> {
        self.draft.remove_item(item_id)?;
        Ok(())
    }

    /// Prices the draft as it stands. Pure read, no I/O.
    pub fn price_draft(&self) -> QuoteBreakdown {
        self.draft.price(&self.settings)
    }

    /// Starts the draft over without saving anything.
    pub fn reset_draft(&mut self) {
        self.draft.reset(&self.services);
    }

    // =========================================================================
    // Quote Workflow
    // =========================================================================

    /// Saves the draft as a quote.
    ///
    /// ## What This Does
    /// 1. Validates the client name and rejects an all-zero draft
    /// 2. Prices the draft
    /// 3. Stages the next history (quote in front, newest first) and the
    ///    deducted material ledger
    /// 4. Persists the staged state in one transaction
    /// 5. Commits it to the session and resets the draft
    ///
    /// A failed save leaves the session untouched: no quote in history,
    /// no stock moved, and the draft survives for a retry.
    ///
    /// ## Returns
    /// The saved quote, ready for the send-quote collaborator.
    pub async fn save_quote(&mut self) -> StoreResult<Quote> {
        validation::validate_client_name(&self.draft.client.name).map_err(CoreError::from)?;

        if self.draft.is_empty() {
            return Err(CoreError::EmptyDraft.into());
        }

        let breakdown = self.draft.price(&self.settings);
        let quote = Quote {
            id: generate_quote_id(),
            date: Utc::now().format("%d %b %Y").to_string(),
            client: self.draft.client.clone(),
            items: self.draft.items.clone(),
            difficulty: self.draft.difficulty,
            total_cents: breakdown.total_cents,
            status: QuoteStatus::Pending,
        };

        // Persist first, commit to memory second: a failed save leaves
        // the session exactly as it was, draft included.
        let mut next_history = self.history.clone();
        next_history.insert(0, quote.clone());
        let next_materials = apply_stock_deduction(&self.materials, &self.draft.items);

        self.store
            .collections()
            .save_history_and_materials(&next_history, &next_materials)
            .await?;

        self.history = next_history;
        self.materials = next_materials;
        self.draft.reset(&self.services);

        info!(
            quote_id = %quote.id,
            total_cents = quote.total_cents,
            "Quote saved"
        );

        Ok(quote)
    }

    /// Finds a quote by display id (first match wins; ids can repeat).
    pub fn quote(&self, quote_id: &str) -> Option<&Quote> {
        self.history.iter().find(|q| q.id == quote_id)
    }

    /// Flips the status of every quote bearing the id.
    ///
    /// Ids are display codes, not keys, so a collision flips both quotes.
    pub async fn set_quote_status(
        &mut self,
        quote_id: &str,
        status: QuoteStatus,
    ) -> StoreResult<()> {
        let mut touched = false;
        for quote in self.history.iter_mut().filter(|q| q.id == quote_id) {
            quote.status = status;
            touched = true;
        }

        if !touched {
            return Err(StoreError::not_found("Quote", quote_id));
        }

        self.store.collections().save_history(&self.history).await?;

        debug!(quote_id = %quote_id, status = ?status, "Quote status changed");
        Ok(())
    }

    /// Deletes every quote bearing the id.
    ///
    /// Stock is NOT restored: the materials left the van when the job was
    /// quoted and deleting the paperwork doesn't bring them back.
    pub async fn delete_quote(&mut self, quote_id: &str) -> StoreResult<()> {
        let before = self.history.len();
        self.history.retain(|q| q.id != quote_id);

        if self.history.len() == before {
            return Err(StoreError::not_found("Quote", quote_id));
        }

        self.store.collections().save_history(&self.history).await?;

        info!(quote_id = %quote_id, "Quote deleted");
        Ok(())
    }

    /// Filters history by optional status and a case-insensitive client
    /// name fragment. An empty fragment matches every client.
    pub fn search_history(&self, status: Option<QuoteStatus>, client: &str) -> Vec<&Quote> {
        let needle = client.trim().to_lowercase();

        self.history
            .iter()
            .filter(|q| status.map_or(true, |s| q.status == s))
            .filter(|q| needle.is_empty() || q.client.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Loads a saved quote back into the draft for editing or re-sending.
    ///
    /// Rows are restored exactly as saved (snapshot prices included); a
    /// catalog edit afterwards reconciles them like any other draft.
    pub fn restore_draft_from(&mut self, quote_id: &str) -> StoreResult<()> {
        let quote = self
            .history
            .iter()
            .find(|q| q.id == quote_id)
            .ok_or_else(|| StoreError::not_found("Quote", quote_id))?;

        self.draft.client = quote.client.clone();
        self.draft.items = quote.items.clone();
        self.draft.difficulty = quote.difficulty;

        debug!(quote_id = %quote_id, "Draft restored from history");
        Ok(())
    }

    /// One-pass dashboard aggregates over history.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let mut summary = DashboardSummary {
            total_quotes: self.history.len(),
            ..Default::default()
        };

        for quote in &self.history {
            match quote.status {
                QuoteStatus::Pending => {
                    summary.pending_count += 1;
                    summary.pending_total_cents += quote.total_cents;
                }
                QuoteStatus::Approved => {
                    summary.approved_count += 1;
                    summary.approved_total_cents += quote.total_cents;
                }
                QuoteStatus::Rejected => {
                    summary.rejected_count += 1;
                }
            }
        }

        if summary.total_quotes > 0 {
            summary.approval_rate_bps =
                ((summary.approved_count * 10_000) / summary.total_quotes) as u32;
        }

        summary
    }

    // =========================================================================
    // Catalog Management
    // =========================================================================

    /// Inserts or replaces a service catalog entry, then reconciles the
    /// draft so open rows pick up the new prices.
    pub async fn upsert_service(&mut self, entry: ServiceCatalogEntry) -> StoreResult<()> {
        validation::validate_entry_name(&entry.name).map_err(CoreError::from)?;
        validation::validate_price_cents(entry.labor_cents).map_err(CoreError::from)?;
        if let Some(material_cents) = entry.material_cents {
            validation::validate_price_cents(material_cents).map_err(CoreError::from)?;
        }

        let id = entry.id.clone();
        if let Some(existing) = self.services.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        } else {
            self.services.push(entry);
        }

        self.store.collections().save_services(&self.services).await?;
        self.draft.reconcile(&self.services);

        debug!(id = %id, "Service upserted");
        Ok(())
    }

    /// Deletes a service catalog entry and reconciles the draft (the row
    /// vanishes, custom rows survive).
    pub async fn delete_service(&mut self, entry_id: &str) -> StoreResult<()> {
        let before = self.services.len();
        self.services.retain(|e| e.id != entry_id);

        if self.services.len() == before {
            return Err(StoreError::not_found("Service", entry_id));
        }

        self.store.collections().save_services(&self.services).await?;
        self.draft.reconcile(&self.services);

        info!(id = %entry_id, "Service deleted");
        Ok(())
    }

    /// Inserts or replaces an inventory material.
    pub async fn upsert_material(&mut self, material: Material) -> StoreResult<()> {
        validation::validate_entry_name(&material.name).map_err(CoreError::from)?;
        validation::validate_price_cents(material.cost_cents).map_err(CoreError::from)?;
        validation::validate_stock(material.stock).map_err(CoreError::from)?;

        let id = material.id.clone();
        if let Some(existing) = self.materials.iter_mut().find(|m| m.id == material.id) {
            *existing = material;
        } else {
            self.materials.push(material);
        }

        self.store.collections().save_materials(&self.materials).await?;

        debug!(id = %id, "Material upserted");
        Ok(())
    }

    /// Deletes an inventory material.
    ///
    /// Catalog entries keep any link to the deleted id; the stock ledger
    /// silently skips links it cannot resolve.
    pub async fn delete_material(&mut self, material_id: &str) -> StoreResult<()> {
        let before = self.materials.len();
        self.materials.retain(|m| m.id != material_id);

        if self.materials.len() == before {
            return Err(StoreError::not_found("Material", material_id));
        }

        self.store.collections().save_materials(&self.materials).await?;

        info!(id = %material_id, "Material deleted");
        Ok(())
    }

    // =========================================================================
    // Settings & Profile
    // =========================================================================

    /// Persists new pricing settings and applies them to future pricing.
    pub async fn update_settings(&mut self, settings: RateSettings) -> StoreResult<()> {
        self.store.collections().save_settings(&settings).await?;
        self.settings = settings;

        info!("Settings updated");
        Ok(())
    }

    /// Persists the letterhead profile.
    pub async fn update_profile(&mut self, profile: UserProfile) -> StoreResult<()> {
        self.store.collections().save_profile(&profile).await?;
        self.profile = profile;

        info!("Profile updated");
        Ok(())
    }
}

// =============================================================================
// Id Generation
// =============================================================================

/// Generates a four-digit quote display code (1000-9999).
///
/// Codes can repeat across quotes; they are what the electrician reads out
/// on the phone, not a storage key. Lookups take the newest match.
fn generate_quote_id() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    (1000 + nanos % 9000).to_string()
}

/// Generates an id for a new catalog entry or material.
pub fn generate_catalog_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    async fn test_session() -> QuoteSession {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        QuoteSession::open(store).await.unwrap()
    }

    fn client(name: &str) -> ClientInfo {
        ClientInfo {
            name: name.to_string(),
            ..ClientInfo::default()
        }
    }

    fn stock_of(session: &QuoteSession, id: &str) -> i64 {
        session
            .materials()
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.stock)
            .unwrap()
    }

    #[tokio::test]
    async fn test_open_empty_store_falls_back_to_starter_data() {
        let session = test_session().await;

        assert_eq!(session.services().len(), 6);
        assert_eq!(session.materials().len(), 5);
        assert!(session.history().is_empty());
        assert_eq!(session.draft().items.len(), 6);
        assert_eq!(session.profile().company_name, "EletroSolutions");
    }

    #[tokio::test]
    async fn test_save_quote_full_flow() {
        let mut session = test_session().await;

        session.set_client(client("Maria Souza"));
        session.set_quantity("1", 2).unwrap();

        let quote = session.save_quote().await.unwrap();

        // Two power outlets at medium difficulty with default rates
        assert_eq!(quote.total_cents, 16800);
        assert_eq!(quote.id.len(), 4);
        assert_eq!(quote.status, QuoteStatus::Pending);
        assert_eq!(quote.date.len(), 11); // "23 Aug 2026"

        // History gained the quote at the front
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].id, quote.id);

        // Stock ledger ran: m1 -2, m5 -2, m3 -4
        assert_eq!(stock_of(&session, "m1"), 48);
        assert_eq!(stock_of(&session, "m5"), 98);
        assert_eq!(stock_of(&session, "m3"), 196);
        assert_eq!(stock_of(&session, "m2"), 40);

        // Draft reset
        assert!(session.draft().is_empty());
        assert!(session.draft().client.name.is_empty());
    }

    #[tokio::test]
    async fn test_save_quote_requires_client_name() {
        let mut session = test_session().await;
        session.set_quantity("1", 1).unwrap();

        let result = session.save_quote().await;
        assert!(matches!(result, Err(StoreError::Quote(_))));

        // Nothing was persisted or mutated
        assert!(session.history().is_empty());
        assert_eq!(stock_of(&session, "m1"), 50);
    }

    #[tokio::test]
    async fn test_save_quote_rejects_all_zero_draft() {
        let mut session = test_session().await;

        session.set_client(client("Maria Souza"));

        let result = session.save_quote().await;
        assert!(matches!(
            result,
            Err(StoreError::Quote(CoreError::EmptyDraft))
        ));
    }

    #[tokio::test]
    async fn test_failed_save_leaves_session_unchanged() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let mut session = QuoteSession::open(store.clone()).await.unwrap();

        session.set_client(client("Maria Souza"));
        session.set_quantity("1", 2).unwrap();

        // Pull the store out from under the session
        store.close().await;

        assert!(session.save_quote().await.is_err());

        // No quote landed, no stock moved, the draft survives for a retry
        assert!(session.history().is_empty());
        assert_eq!(stock_of(&session, "m1"), 50);
        assert_eq!(stock_of(&session, "m3"), 200);
        assert_eq!(session.draft().client.name, "Maria Souza");
        assert_eq!(session.draft().total_quantity(), 2);
    }

    #[tokio::test]
    async fn test_reopen_restores_persisted_state() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();

        let mut session = QuoteSession::open(store.clone()).await.unwrap();
        session.set_client(client("Maria Souza"));
        session.set_quantity("1", 2).unwrap();
        let quote = session.save_quote().await.unwrap();

        let reopened = QuoteSession::open(store).await.unwrap();
        assert_eq!(reopened.history().len(), 1);
        assert_eq!(reopened.history()[0].id, quote.id);
        assert_eq!(stock_of(&reopened, "m1"), 48);
    }

    #[tokio::test]
    async fn test_status_flip_and_search() {
        let mut session = test_session().await;

        session.set_client(client("Maria Souza"));
        session.set_quantity("1", 1).unwrap();
        let quote = session.save_quote().await.unwrap();

        session
            .set_quote_status(&quote.id, QuoteStatus::Approved)
            .await
            .unwrap();

        assert_eq!(session.quote(&quote.id).unwrap().status, QuoteStatus::Approved);
        assert_eq!(session.search_history(Some(QuoteStatus::Approved), "").len(), 1);
        assert_eq!(session.search_history(Some(QuoteStatus::Pending), "").len(), 0);

        // Case-insensitive client fragment
        assert_eq!(session.search_history(None, "maria").len(), 1);
        assert_eq!(session.search_history(None, "souza").len(), 1);
        assert_eq!(session.search_history(None, "pedro").len(), 0);

        assert!(matches!(
            session.set_quote_status("0000", QuoteStatus::Rejected).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_quote() {
        let mut session = test_session().await;

        session.set_client(client("Maria Souza"));
        session.set_quantity("2", 1).unwrap();
        let quote = session.save_quote().await.unwrap();

        session.delete_quote(&quote.id).await.unwrap();
        assert!(session.history().is_empty());

        // Deleting the paperwork does not restore stock
        assert_eq!(stock_of(&session, "m2"), 39);

        assert!(matches!(
            session.delete_quote(&quote.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_restore_draft_from_history() {
        let mut session = test_session().await;

        session.set_client(client("Maria Souza"));
        session.set_difficulty(Difficulty::Hard);
        session.set_quantity("1", 2).unwrap();
        let quote = session.save_quote().await.unwrap();

        assert!(session.draft().is_empty());

        session.restore_draft_from(&quote.id).unwrap();
        assert_eq!(session.draft().client.name, "Maria Souza");
        assert_eq!(session.draft().difficulty, Difficulty::Hard);
        assert_eq!(
            session
                .draft()
                .items
                .iter()
                .find(|i| i.id == "1")
                .unwrap()
                .quantity,
            2
        );
    }

    #[tokio::test]
    async fn test_catalog_edit_reconciles_draft() {
        let mut session = test_session().await;
        session.set_quantity("1", 2).unwrap();

        let mut entry = session.services()[0].clone();
        assert_eq!(entry.id, "1");
        entry.labor_cents = 9999;
        session.upsert_service(entry).await.unwrap();

        let row = session.draft().items.iter().find(|i| i.id == "1").unwrap();
        assert_eq!(row.quantity, 2); // quantity survives
        assert_eq!(row.labor_cents, 9999); // new price picked up

        session.delete_service("3").await.unwrap();
        assert_eq!(session.services().len(), 5);
        assert_eq!(session.draft().items.len(), 5);
    }

    #[tokio::test]
    async fn test_upsert_material_validates_input() {
        let mut session = test_session().await;

        let mut material = session.materials()[0].clone();
        material.stock = -5;
        assert!(session.upsert_material(material).await.is_err());

        let mut material = session.materials()[0].clone();
        material.cost_cents = -1;
        assert!(session.upsert_material(material).await.is_err());

        // Valid edit lands
        let mut material = session.materials()[0].clone();
        material.stock = 75;
        session.upsert_material(material).await.unwrap();
        assert_eq!(stock_of(&session, "m1"), 75);
    }

    #[tokio::test]
    async fn test_new_material_and_delete() {
        let mut session = test_session().await;

        let material = Material {
            id: generate_catalog_id(),
            name: "Junction Box".to_string(),
            unit: MaterialUnit::Piece,
            cost_cents: 6_00,
            stock: 30,
        };
        let id = material.id.clone();
        session.upsert_material(material).await.unwrap();
        assert_eq!(session.materials().len(), 6);

        session.delete_material(&id).await.unwrap();
        assert_eq!(session.materials().len(), 5);
        assert!(matches!(
            session.delete_material(&id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_custom_rows_price_and_save() {
        let mut session = test_session().await;

        let service_id = session.add_custom_service("Panel labeling", 30_00).unwrap();
        assert!(service_id.starts_with("custom-"));

        let material_id = session
            .add_custom_material("Conduit", MaterialUnit::Meter, 7_00)
            .unwrap();
        let row = session
            .draft()
            .items
            .iter()
            .find(|i| i.id == material_id)
            .unwrap();
        assert_eq!(row.name, "Conduit (m)");

        // labor 3000 × 1.3 = 3900; materials 700 + 20% of 3900 = 1480;
        // travel 6000 → total 11380
        let breakdown = session.price_draft();
        assert_eq!(breakdown.total_cents, 11380);

        session.set_client(client("Maria Souza"));
        session.save_quote().await.unwrap();

        // Custom rows never touch stock
        assert_eq!(stock_of(&session, "m1"), 50);
        assert_eq!(stock_of(&session, "m3"), 200);
    }

    #[tokio::test]
    async fn test_settings_update_changes_pricing() {
        let mut session = test_session().await;
        session.set_quantity("1", 2).unwrap();
        assert_eq!(session.price_draft().total_cents, 16800);

        let mut settings = session.settings().clone();
        settings.logistics.min_visit_fee_cents = 80_00;
        session.update_settings(settings).await.unwrap();

        assert_eq!(session.price_draft().total_cents, 18800);
    }

    #[tokio::test]
    async fn test_dashboard_summary() {
        let mut session = test_session().await;

        assert_eq!(session.dashboard_summary().total_quotes, 0);
        assert_eq!(session.dashboard_summary().approval_rate_bps, 0);

        session.set_client(client("Maria Souza"));
        session.set_quantity("1", 2).unwrap();
        let quote = session.save_quote().await.unwrap();

        let summary = session.dashboard_summary();
        assert_eq!(summary.total_quotes, 1);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.pending_total_cents, 16800);
        assert_eq!(summary.approved_count, 0);
        assert_eq!(summary.approval_rate_bps, 0);

        session
            .set_quote_status(&quote.id, QuoteStatus::Approved)
            .await
            .unwrap();

        let summary = session.dashboard_summary();
        assert_eq!(summary.pending_count, 0);
        assert_eq!(summary.pending_total_cents, 0);
        assert_eq!(summary.approved_count, 1);
        assert_eq!(summary.approved_total_cents, 16800);
        assert_eq!(summary.approval_rate_bps, 10_000);
    }
}
