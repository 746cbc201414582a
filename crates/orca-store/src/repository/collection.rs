//! # Collection Repository
//!
//! Store operations for named JSON collections.
//!
//! ## Key Operations
//! - Generic load/save of any serde type under a collection name
//! - Batched multi-collection save in one transaction
//! - Typed wrappers for the five well-known collections
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Row Per Collection                               │
//! │                                                                         │
//! │  QuoteSession works on whole collections, not individual rows:         │
//! │  the service catalog, the material list, the quote history. Each is    │
//! │  persisted as a single JSON document keyed by collection name.         │
//! │                                                                         │
//! │  ┌──────────────┬──────────────────────────────┬─────────────────────┐ │
//! │  │ name         │ payload                      │ updated_at          │ │
//! │  ├──────────────┼──────────────────────────────┼─────────────────────┤ │
//! │  │ settings     │ {"baseServices":{...},...}   │ 2026-08-23T14:02:11 │ │
//! │  │ services     │ [{"id":"1","name":...},...]  │ 2026-08-23T14:02:11 │ │
//! │  │ materials    │ [{"id":"m1","stock":48},...] │ 2026-08-23T14:05:40 │ │
//! │  │ history      │ [{"id":"4821",...},...]      │ 2026-08-23T14:05:40 │ │
//! │  │ user-profile │ {"name":"João Silva",...}    │ 2026-08-23T14:02:11 │ │
//! │  └──────────────┴──────────────────────────────┴─────────────────────┘ │
//! │                                                                         │
//! │  Writes are full-document replaces (UPSERT). Collections are small     │
//! │  (tens of services, hundreds of quotes) so this stays fast.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::collection;
use crate::error::{StoreError, StoreResult};
use orca_core::{Material, Quote, RateSettings, ServiceCatalogEntry, UserProfile};

/// Repository for collection load/save operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CollectionRepository::new(pool);
///
/// // Typed access to well-known collections
/// let settings = repo.load_settings().await?;
///
/// // Generic access by name
/// let raw: Option<serde_json::Value> = repo.load("history").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: SqlitePool,
}

impl CollectionRepository {
    /// Creates a new CollectionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CollectionRepository { pool }
    }

    // =========================================================================
    // Generic Operations
    // =========================================================================

    /// Loads a collection by name and deserializes its payload.
    ///
    /// ## Returns
    /// * `Ok(Some(T))` - Collection exists and parsed
    /// * `Ok(None)` - No row under this name (first run)
    /// * `Err(StoreError::Payload)` - Row exists but JSON doesn't match `T`
    pub async fn load<T: DeserializeOwned>(&self, name: &str) -> StoreResult<Option<T>> {
        debug!(name = %name, "Loading collection");

        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM collections WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        match payload {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Saves a collection, replacing any previous payload under the name.
    ///
    /// ## Arguments
    /// * `name` - Collection name (see [`crate::collection`] constants)
    /// * `value` - Any serde-serializable value; stored as a JSON document
    pub async fn save<T: Serialize>(&self, name: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value)?;

        debug!(name = %name, bytes = payload.len(), "Saving collection");

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO collections (name, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(name)
        .bind(&payload)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Saves several collections in one transaction.
    ///
    /// ## Why A Transaction
    /// Saving a quote touches two collections: history gains the quote and
    /// materials lose stock. Writing both atomically means a crash between
    /// the two can never leave a quote recorded without its deduction.
    ///
    /// ## Arguments
    /// * `entries` - `(name, serialized payload)` pairs
    pub async fn save_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        debug!(count = entries.len(), "Saving collections in one transaction");

        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        for (name, payload) in entries {
            sqlx::query(
                r#"
                INSERT INTO collections (name, payload, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(name) DO UPDATE SET
                    payload = excluded.payload,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(name)
            .bind(payload)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes a collection by name.
    ///
    /// ## Returns
    /// * `Ok(())` - Collection removed
    /// * `Err(StoreError::NotFound)` - No row under this name
    pub async fn delete(&self, name: &str) -> StoreResult<()> {
        debug!(name = %name, "Deleting collection");

        let result = sqlx::query("DELETE FROM collections WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Collection", name));
        }

        Ok(())
    }

    /// Lists all collection names currently stored.
    ///
    /// ## Usage
    /// For diagnostics and the seed tool.
    pub async fn list_names(&self) -> StoreResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM collections ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    // =========================================================================
    // Typed Wrappers
    // =========================================================================

    /// Loads the rate settings collection.
    pub async fn load_settings(&self) -> StoreResult<Option<RateSettings>> {
        self.load(collection::SETTINGS).await
    }

    /// Saves the rate settings collection.
    pub async fn save_settings(&self, settings: &RateSettings) -> StoreResult<()> {
        self.save(collection::SETTINGS, settings).await
    }

    /// Loads the service catalog collection.
    pub async fn load_services(&self) -> StoreResult<Option<Vec<ServiceCatalogEntry>>> {
        self.load(collection::SERVICES).await
    }

    /// Saves the service catalog collection.
    pub async fn save_services(&self, services: &[ServiceCatalogEntry]) -> StoreResult<()> {
        self.save(collection::SERVICES, &services).await
    }

    /// Loads the material inventory collection.
    pub async fn load_materials(&self) -> StoreResult<Option<Vec<Material>>> {
        self.load(collection::MATERIALS).await
    }

    /// Saves the material inventory collection.
    pub async fn save_materials(&self, materials: &[Material]) -> StoreResult<()> {
        self.save(collection::MATERIALS, &materials).await
    }

    /// Loads the quote history collection (newest first).
    pub async fn load_history(&self) -> StoreResult<Option<Vec<Quote>>> {
        self.load(collection::HISTORY).await
    }

    /// Saves the quote history collection.
    pub async fn save_history(&self, history: &[Quote]) -> StoreResult<()> {
        self.save(collection::HISTORY, &history).await
    }

    /// Loads the user profile collection.
    pub async fn load_profile(&self) -> StoreResult<Option<UserProfile>> {
        self.load(collection::USER_PROFILE).await
    }

    /// Saves the user profile collection.
    pub async fn save_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        self.save(collection::USER_PROFILE, profile).await
    }

    /// Saves quote history and material inventory atomically.
    ///
    /// ## When To Call
    /// After pricing a quote: the quote lands in history and the stock
    /// deduction lands in materials, in the same transaction.
    pub async fn save_history_and_materials(
        &self,
        history: &[Quote],
        materials: &[Material],
    ) -> StoreResult<()> {
        let entries = [
            (collection::HISTORY, serde_json::to_string(&history)?),
            (collection::MATERIALS, serde_json::to_string(&materials)?),
        ];

        self.save_many(&entries).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use orca_core::{catalog, MarginRate};

    async fn test_repo() -> CollectionRepository {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        store.collections()
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let repo = test_repo().await;

        let settings = repo.load_settings().await.unwrap();
        assert!(settings.is_none());
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let repo = test_repo().await;

        let settings = RateSettings::default();
        repo.save_settings(&settings).await.unwrap();

        let loaded = repo.load_settings().await.unwrap().unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_payload() {
        let repo = test_repo().await;

        let mut settings = RateSettings::default();
        repo.save_settings(&settings).await.unwrap();

        settings.multipliers.global_profit = MarginRate::from_bps(2500);
        repo.save_settings(&settings).await.unwrap();

        let loaded = repo.load_settings().await.unwrap().unwrap();
        assert_eq!(loaded.multipliers.global_profit, MarginRate::from_bps(2500));

        // Still one row, not two
        let names = repo.list_names().await.unwrap();
        assert_eq!(names, vec![collection::SETTINGS.to_string()]);
    }

    #[tokio::test]
    async fn test_materials_round_trip_preserves_order_and_stock() {
        let repo = test_repo().await;

        let materials = catalog::starter_materials();
        repo.save_materials(&materials).await.unwrap();

        let loaded = repo.load_materials().await.unwrap().unwrap();
        assert_eq!(loaded.len(), materials.len());
        for (original, roundtripped) in materials.iter().zip(loaded.iter()) {
            assert_eq!(roundtripped.id, original.id);
            assert_eq!(roundtripped.stock, original.stock);
        }
    }

    #[tokio::test]
    async fn test_save_many_writes_all_entries() {
        let repo = test_repo().await;

        repo.save_history_and_materials(&[], &catalog::starter_materials())
            .await
            .unwrap();

        let names = repo.list_names().await.unwrap();
        assert_eq!(
            names,
            vec![
                collection::HISTORY.to_string(),
                collection::MATERIALS.to_string(),
            ]
        );

        let history = repo.load_history().await.unwrap().unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = test_repo().await;

        let result = repo.delete("ghost").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_collection() {
        let repo = test_repo().await;

        repo.save_profile(&UserProfile::default()).await.unwrap();
        repo.delete(collection::USER_PROFILE).await.unwrap();

        let profile = repo.load_profile().await.unwrap();
        assert!(profile.is_none());
    }
}
