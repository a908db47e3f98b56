//! # Purchase Repository
//!
//! Database operations for purchases and their line items.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Recording a Purchase                              │
//! │                                                                         │
//! │  1. CHECK                                                               │
//! │     └── feira_core::validation::check_purchase()                        │
//! │         (bad input and under-tendered cash never reach SQL)             │
//! │                                                                         │
//! │  2. TRANSACTION                                                         │
//! │     ├── INSERT INTO purchases                                           │
//! │     └── INSERT INTO purchase_items (one row per line item)              │
//! │         (all or nothing: a purchase without its items is garbage)       │
//! │                                                                         │
//! │  3. COMMIT                                                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! History is small (one device, one market day at a time), so reads load
//! purchases and items in two queries and group in memory rather than
//! paginating.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use feira_core::validation::check_purchase;
use feira_core::{LineItem, PaymentMethod, Purchase};

// =============================================================================
// Row Types
// =============================================================================

/// A row of the `purchases` table.
#[derive(Debug, sqlx::FromRow)]
struct PurchaseRow {
    id: String,
    operator: String,
    method: PaymentMethod,
    tendered_cents: Option<i64>,
    created_at: DateTime<Utc>,
}

/// A row of the `purchase_items` table.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    purchase_id: String,
    name: String,
    quantity: i64,
    unit_price_cents: i64,
    original_price_cents: Option<i64>,
}

impl PurchaseRow {
    fn into_purchase(self, items: Vec<LineItem>) -> Purchase {
        Purchase {
            id: self.id,
            operator: self.operator,
            method: self.method,
            tendered_cents: self.tendered_cents,
            items,
            created_at: self.created_at,
        }
    }
}

impl From<ItemRow> for LineItem {
    fn from(row: ItemRow) -> Self {
        LineItem {
            name: row.name,
            quantity: row.quantity,
            unit_price_cents: row.unit_price_cents,
            original_price_cents: row.original_price_cents,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for purchase database operations.
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    pool: SqlitePool,
}

impl PurchaseRepository {
    /// Creates a new PurchaseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseRepository { pool }
    }

    /// Inserts a purchase and its line items in one transaction.
    ///
    /// Checks the business rules first; invalid input (including cash
    /// tendered below the total) fails with
    /// [`crate::DbError::InvalidPurchase`] before any SQL runs.
    pub async fn insert(&self, purchase: &Purchase) -> DbResult<()> {
        check_purchase(purchase)?;

        debug!(id = %purchase.id, items = purchase.items.len(), "Inserting purchase");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO purchases (id, operator, method, tendered_cents, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&purchase.id)
        .bind(&purchase.operator)
        .bind(purchase.method)
        .bind(purchase.tendered_cents)
        .bind(purchase.created_at)
        .execute(&mut *tx)
        .await?;

        for (position, item) in purchase.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO purchase_items
                    (purchase_id, position, name, quantity, unit_price_cents, original_price_cents)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(&purchase.id)
            .bind(position as i64)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.unit_price_cents)
            .bind(item.original_price_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Returns the full purchase history, newest first, items in the
    /// order they were rung up.
    pub async fn get_all(&self) -> DbResult<Vec<Purchase>> {
        let rows: Vec<PurchaseRow> = sqlx::query_as(
            r#"
            SELECT id, operator, method, tendered_cents, created_at
            FROM purchases
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let item_rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT purchase_id, name, quantity, unit_price_cents, original_price_cents
            FROM purchase_items
            ORDER BY purchase_id, position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_purchase: HashMap<String, Vec<LineItem>> = HashMap::new();
        for row in item_rows {
            items_by_purchase
                .entry(row.purchase_id.clone())
                .or_default()
                .push(row.into());
        }

        let purchases = rows
            .into_iter()
            .map(|row| {
                let items = items_by_purchase.remove(&row.id).unwrap_or_default();
                row.into_purchase(items)
            })
            .collect();

        Ok(purchases)
    }

    /// Gets a purchase by ID (for reprinting from the receipt's printed id).
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Purchase>> {
        let row: Option<PurchaseRow> = sqlx::query_as(
            r#"
            SELECT id, operator, method, tendered_cents, created_at
            FROM purchases
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT purchase_id, name, quantity, unit_price_cents, original_price_cents
            FROM purchase_items
            WHERE purchase_id = ?1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let items = item_rows.into_iter().map(LineItem::from).collect();

        Ok(Some(row.into_purchase(items)))
    }

    /// Counts all purchases.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchases")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::DbError;
    use chrono::TimeZone;
    use uuid::Uuid;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn purchase(method: PaymentMethod, created_at: DateTime<Utc>) -> Purchase {
        Purchase {
            id: Uuid::new_v4().to_string(),
            operator: "Maria".to_string(),
            method,
            tendered_cents: None,
            items: vec![
                LineItem {
                    name: "Pastel".to_string(),
                    quantity: 2,
                    unit_price_cents: 800,
                    original_price_cents: None,
                },
                LineItem {
                    name: "Caldo de cana".to_string(),
                    quantity: 1,
                    unit_price_cents: 600,
                    original_price_cents: Some(800),
                },
            ],
            created_at,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let db = test_db().await;
        let repo = db.purchases();

        let original = purchase(PaymentMethod::Cash, Utc::now());
        repo.insert(&original).await.unwrap();

        let loaded = repo.get_by_id(&original.id).await.unwrap().unwrap();
        assert_eq!(loaded.id, original.id);
        assert_eq!(loaded.operator, "Maria");
        assert_eq!(loaded.method, PaymentMethod::Cash);
        assert_eq!(loaded.items.len(), 2);
        // Items come back in ring-up order.
        assert_eq!(loaded.items[0].name, "Pastel");
        assert_eq!(loaded.items[1].original_price_cents, Some(800));
        assert_eq!(loaded.total_cents(), 2200);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = test_db().await;
        let missing = db
            .purchases()
            .get_by_id(&Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_all_newest_first() {
        let db = test_db().await;
        let repo = db.purchases();

        let morning = Utc.with_ymd_and_hms(2026, 3, 12, 9, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2026, 3, 12, 12, 0, 0).unwrap();

        let first = purchase(PaymentMethod::Pix, morning);
        let second = purchase(PaymentMethod::Card, noon);
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
        assert_eq!(all[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        let repo = db.purchases();

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.insert(&purchase(PaymentMethod::Cash, Utc::now()))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_purchase() {
        let db = test_db().await;
        let repo = db.purchases();

        let mut bad = purchase(PaymentMethod::Cash, Utc::now());
        bad.items.clear();

        let err = repo.insert(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidPurchase(_)));
        // Nothing was written.
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_insufficient_tender() {
        let db = test_db().await;
        let repo = db.purchases();

        // Fixture totals 2200 centavos; the customer handed over 10,00.
        let mut short = purchase(PaymentMethod::Cash, Utc::now());
        short.tendered_cents = Some(1000);

        let err = repo.insert(&short).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::InvalidPurchase(feira_core::CoreError::InsufficientTender { .. })
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_id_maps_to_unique_violation() {
        let db = test_db().await;
        let repo = db.purchases();

        let p = purchase(PaymentMethod::Cash, Utc::now());
        repo.insert(&p).await.unwrap();

        let err = repo.insert(&p).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_method_round_trips_as_snake_case_text() {
        let db = test_db().await;
        let repo = db.purchases();

        let p = purchase(PaymentMethod::Pix, Utc::now());
        repo.insert(&p).await.unwrap();

        let raw: String = sqlx::query_scalar("SELECT method FROM purchases WHERE id = ?1")
            .bind(&p.id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(raw, "pix");

        let loaded = repo.get_by_id(&p.id).await.unwrap().unwrap();
        assert_eq!(loaded.method, PaymentMethod::Pix);
    }
}
