use crate::domain::product::{Product, ProductPayload};
use crate::storage::Pool;
use anyhow::Result;
use async_trait::async_trait;
use tracing::instrument;

const PRODUCT_COLUMNS: &str = "id, name, price, quantity, selected, available";

/// Narrow persistence interface for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;
    async fn find(&self, id: i64) -> Result<Option<Product>>;
    async fn insert(&self, payload: &ProductPayload) -> Result<Product>;
    /// Full overwrite of all five mutable fields. Returns `None` when `id` is absent.
    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<Option<Product>>;
    /// Returns `false` when `id` is absent.
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn list_selected(&self) -> Result<Vec<Product>>;
    async fn list_available(&self) -> Result<Vec<Product>>;
    /// Substring match on `name` via `LIKE '%term%'`. An empty term matches
    /// every row.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>>;
}

pub struct SqliteProductStore {
    pool: Pool,
}

impl SqliteProductStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    #[instrument(skip_all)]
    async fn list(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    #[instrument(skip_all)]
    async fn insert(&self, payload: &ProductPayload) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price, quantity, selected, available) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.quantity)
        .bind(payload.selected)
        .bind(payload.available)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    #[instrument(skip(self, payload))]
    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET name = ?, price = ?, quantity = ?, selected = ?, available = ? \
             WHERE id = ? RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.quantity)
        .bind(payload.selected)
        .bind(payload.available)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip_all)]
    async fn list_selected(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE selected = TRUE ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    #[instrument(skip_all)]
    async fn list_available(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE available = TRUE ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        let pattern = format!("%{}%", term);
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE name LIKE ? ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }
}
