use crate::domain::article::{Article, ArticlePayload};
use crate::storage::Pool;
use anyhow::Result;
use async_trait::async_trait;
use tracing::instrument;

/// Narrow persistence interface for articles. Handlers depend on this trait,
/// never on the pool itself.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Article>>;
    async fn find(&self, id: i64) -> Result<Option<Article>>;
    async fn insert(&self, payload: &ArticlePayload) -> Result<Article>;
    /// Full overwrite of both mutable fields. Returns `None` when `id` is absent.
    async fn update(&self, id: i64, payload: &ArticlePayload) -> Result<Option<Article>>;
    /// Returns `false` when `id` is absent.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct SqliteArticleStore {
    pool: Pool,
}

impl SqliteArticleStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for SqliteArticleStore {
    #[instrument(skip_all)]
    async fn list(&self) -> Result<Vec<Article>> {
        let articles =
            sqlx::query_as::<_, Article>("SELECT id, title, content FROM articles ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(articles)
    }

    #[instrument(skip(self))]
    async fn find(&self, id: i64) -> Result<Option<Article>> {
        let article =
            sqlx::query_as::<_, Article>("SELECT id, title, content FROM articles WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(article)
    }

    #[instrument(skip_all)]
    async fn insert(&self, payload: &ArticlePayload) -> Result<Article> {
        let article = sqlx::query_as::<_, Article>(
            "INSERT INTO articles (title, content) VALUES (?, ?) RETURNING id, title, content",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .fetch_one(&self.pool)
        .await?;
        Ok(article)
    }

    #[instrument(skip(self, payload))]
    async fn update(&self, id: i64, payload: &ArticlePayload) -> Result<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(
            "UPDATE articles SET title = ?, content = ? WHERE id = ? RETURNING id, title, content",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(article)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
