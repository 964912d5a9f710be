pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::article::{Article, ArticlePayload};
pub use domain::product::{Product, ProductPayload};
pub use storage::articles::{ArticleStore, SqliteArticleStore};
pub use storage::products::{ProductStore, SqliteProductStore};
