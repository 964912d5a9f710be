use catalog_api::infra::config;
use catalog_api::storage;
use catalog_api::transport;
use catalog_api::{SqliteArticleStore, SqliteProductStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_api=info,tower_http=info")),
        )
        .init();

    let database_url = config::database_url();
    let pool = storage::init_pool(&database_url).await?;
    storage::run_migrations(&pool).await?;
    tracing::info!("database ready");

    let app_state = transport::http::AppState {
        articles: Arc::new(SqliteArticleStore::new(pool.clone())),
        products: Arc::new(SqliteProductStore::new(pool.clone())),
        pool,
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "API server listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
