use crate::domain::article::{Article, ArticlePayload};
use crate::domain::product::{Product, ProductPayload};
use crate::transport::http::handlers::{articles, health, products};
use crate::transport::http::types::{AppState, ErrorBody};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        articles::list_articles_handler,
        articles::get_article_handler,
        articles::create_article_handler,
        articles::update_article_handler,
        articles::delete_article_handler,
        products::index_products_handler,
        products::show_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler,
        products::selected_products_handler,
        products::available_products_handler,
        products::search_products_handler
    ),
    components(schemas(Article, ArticlePayload, Product, ProductPayload, ErrorBody))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/articles",
            get(articles::list_articles_handler).post(articles::create_article_handler),
        )
        .route(
            "/articles/:id",
            get(articles::get_article_handler)
                .put(articles::update_article_handler)
                .delete(articles::delete_article_handler),
        )
        .route(
            "/products",
            get(products::index_products_handler).post(products::create_product_handler),
        )
        .route("/products/selected", get(products::selected_products_handler))
        .route("/products/available", get(products::available_products_handler))
        .route("/products/search", get(products::search_products_handler))
        .route(
            "/products/:id",
            get(products::show_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}
