use crate::domain::product::{Product, ProductPayload};
use crate::transport::http::types::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

const PRODUCT_NOT_FOUND: &str = "Product not found";

fn validated(payload: ProductPayload) -> Result<ProductPayload, ApiError> {
    let violations = payload.validate();
    if violations.is_empty() {
        Ok(payload)
    } else {
        Err(ApiError::Validation(violations))
    }
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn index_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No such product", body = ErrorBody)
    )
)]
pub async fn show_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .find(id)
        .await?
        .ok_or(ApiError::NotFound(PRODUCT_NOT_FOUND))?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid JSON or validation failure", body = ErrorBody)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidJson)?;
    let payload = validated(payload)?;
    let product = state.products.insert(&payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product overwritten", body = Product),
        (status = 400, description = "Invalid JSON or validation failure", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidJson)?;
    let payload = validated(payload)?;
    let product = state
        .products
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound(PRODUCT_NOT_FOUND))?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product removed"),
        (status = 404, description = "No such product", body = ErrorBody)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.products.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(PRODUCT_NOT_FOUND))
    }
}

#[utoipa::path(
    get,
    path = "/products/selected",
    responses((status = 200, description = "Products with selected = true", body = [Product]))
)]
pub async fn selected_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list_selected().await?))
}

#[utoipa::path(
    get,
    path = "/products/available",
    responses((status = 200, description = "Products with available = true", body = [Product]))
)]
pub async fn available_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list_available().await?))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to match against product names. Absent or empty matches all.
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/products/search",
    params(("name" = Option<String>, Query, description = "Name substring to match")),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 404, description = "No match")
    )
)]
pub async fn search_products_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<axum::response::Response, ApiError> {
    let products = state.products.search_by_name(&query.name).await?;
    if products.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "No products found" })),
        )
            .into_response());
    }
    Ok(Json(products).into_response())
}
