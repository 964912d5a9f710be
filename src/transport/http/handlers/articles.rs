use crate::domain::article::{Article, ArticlePayload};
use crate::transport::http::types::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

const ARTICLE_NOT_FOUND: &str = "Article non trouvé";

fn validated(payload: ArticlePayload) -> Result<ArticlePayload, ApiError> {
    let violations = payload.validate();
    if violations.is_empty() {
        Ok(payload)
    } else {
        Err(ApiError::Validation(violations))
    }
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All articles", body = [Article]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_articles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(state.articles.list().await?))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = Article),
        (status = 404, description = "No such article", body = ErrorBody)
    )
)]
pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .articles
        .find(id)
        .await?
        .ok_or(ApiError::NotFound(ARTICLE_NOT_FOUND))?;
    Ok(Json(article))
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = ArticlePayload,
    responses(
        (status = 201, description = "Article created", body = Article),
        (status = 400, description = "Invalid JSON or validation failure", body = ErrorBody)
    )
)]
pub async fn create_article_handler(
    State(state): State<AppState>,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidJson)?;
    let payload = validated(payload)?;
    let article = state.articles.insert(&payload).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "Article overwritten", body = Article),
        (status = 400, description = "Invalid JSON or validation failure", body = ErrorBody),
        (status = 404, description = "No such article", body = ErrorBody)
    )
)]
pub async fn update_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> Result<Json<Article>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidJson)?;
    let payload = validated(payload)?;
    let article = state
        .articles
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound(ARTICLE_NOT_FOUND))?;
    Ok(Json(article))
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article removed"),
        (status = 404, description = "No such article", body = ErrorBody)
    )
)]
pub async fn delete_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.articles.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(ARTICLE_NOT_FOUND))
    }
}
