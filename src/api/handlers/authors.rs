use crate::application::catalog;
use crate::domain::AuthorId;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use validator::Validate;

use super::AppState;
use crate::api::{
    JsonBody,
    error::ApiError,
    types::{AuthorRequest, AuthorResponse, PageQuery, PageResponse},
};

/// GET /authors?page=N - 著者一覧（1ページ5件）
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<AuthorResponse>>, ApiError> {
    let page = catalog::list_authors(&state.service_deps, query.to_request()).await?;
    Ok(Json(PageResponse::from_page(page)))
}

/// GET /authors/:id - 著者詳細
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author = catalog::get_author(&state.service_deps, AuthorId::new(id)).await?;
    Ok(Json(author.into()))
}

/// POST /authors - 著者を作成
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), ApiError> {
    req.validate()?;

    let author = catalog::create_author(&state.service_deps, req.into_details()).await?;
    Ok((StatusCode::CREATED, Json(author.into())))
}

/// PUT /authors/:id - 著者を更新（全項目置き換え）
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<AuthorRequest>,
) -> Result<Json<AuthorResponse>, ApiError> {
    req.validate()?;

    let author =
        catalog::update_author(&state.service_deps, AuthorId::new(id), req.into_details()).await?;
    Ok(Json(author.into()))
}

/// DELETE /authors/:id - 著者を削除
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_author(&state.service_deps, AuthorId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
