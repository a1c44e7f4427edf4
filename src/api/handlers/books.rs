use crate::application::catalog::{self, BookSearchQuery};
use crate::domain::BookId;
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
    types::{BookRequest, BookResponse, BookSearchParams, PageQuery, PageResponse},
};

/// GET /books?page=N - 書籍一覧（1ページ5件）
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<BookResponse>>, ApiError> {
    let page = catalog::list_books(&state.service_deps, query.to_request()).await?;
    Ok(Json(PageResponse::from_page(page)))
}

/// GET /books/:id - 書籍詳細（著者を含む）
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = catalog::get_book(&state.service_deps, BookId::new(id)).await?;
    Ok(Json(book.into()))
}

/// POST /books - 書籍を作成
///
/// 参照する著者が存在しない場合は404を返す。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    req.validate()?;

    let book = catalog::create_book(&state.service_deps, req.into_details()).await?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// PUT /books/:id - 書籍を更新（全項目置き換え）
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    req.validate()?;

    let book =
        catalog::update_book(&state.service_deps, BookId::new(id), req.into_details()).await?;
    Ok(Json(book.into()))
}

/// DELETE /books/:id - 書籍を削除
///
/// 貸出中の書籍は削除できず409を返す。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_book(&state.service_deps, BookId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /books/search - 書籍検索
///
/// クエリパラメータ（ちょうど1つを指定）:
/// - title: タイトルの部分一致
/// - author: 著者名の部分一致
/// - isbn: ISBNの部分一致
pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookSearchParams>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let query = BookSearchQuery {
        title: params.title,
        author: params.author,
        isbn: params.isbn,
    };

    let books = catalog::search_books(&state.service_deps, query).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
