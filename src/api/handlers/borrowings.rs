use crate::application::catalog::{self, BorrowingSearchQuery};
use crate::domain::{BookId, BorrowingRecordId, CustomerId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::AppState;
use crate::api::{
    JsonBody,
    error::ApiError,
    types::{
        BorrowingRecordResponse, BorrowingRequest, BorrowingSearchParams, PageQuery, PageResponse,
    },
};

/// GET /borrowings?page=N
pub async fn list_borrowings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<BorrowingRecordResponse>>, ApiError> {
    let page = catalog::list_borrowings(&state.service_deps, query.to_request()).await?;
    Ok(Json(PageResponse::from_page(page)))
}

/// GET /borrowings/:id
pub async fn get_borrowing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BorrowingRecordResponse>, ApiError> {
    let record = catalog::get_borrowing(&state.service_deps, BorrowingRecordId::new(id)).await?;
    Ok(Json(record.into()))
}

/// POST /borrowings - 貸出記録を作成
///
/// 利用者または書籍が存在しない場合は404を返し、何も保存しない。
pub async fn create_borrowing(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<BorrowingRequest>,
) -> Result<(StatusCode, Json<BorrowingRecordResponse>), ApiError> {
    let record = catalog::create_borrowing(&state.service_deps, req.into_details()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// PUT /borrowings/:id - 貸出記録を更新（返却日の記録もこれで行う）
pub async fn update_borrowing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<BorrowingRequest>,
) -> Result<Json<BorrowingRecordResponse>, ApiError> {
    let record = catalog::update_borrowing(
        &state.service_deps,
        BorrowingRecordId::new(id),
        req.into_details(),
    )
    .await?;
    Ok(Json(record.into()))
}

/// DELETE /borrowings/:id
pub async fn delete_borrowing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_borrowing(&state.service_deps, BorrowingRecordId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /borrowings/search - 貸出記録検索
///
/// クエリパラメータ（どちらか一方を指定）:
/// - userId: 利用者ID
/// - bookId: 書籍ID
pub async fn search_borrowings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BorrowingSearchParams>,
) -> Result<Json<Vec<BorrowingRecordResponse>>, ApiError> {
    let query = BorrowingSearchQuery {
        customer_id: params.user_id.map(CustomerId::new),
        book_id: params.book_id.map(BookId::new),
    };

    let records = catalog::search_borrowings(&state.service_deps, query).await?;
    Ok(Json(
        records
            .into_iter()
            .map(BorrowingRecordResponse::from)
            .collect(),
    ))
}
