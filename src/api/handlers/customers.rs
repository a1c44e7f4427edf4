use crate::application::catalog;
use crate::domain::CustomerId;
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
    types::{CustomerRequest, CustomerResponse, PageQuery, PageResponse},
};

/// GET /customers?page=N
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<CustomerResponse>>, ApiError> {
    let page = catalog::list_customers(&state.service_deps, query.to_request()).await?;
    Ok(Json(PageResponse::from_page(page)))
}

/// GET /customers/:id
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = catalog::get_customer(&state.service_deps, CustomerId::new(id)).await?;
    Ok(Json(customer.into()))
}

/// POST /customers
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    req.validate()?;

    let customer = catalog::create_customer(&state.service_deps, req.into_details()).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// PUT /customers/:id
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    req.validate()?;

    let customer =
        catalog::update_customer(&state.service_deps, CustomerId::new(id), req.into_details())
            .await?;
    Ok(Json(customer.into()))
}

/// DELETE /customers/:id
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_customer(&state.service_deps, CustomerId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
