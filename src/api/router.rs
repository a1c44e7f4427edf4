use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, authors, books, borrowings, customers};

/// Creates the API router with all catalog endpoints
///
/// Each resource exposes the same shape:
/// - GET /{resource}?page=N - paged list (5 per page)
/// - POST /{resource} - create
/// - GET|PUT|DELETE /{resource}/:id - fetch, full update, delete
///
/// Search endpoints:
/// - GET /books/search?title=|author=|isbn=
/// - GET /borrowings/search?userId=|bookId=
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route(
            "/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(books::search_books))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route(
            "/borrowings",
            get(borrowings::list_borrowings).post(borrowings::create_borrowing),
        )
        .route("/borrowings/search", get(borrowings::search_borrowings))
        .route(
            "/borrowings/:id",
            get(borrowings::get_borrowing)
                .put(borrowings::update_borrowing)
                .delete(borrowings::delete_borrowing),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
