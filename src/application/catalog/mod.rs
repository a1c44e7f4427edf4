mod author_service;
mod book_service;
mod borrowing_service;
mod customer_service;
mod dependencies;
mod errors;

pub use author_service::{create_author, delete_author, get_author, list_authors, update_author};
pub use book_service::{
    BookSearchQuery, create_book, delete_book, get_book, list_books, search_books, update_book,
};
pub use borrowing_service::{
    BorrowingSearchQuery, create_borrowing, delete_borrowing, get_borrowing, list_borrowings,
    search_borrowings, update_borrowing,
};
pub use customer_service::{
    create_customer, delete_customer, get_customer, list_customers, update_customer,
};
pub use dependencies::ServiceDependencies;
pub use errors::{CatalogError, Result};
