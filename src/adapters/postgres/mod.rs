pub mod author_repository;
pub mod book_repository;
pub mod borrowing_record_repository;
pub mod customer_repository;
mod rows;

// パブリックに型を再エクスポート
pub use author_repository::AuthorRepository as PostgresAuthorRepository;
pub use book_repository::BookRepository as PostgresBookRepository;
pub use borrowing_record_repository::BorrowingRecordRepository as PostgresBorrowingRecordRepository;
pub use customer_repository::CustomerRepository as PostgresCustomerRepository;
