pub mod password_hasher;
pub mod repositories;
pub mod store;

pub use password_hasher::PasswordHasher;
pub use repositories::{
    AuthorRepository, BookRepository, BorrowingRecordRepository, CustomerRepository,
};
pub use store::MockCatalogStore;

use crate::application::catalog::ServiceDependencies;
use std::sync::Arc;

/// Build a full set of in-memory dependencies sharing one store
pub fn service_dependencies(store: Arc<MockCatalogStore>) -> ServiceDependencies {
    ServiceDependencies {
        authors: Arc::new(AuthorRepository::new(store.clone())),
        books: Arc::new(BookRepository::new(store.clone())),
        customers: Arc::new(CustomerRepository::new(store.clone())),
        borrowing_records: Arc::new(BorrowingRecordRepository::new(store)),
        password_hasher: Arc::new(PasswordHasher::new()),
    }
}
