use crate::ports::*;
use std::sync::Arc;

/// サービスの依存関係
///
/// 起動時に明示的に組み立てられ、各サービス関数に引数として渡される。
/// PostgreSQLアダプターでもインメモリアダプターでも同じ形で差し替えられる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub authors: Arc<dyn AuthorRepository>,
    pub books: Arc<dyn BookRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub borrowing_records: Arc<dyn BorrowingRecordRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
}
