pub mod author_repository;
pub mod book_repository;
pub mod borrowing_record_repository;
pub mod customer_repository;
pub mod pagination;
pub mod password_hasher;

pub use author_repository::AuthorRepository;
pub use book_repository::BookRepository;
pub use borrowing_record_repository::BorrowingRecordRepository;
pub use customer_repository::CustomerRepository;
pub use pagination::{Page, PageRequest};
pub use password_hasher::PasswordHasher;

/// ポート共通の Result 型
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 削除操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// 削除した（または元から存在しなかった）
    Deleted,
    /// 参照や貸出中の記録が残っているため削除しなかった
    Blocked,
}

/// 書き込み時に参照先の行が存在しなかった（外部キー制約違反）
///
/// 参照先の存在確認と書き込みの間に参照先が削除された場合に返る。
#[derive(Debug, thiserror::Error)]
#[error("referenced row does not exist")]
pub struct MissingReference;
