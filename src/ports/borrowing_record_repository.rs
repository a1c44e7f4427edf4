use crate::domain::{BookId, BorrowingDetails, BorrowingRecord, BorrowingRecordId, CustomerId};
use async_trait::async_trait;

use super::{Page, PageRequest, Result};

/// 貸出記録リポジトリポート
///
/// 読み出した記録には利用者と書籍（著者を含む）が解決済みで含まれる。
#[async_trait]
pub trait BorrowingRecordRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> Result<Page<BorrowingRecord>>;

    async fn find_by_id(&self, id: BorrowingRecordId) -> Result<Option<BorrowingRecord>>;

    /// 新しい貸出記録を保存し、採番されたIDを返す
    ///
    /// 利用者と書籍の存在確認は呼び出し側の責務。
    async fn insert(&self, details: &BorrowingDetails) -> Result<BorrowingRecordId>;

    async fn update(&self, record: &BorrowingRecord) -> Result<()>;

    async fn delete_by_id(&self, id: BorrowingRecordId) -> Result<()>;

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> Result<Vec<BorrowingRecord>>;

    async fn find_by_book_id(&self, book_id: BookId) -> Result<Vec<BorrowingRecord>>;

    /// 書籍に未返却（return_date IS NULL）の記録があるか
    async fn exists_open_for_book(&self, book_id: BookId) -> Result<bool>;
}
