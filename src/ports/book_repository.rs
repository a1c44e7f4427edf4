use crate::domain::{Book, BookDetails, BookId};
use async_trait::async_trait;

use super::{Deletion, Page, PageRequest, Result};

/// 書籍リポジトリポート
///
/// 読み出した書籍には著者エンティティが解決済みで含まれる。
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Book>>;

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// 新しい書籍を保存し、採番されたIDを返す
    ///
    /// 著者の存在確認は呼び出し側の責務。
    async fn insert(&self, details: &BookDetails) -> Result<BookId>;

    async fn update(&self, book: &Book) -> Result<()>;

    /// 書籍と、その書籍の貸出記録を1トランザクションで削除する
    ///
    /// 未返却の貸出記録が残っている場合は何も削除せず `Blocked` を返す。
    /// 判定と削除は同じトランザクション内で行われる。
    async fn delete_by_id(&self, id: BookId) -> Result<Deletion>;

    /// タイトルの部分一致検索（大文字小文字を区別しない）
    async fn search_by_title(&self, title: &str) -> Result<Vec<Book>>;

    /// 著者名の部分一致検索（大文字小文字を区別しない）
    async fn search_by_author_name(&self, author_name: &str) -> Result<Vec<Book>>;

    /// ISBNの部分一致検索
    async fn search_by_isbn(&self, isbn: &str) -> Result<Vec<Book>>;
}
