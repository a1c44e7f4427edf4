use crate::domain::{Author, AuthorDetails, AuthorId};
use async_trait::async_trait;

use super::{Deletion, Page, PageRequest, Result};

/// 著者リポジトリポート
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Author>>;

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>>;

    /// 新しい著者を保存し、採番されたIDを返す
    async fn insert(&self, details: &AuthorDetails) -> Result<AuthorId>;

    /// 既存の著者を上書き保存する
    async fn update(&self, author: &Author) -> Result<()>;

    /// 著者を削除する
    ///
    /// 存在しないIDは `Deleted` として扱う。書籍から参照されている場合は
    /// ストレージの外部キー制約により `Blocked` を返す。
    async fn delete_by_id(&self, id: AuthorId) -> Result<Deletion>;
}
