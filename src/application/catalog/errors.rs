use crate::ports::MissingReference;
use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("There is no Author with this ID")]
    AuthorNotFound,

    #[error("There is no Book with this ID")]
    BookNotFound,

    #[error("There is no Customer with this ID")]
    CustomerNotFound,

    #[error("There is no Record with this ID")]
    BorrowingRecordNotFound,

    /// 書き込み時に参照先（著者・利用者・書籍）が存在しない
    #[error("{0}")]
    ReferencedEntityNotFound(String),

    /// 検索パラメータの指定が不正
    #[error("{0}")]
    InvalidSearch(String),

    /// 入力値の検証エラー
    #[error("{0}")]
    Validation(String),

    /// 未返却の貸出記録があるため書籍を削除できない
    #[error("This book is borrowed and can't be deleted now.")]
    BookCurrentlyBorrowed,

    /// 書籍から参照されているため著者を削除できない
    #[error("This author still has books and can't be deleted now.")]
    AuthorHasBooks,

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// パスワードハッシュのエラー
    #[error("Password hashing error")]
    PasswordHashError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// 書き込みエラーを変換する
    ///
    /// 参照先が書き込みまでの間に消えていた場合は `ReferencedEntityNotFound`。
    pub(super) fn from_write(err: Box<dyn std::error::Error + Send + Sync>, message: &str) -> Self {
        if err.is::<MissingReference>() {
            CatalogError::ReferencedEntityNotFound(message.to_string())
        } else {
            CatalogError::RepositoryError(err)
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
