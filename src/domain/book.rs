use chrono::NaiveDate;

use super::{Author, AuthorId, BookId};

/// 書籍
///
/// 著者は必須の参照で、読み出し時には解決済みの著者エンティティを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: Author,
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub available: bool,
}

/// 書籍の作成・更新に使う入力値
///
/// 著者はIDのみで指定され、アプリケーション層で存在確認される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    pub author_id: AuthorId,
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub available: bool,
}

impl Book {
    /// 採番済みIDと解決済みの著者から書籍を組み立てる
    pub fn from_details(id: BookId, details: BookDetails, author: Author) -> Self {
        debug_assert_eq!(details.author_id, author.id);
        Self {
            id,
            title: details.title,
            author,
            isbn: details.isbn,
            publication_date: details.publication_date,
            genre: details.genre,
            available: details.available,
        }
    }

    /// IDを除く全項目を置き換える
    pub fn replace_with(&mut self, details: BookDetails, author: Author) {
        debug_assert_eq!(details.author_id, author.id);
        self.title = details.title;
        self.author = author;
        self.isbn = details.isbn;
        self.publication_date = details.publication_date;
        self.genre = details.genre;
        self.available = details.available;
    }
}
