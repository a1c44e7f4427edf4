use crate::domain::{Author, AuthorId, Book, BookDetails, BookId, BookSearch};
use crate::ports::{Deletion, Page, PageRequest};

use super::dependencies::ServiceDependencies;
use super::errors::{CatalogError, Result};

const AUTHOR_NOT_FOUND: &str = "Author not found";
const BOOK_SEARCH_USAGE: &str = "Please provide exactly one query parameter: title, author, or isbn";

/// 書籍検索のクエリ（ちょうど1つを指定する）
#[derive(Debug, Clone, Default)]
pub struct BookSearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// 参照先の著者を解決するヘルパー関数
///
/// create_book, update_book で共通利用される。
async fn resolve_author(deps: &ServiceDependencies, author_id: AuthorId) -> Result<Author> {
    deps.authors
        .find_by_id(author_id)
        .await
        .map_err(CatalogError::RepositoryError)?
        .ok_or_else(|| CatalogError::ReferencedEntityNotFound(AUTHOR_NOT_FOUND.to_string()))
}

/// 書籍一覧をページ単位で取得する
pub async fn list_books(deps: &ServiceDependencies, page: PageRequest) -> Result<Page<Book>> {
    deps.books
        .find_all(page)
        .await
        .map_err(CatalogError::RepositoryError)
}

/// IDで書籍を取得する
pub async fn get_book(deps: &ServiceDependencies, id: BookId) -> Result<Book> {
    deps.books
        .find_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?
        .ok_or(CatalogError::BookNotFound)
}

/// 書籍を作成する
///
/// ビジネスルール：
/// - 参照する著者が存在すること（存在しない場合は何も保存しない）
///
/// 成功時は解決済みの著者を含む書籍を返す。
pub async fn create_book(deps: &ServiceDependencies, details: BookDetails) -> Result<Book> {
    let author = resolve_author(deps, details.author_id).await?;

    let id = deps
        .books
        .insert(&details)
        .await
        .map_err(|e| CatalogError::from_write(e, AUTHOR_NOT_FOUND))?;

    tracing::info!(book_id = %id, author_id = %author.id, "book created");
    Ok(Book::from_details(id, details, author))
}

/// 書籍の全項目を置き換える
///
/// ビジネスルール：
/// - 参照する著者が存在すること
/// - 書籍が存在すること
pub async fn update_book(
    deps: &ServiceDependencies,
    id: BookId,
    details: BookDetails,
) -> Result<Book> {
    let author = resolve_author(deps, details.author_id).await?;
    let mut book = get_book(deps, id).await?;

    book.replace_with(details, author);

    deps.books
        .update(&book)
        .await
        .map_err(|e| CatalogError::from_write(e, AUTHOR_NOT_FOUND))?;

    Ok(book)
}

/// 書籍を削除する
///
/// ビジネスルール：
/// - 未返却の貸出記録がある書籍は削除できない
/// - 返却済みの貸出記録は書籍と一緒に削除される
/// - 存在しないIDでも成功する
///
/// 事前確認の後、リポジトリが同じ条件をトランザクション内で再確認するため、
/// 確認と削除の間に貸出が作成されても削除されない。
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) -> Result<()> {
    let borrowed = deps
        .borrowing_records
        .exists_open_for_book(id)
        .await
        .map_err(CatalogError::RepositoryError)?;

    if borrowed {
        tracing::warn!(book_id = %id, "refusing to delete borrowed book");
        return Err(CatalogError::BookCurrentlyBorrowed);
    }

    match deps
        .books
        .delete_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?
    {
        Deletion::Deleted => {
            tracing::info!(book_id = %id, "book deleted");
            Ok(())
        }
        Deletion::Blocked => {
            tracing::warn!(book_id = %id, "book was borrowed before it could be deleted");
            Err(CatalogError::BookCurrentlyBorrowed)
        }
    }
}

/// 書籍を検索する
///
/// タイトル・著者名・ISBNのうちちょうど1つを指定する必要がある。
pub async fn search_books(deps: &ServiceDependencies, query: BookSearchQuery) -> Result<Vec<Book>> {
    let search = BookSearch::from_filters(query.title, query.author, query.isbn)
        .ok_or_else(|| CatalogError::InvalidSearch(BOOK_SEARCH_USAGE.to_string()))?;

    let books = match &search {
        BookSearch::Title(title) => deps.books.search_by_title(title).await,
        BookSearch::AuthorName(name) => deps.books.search_by_author_name(name).await,
        BookSearch::Isbn(isbn) => deps.books.search_by_isbn(isbn).await,
    }
    .map_err(CatalogError::RepositoryError)?;

    tracing::debug!(?search, hits = books.len(), "book search");
    Ok(books)
}
