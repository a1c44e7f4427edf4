use crate::domain::{Book, BookDetails, BookId};
use crate::ports::book_repository::BookRepository as BookRepositoryTrait;
use crate::ports::{Deletion, Page, PageRequest, Result};
use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgRow};

use super::rows::{SELECT_BOOKS, map_row_to_book, map_write_error};

fn map_rows(rows: &[PgRow]) -> Result<Vec<Book>> {
    Ok(rows
        .iter()
        .map(map_row_to_book)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

/// BookRepositoryのPostgreSQL実装
///
/// 書籍は常に著者と結合して読み出す。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn search(&self, condition: &str, pattern: String) -> Result<Vec<Book>> {
        let rows = sqlx::query(&format!("{SELECT_BOOKS} WHERE {condition} ORDER BY b.id"))
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        map_rows(&rows)
    }
}

/// LIKE のワイルドカードをエスケープして部分一致パターンを作る
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Book>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(&format!("{SELECT_BOOKS} ORDER BY b.id LIMIT $1 OFFSET $2"))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(map_rows(&rows)?, page, total as u64))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(&format!("{SELECT_BOOKS} WHERE b.id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row_to_book).transpose()?)
    }

    async fn insert(&self, details: &BookDetails) -> Result<BookId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author_id, isbn, publication_date, genre, available)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&details.title)
        .bind(details.author_id.value())
        .bind(&details.isbn)
        .bind(details.publication_date)
        .bind(&details.genre)
        .bind(details.available)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(BookId::new(id))
    }

    async fn update(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE books
            SET title = $2,
                author_id = $3,
                isbn = $4,
                publication_date = $5,
                genre = $6,
                available = $7
            WHERE id = $1
            "#,
        )
        .bind(book.id.value())
        .bind(&book.title)
        .bind(book.author.id.value())
        .bind(&book.isbn)
        .bind(book.publication_date)
        .bind(&book.genre)
        .bind(book.available)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    /// 貸出中チェックと削除を1トランザクションで行う
    ///
    /// 書籍の行を FOR UPDATE でロックするため、並行する貸出記録の INSERT
    /// （外部キーの FOR KEY SHARE ロック）はこのトランザクションの完了を待つ。
    async fn delete_by_id(&self, id: BookId) -> Result<Deletion> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT id FROM books WHERE id = $1 FOR UPDATE")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await?;

        let borrowed: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM borrowing_records
                WHERE book_id = $1 AND return_date IS NULL
            )
            "#,
        )
        .bind(id.value())
        .fetch_one(&mut *tx)
        .await?;

        if borrowed {
            tx.rollback().await?;
            return Ok(Deletion::Blocked);
        }

        sqlx::query("DELETE FROM borrowing_records WHERE book_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Deletion::Deleted)
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Book>> {
        self.search("b.title ILIKE $1", contains_pattern(title))
            .await
    }

    async fn search_by_author_name(&self, author_name: &str) -> Result<Vec<Book>> {
        self.search("a.name ILIKE $1", contains_pattern(author_name))
            .await
    }

    async fn search_by_isbn(&self, isbn: &str) -> Result<Vec<Book>> {
        self.search("b.isbn ILIKE $1", contains_pattern(isbn)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("dune"), "%dune%");
        assert_eq!(contains_pattern("100%_"), "%100\\%\\_%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
