use crate::domain::{BookId, BorrowingDetails, BorrowingRecord, BorrowingRecordId, CustomerId};
use crate::ports::borrowing_record_repository::BorrowingRecordRepository as BorrowingRecordRepositoryTrait;
use crate::ports::{Page, PageRequest, Result};
use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgRow};

use super::rows::{SELECT_BORROWING_RECORDS, map_row_to_borrowing_record, map_write_error};

fn map_rows(rows: &[PgRow]) -> Result<Vec<BorrowingRecord>> {
    Ok(rows
        .iter()
        .map(map_row_to_borrowing_record)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

/// BorrowingRecordRepositoryのPostgreSQL実装
///
/// 記録は利用者・書籍・著者と結合して読み出す。
pub struct BorrowingRecordRepository {
    pool: PgPool,
}

impl BorrowingRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowingRecordRepositoryTrait for BorrowingRecordRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<BorrowingRecord>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowing_records")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(&format!(
            "{SELECT_BORROWING_RECORDS} ORDER BY r.id LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(map_rows(&rows)?, page, total as u64))
    }

    async fn find_by_id(&self, id: BorrowingRecordId) -> Result<Option<BorrowingRecord>> {
        let row = sqlx::query(&format!("{SELECT_BORROWING_RECORDS} WHERE r.id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row_to_borrowing_record).transpose()?)
    }

    async fn insert(&self, details: &BorrowingDetails) -> Result<BorrowingRecordId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO borrowing_records (customer_id, book_id, borrow_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(details.customer_id.value())
        .bind(details.book_id.value())
        .bind(details.borrow_date)
        .bind(details.return_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(BorrowingRecordId::new(id))
    }

    async fn update(&self, record: &BorrowingRecord) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE borrowing_records
            SET customer_id = $2,
                book_id = $3,
                borrow_date = $4,
                return_date = $5
            WHERE id = $1
            "#,
        )
        .bind(record.id.value())
        .bind(record.customer.id.value())
        .bind(record.book.id.value())
        .bind(record.borrow_date)
        .bind(record.return_date)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: BorrowingRecordId) -> Result<()> {
        sqlx::query("DELETE FROM borrowing_records WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> Result<Vec<BorrowingRecord>> {
        let rows = sqlx::query(&format!(
            "{SELECT_BORROWING_RECORDS} WHERE r.customer_id = $1 ORDER BY r.id"
        ))
        .bind(customer_id.value())
        .fetch_all(&self.pool)
        .await?;

        map_rows(&rows)
    }

    async fn find_by_book_id(&self, book_id: BookId) -> Result<Vec<BorrowingRecord>> {
        let rows = sqlx::query(&format!(
            "{SELECT_BORROWING_RECORDS} WHERE r.book_id = $1 ORDER BY r.id"
        ))
        .bind(book_id.value())
        .fetch_all(&self.pool)
        .await?;

        map_rows(&rows)
    }

    /// (book_id) WHERE return_date IS NULL の部分インデックスを使用する
    async fn exists_open_for_book(&self, book_id: BookId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM borrowing_records
                WHERE book_id = $1 AND return_date IS NULL
            )
            "#,
        )
        .bind(book_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
