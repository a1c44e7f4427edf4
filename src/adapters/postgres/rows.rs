use crate::domain::*;
use crate::ports::MissingReference;
use sqlx::{Row, postgres::PgRow};

// 結合クエリでも同じマッパーを使えるよう、列にはテーブル名の接頭辞付き別名を付ける。

pub(super) const SELECT_BOOKS: &str = r#"
    SELECT
        b.id AS book_id,
        b.title AS book_title,
        b.isbn AS book_isbn,
        b.publication_date AS book_publication_date,
        b.genre AS book_genre,
        b.available AS book_available,
        a.id AS author_id,
        a.name AS author_name,
        a.birth_date AS author_birth_date,
        a.nationality AS author_nationality
    FROM books b
    JOIN authors a ON a.id = b.author_id
"#;

pub(super) const SELECT_BORROWING_RECORDS: &str = r#"
    SELECT
        r.id AS record_id,
        r.borrow_date,
        r.return_date,
        c.id AS customer_id,
        c.name AS customer_name,
        c.email AS customer_email,
        c.address AS customer_address,
        c.phone_number AS customer_phone_number,
        c.password_hash AS customer_password_hash,
        b.id AS book_id,
        b.title AS book_title,
        b.isbn AS book_isbn,
        b.publication_date AS book_publication_date,
        b.genre AS book_genre,
        b.available AS book_available,
        a.id AS author_id,
        a.name AS author_name,
        a.birth_date AS author_birth_date,
        a.nationality AS author_nationality
    FROM borrowing_records r
    JOIN customers c ON c.id = r.customer_id
    JOIN books b ON b.id = r.book_id
    JOIN authors a ON a.id = b.author_id
"#;

pub(super) fn map_row_to_author(row: &PgRow) -> Result<Author, sqlx::Error> {
    Ok(Author {
        id: AuthorId::new(row.try_get("author_id")?),
        name: row.try_get("author_name")?,
        birth_date: row.try_get("author_birth_date")?,
        nationality: row.try_get("author_nationality")?,
    })
}

pub(super) fn map_row_to_book(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: BookId::new(row.try_get("book_id")?),
        title: row.try_get("book_title")?,
        author: map_row_to_author(row)?,
        isbn: row.try_get("book_isbn")?,
        publication_date: row.try_get("book_publication_date")?,
        genre: row.try_get("book_genre")?,
        available: row.try_get("book_available")?,
    })
}

pub(super) fn map_row_to_customer(row: &PgRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: CustomerId::new(row.try_get("customer_id")?),
        name: row.try_get("customer_name")?,
        email: row.try_get("customer_email")?,
        address: row.try_get("customer_address")?,
        phone_number: row.try_get("customer_phone_number")?,
        password_hash: row.try_get("customer_password_hash")?,
    })
}

pub(super) fn map_row_to_borrowing_record(row: &PgRow) -> Result<BorrowingRecord, sqlx::Error> {
    Ok(BorrowingRecord {
        id: BorrowingRecordId::new(row.try_get("record_id")?),
        customer: map_row_to_customer(row)?,
        book: map_row_to_book(row)?,
        borrow_date: row.try_get("borrow_date")?,
        return_date: row.try_get("return_date")?,
    })
}

/// 外部キー制約違反かどうか
pub(super) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}

/// 書き込み時の外部キー制約違反を `MissingReference` に変換する
pub(super) fn map_write_error(err: sqlx::Error) -> Box<dyn std::error::Error + Send + Sync> {
    if is_foreign_key_violation(&err) {
        Box::new(MissingReference)
    } else {
        Box::new(err)
    }
}
