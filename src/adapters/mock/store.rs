use crate::domain::*;
use crate::ports::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// 書籍の行（著者は外部キーとして保持）
#[derive(Debug, Clone)]
pub(super) struct BookRow {
    pub title: String,
    pub author_id: AuthorId,
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub available: bool,
}

impl From<&BookDetails> for BookRow {
    fn from(details: &BookDetails) -> Self {
        Self {
            title: details.title.clone(),
            author_id: details.author_id,
            isbn: details.isbn.clone(),
            publication_date: details.publication_date,
            genre: details.genre.clone(),
            available: details.available,
        }
    }
}

/// 貸出記録の行（利用者・書籍は外部キーとして保持）
#[derive(Debug, Clone)]
pub(super) struct RecordRow {
    pub customer_id: CustomerId,
    pub book_id: BookId,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// インメモリのテーブル群
///
/// テーブルごとに独立した連番を持ち、外部キー制約をPostgreSQLと同じように検査する。
#[derive(Debug, Default)]
pub(super) struct Tables {
    author_seq: i64,
    book_seq: i64,
    customer_seq: i64,
    record_seq: i64,
    pub authors: BTreeMap<AuthorId, Author>,
    pub books: BTreeMap<BookId, BookRow>,
    pub customers: BTreeMap<CustomerId, Customer>,
    pub records: BTreeMap<BorrowingRecordId, RecordRow>,
}

impl Tables {
    pub fn next_author_id(&mut self) -> AuthorId {
        self.author_seq += 1;
        AuthorId::new(self.author_seq)
    }

    pub fn next_book_id(&mut self) -> BookId {
        self.book_seq += 1;
        BookId::new(self.book_seq)
    }

    pub fn next_customer_id(&mut self) -> CustomerId {
        self.customer_seq += 1;
        CustomerId::new(self.customer_seq)
    }

    pub fn next_record_id(&mut self) -> BorrowingRecordId {
        self.record_seq += 1;
        BorrowingRecordId::new(self.record_seq)
    }

    /// 書籍の行に著者を結合する
    pub fn join_book(&self, id: BookId, row: &BookRow) -> Result<Book> {
        let author = self
            .authors
            .get(&row.author_id)
            .cloned()
            .ok_or("dangling author reference")?;

        Ok(Book {
            id,
            title: row.title.clone(),
            author,
            isbn: row.isbn.clone(),
            publication_date: row.publication_date,
            genre: row.genre.clone(),
            available: row.available,
        })
    }

    pub fn book(&self, id: BookId) -> Result<Option<Book>> {
        self.books
            .get(&id)
            .map(|row| self.join_book(id, row))
            .transpose()
    }

    /// 貸出記録の行に利用者と書籍を結合する
    pub fn join_record(&self, id: BorrowingRecordId, row: &RecordRow) -> Result<BorrowingRecord> {
        let customer = self
            .customers
            .get(&row.customer_id)
            .cloned()
            .ok_or("dangling customer reference")?;
        let book = self.book(row.book_id)?.ok_or("dangling book reference")?;

        Ok(BorrowingRecord {
            id,
            customer,
            book,
            borrow_date: row.borrow_date,
            return_date: row.return_date,
        })
    }

    pub fn record(&self, id: BorrowingRecordId) -> Result<Option<BorrowingRecord>> {
        self.records
            .get(&id)
            .map(|row| self.join_record(id, row))
            .transpose()
    }

    pub fn records_where(
        &self,
        predicate: impl Fn(&RecordRow) -> bool,
    ) -> Result<Vec<BorrowingRecord>> {
        self.records
            .iter()
            .filter(|(_, row)| predicate(row))
            .map(|(id, row)| self.join_record(*id, row))
            .collect()
    }

    pub fn books_where(&self, predicate: impl Fn(&Book) -> bool) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        for (id, row) in &self.books {
            let book = self.join_book(*id, row)?;
            if predicate(&book) {
                books.push(book);
            }
        }
        Ok(books)
    }
}

/// すべてのモックリポジトリが共有するインメモリストア
#[derive(Debug, Default)]
pub struct MockCatalogStore {
    tables: Mutex<Tables>,
}

impl MockCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| "mock catalog store poisoned".into())
    }

    /// 保存されている貸出記録の件数（テスト用）
    pub fn borrowing_record_count(&self) -> usize {
        self.lock().map(|t| t.records.len()).unwrap_or_default()
    }

    /// 保存されている書籍の件数（テスト用）
    pub fn book_count(&self) -> usize {
        self.lock().map(|t| t.books.len()).unwrap_or_default()
    }
}
