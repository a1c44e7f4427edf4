use crate::domain::*;
use crate::ports::{
    AuthorRepository as AuthorRepositoryTrait, BookRepository as BookRepositoryTrait,
    BorrowingRecordRepository as BorrowingRecordRepositoryTrait,
    CustomerRepository as CustomerRepositoryTrait, Deletion, MissingReference, Page, PageRequest,
    Result,
};
use async_trait::async_trait;
use std::sync::Arc;

use super::store::{BookRow, MockCatalogStore, RecordRow};

fn paginate<T>(items: impl Iterator<Item = T>, total: usize, page: PageRequest) -> Page<T> {
    let items = items
        .skip(page.offset() as usize)
        .take(page.size as usize)
        .collect();
    Page::new(items, page, total as u64)
}

/// AuthorRepositoryのモック実装
pub struct AuthorRepository {
    store: Arc<MockCatalogStore>,
}

impl AuthorRepository {
    pub fn new(store: Arc<MockCatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthorRepositoryTrait for AuthorRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Author>> {
        let tables = self.store.lock()?;
        Ok(paginate(
            tables.authors.values().cloned(),
            tables.authors.len(),
            page,
        ))
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>> {
        Ok(self.store.lock()?.authors.get(&id).cloned())
    }

    async fn insert(&self, details: &AuthorDetails) -> Result<AuthorId> {
        let mut tables = self.store.lock()?;
        let id = tables.next_author_id();
        tables
            .authors
            .insert(id, Author::from_details(id, details.clone()));
        Ok(id)
    }

    async fn update(&self, author: &Author) -> Result<()> {
        let mut tables = self.store.lock()?;
        if let Some(stored) = tables.authors.get_mut(&author.id) {
            *stored = author.clone();
        }
        Ok(())
    }

    /// 書籍から参照されている場合は外部キー違反として `Blocked`
    async fn delete_by_id(&self, id: AuthorId) -> Result<Deletion> {
        let mut tables = self.store.lock()?;
        if tables.books.values().any(|book| book.author_id == id) {
            return Ok(Deletion::Blocked);
        }
        tables.authors.remove(&id);
        Ok(Deletion::Deleted)
    }
}

/// BookRepositoryのモック実装
pub struct BookRepository {
    store: Arc<MockCatalogStore>,
}

impl BookRepository {
    pub fn new(store: Arc<MockCatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Book>> {
        let tables = self.store.lock()?;
        let books = tables.books_where(|_| true)?;
        let total = books.len();
        Ok(paginate(books.into_iter(), total, page))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        self.store.lock()?.book(id)
    }

    async fn insert(&self, details: &BookDetails) -> Result<BookId> {
        let mut tables = self.store.lock()?;
        if !tables.authors.contains_key(&details.author_id) {
            return Err(MissingReference.into());
        }
        let id = tables.next_book_id();
        tables.books.insert(id, BookRow::from(details));
        Ok(id)
    }

    async fn update(&self, book: &Book) -> Result<()> {
        let mut tables = self.store.lock()?;
        if !tables.authors.contains_key(&book.author.id) {
            return Err(MissingReference.into());
        }
        if let Some(row) = tables.books.get_mut(&book.id) {
            *row = BookRow {
                title: book.title.clone(),
                author_id: book.author.id,
                isbn: book.isbn.clone(),
                publication_date: book.publication_date,
                genre: book.genre.clone(),
                available: book.available,
            };
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: BookId) -> Result<Deletion> {
        let mut tables = self.store.lock()?;
        let borrowed = tables
            .records
            .values()
            .any(|record| record.book_id == id && record.return_date.is_none());
        if borrowed {
            return Ok(Deletion::Blocked);
        }
        tables.records.retain(|_, record| record.book_id != id);
        tables.books.remove(&id);
        Ok(Deletion::Deleted)
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Book>> {
        let needle = title.to_lowercase();
        self.store
            .lock()?
            .books_where(|book| book.title.to_lowercase().contains(&needle))
    }

    async fn search_by_author_name(&self, author_name: &str) -> Result<Vec<Book>> {
        let needle = author_name.to_lowercase();
        self.store
            .lock()?
            .books_where(|book| book.author.name.to_lowercase().contains(&needle))
    }

    async fn search_by_isbn(&self, isbn: &str) -> Result<Vec<Book>> {
        let needle = isbn.to_lowercase();
        self.store
            .lock()?
            .books_where(|book| book.isbn.to_lowercase().contains(&needle))
    }
}

/// CustomerRepositoryのモック実装
pub struct CustomerRepository {
    store: Arc<MockCatalogStore>,
}

impl CustomerRepository {
    pub fn new(store: Arc<MockCatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Customer>> {
        let tables = self.store.lock()?;
        Ok(paginate(
            tables.customers.values().cloned(),
            tables.customers.len(),
            page,
        ))
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.store.lock()?.customers.get(&id).cloned())
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerId> {
        let mut tables = self.store.lock()?;
        let id = tables.next_customer_id();
        tables
            .customers
            .insert(id, Customer::from_new(id, customer.clone()));
        Ok(id)
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        let mut tables = self.store.lock()?;
        if let Some(stored) = tables.customers.get_mut(&customer.id) {
            *stored = customer.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        let mut tables = self.store.lock()?;
        tables.records.retain(|_, record| record.customer_id != id);
        tables.customers.remove(&id);
        Ok(())
    }
}

/// BorrowingRecordRepositoryのモック実装
pub struct BorrowingRecordRepository {
    store: Arc<MockCatalogStore>,
}

impl BorrowingRecordRepository {
    pub fn new(store: Arc<MockCatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BorrowingRecordRepositoryTrait for BorrowingRecordRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<BorrowingRecord>> {
        let tables = self.store.lock()?;
        let records = tables.records_where(|_| true)?;
        let total = records.len();
        Ok(paginate(records.into_iter(), total, page))
    }

    async fn find_by_id(&self, id: BorrowingRecordId) -> Result<Option<BorrowingRecord>> {
        self.store.lock()?.record(id)
    }

    async fn insert(&self, details: &BorrowingDetails) -> Result<BorrowingRecordId> {
        let mut tables = self.store.lock()?;
        if !tables.customers.contains_key(&details.customer_id)
            || !tables.books.contains_key(&details.book_id)
        {
            return Err(MissingReference.into());
        }
        let id = tables.next_record_id();
        tables.records.insert(
            id,
            RecordRow {
                customer_id: details.customer_id,
                book_id: details.book_id,
                borrow_date: details.borrow_date,
                return_date: details.return_date,
            },
        );
        Ok(id)
    }

    async fn update(&self, record: &BorrowingRecord) -> Result<()> {
        let mut tables = self.store.lock()?;
        if !tables.customers.contains_key(&record.customer.id)
            || !tables.books.contains_key(&record.book.id)
        {
            return Err(MissingReference.into());
        }
        if let Some(row) = tables.records.get_mut(&record.id) {
            *row = RecordRow {
                customer_id: record.customer.id,
                book_id: record.book.id,
                borrow_date: record.borrow_date,
                return_date: record.return_date,
            };
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: BorrowingRecordId) -> Result<()> {
        self.store.lock()?.records.remove(&id);
        Ok(())
    }

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> Result<Vec<BorrowingRecord>> {
        self.store
            .lock()?
            .records_where(|record| record.customer_id == customer_id)
    }

    async fn find_by_book_id(&self, book_id: BookId) -> Result<Vec<BorrowingRecord>> {
        self.store
            .lock()?
            .records_where(|record| record.book_id == book_id)
    }

    async fn exists_open_for_book(&self, book_id: BookId) -> Result<bool> {
        Ok(self
            .store
            .lock()?
            .records
            .values()
            .any(|record| record.book_id == book_id && record.return_date.is_none()))
    }
}
