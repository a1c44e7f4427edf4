//! PostgreSQLアダプターの結合テスト
//!
//! 実際のデータベースが必要なため `#[ignore]` 付き。
//! `DATABASE_URL` を設定して `cargo test -- --ignored` で実行する。

mod common;

use common::*;
use library_catalog::adapters::postgres::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresBorrowingRecordRepository,
    PostgresCustomerRepository,
};
use library_catalog::domain::*;
use library_catalog::ports::{
    AuthorRepository, BookRepository, BorrowingRecordRepository, CustomerRepository, Deletion,
    PageRequest,
};
use serial_test::serial;
use sqlx::PgPool;

struct Repositories {
    authors: PostgresAuthorRepository,
    books: PostgresBookRepository,
    customers: PostgresCustomerRepository,
    records: PostgresBorrowingRecordRepository,
}

async fn setup() -> (PgPool, Repositories) {
    let pool = create_test_pool().await;
    cleanup_database(&pool).await;

    let repos = Repositories {
        authors: PostgresAuthorRepository::new(pool.clone()),
        books: PostgresBookRepository::new(pool.clone()),
        customers: PostgresCustomerRepository::new(pool.clone()),
        records: PostgresBorrowingRecordRepository::new(pool.clone()),
    };
    (pool, repos)
}

fn new_customer(name: &str) -> NewCustomer {
    customer_details(name, None).into_new_customer("$argon2id$stub".to_string())
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_author_insert_find_and_page() {
    let (_pool, repos) = setup().await;

    for i in 0..7 {
        repos
            .authors
            .insert(&author_details(&format!("Author {i}")))
            .await
            .expect("Failed to insert author");
    }

    let first = repos.authors.find_all(PageRequest::new(0, 5)).await.unwrap();
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.total_elements, 7);

    let second = repos.authors.find_all(PageRequest::new(1, 5)).await.unwrap();
    assert_eq!(second.items.len(), 2);

    let author = repos.authors.find_by_id(AuthorId::new(1)).await.unwrap();
    assert_eq!(author.map(|a| a.name), Some("Author 0".to_string()));

    assert!(repos.authors.find_by_id(AuthorId::new(99)).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_author_with_books_is_blocked() {
    let (_pool, repos) = setup().await;
    let author_id = repos.authors.insert(&author_details("Frank Herbert")).await.unwrap();
    repos
        .books
        .insert(&book_details("Dune", author_id, "0441013597"))
        .await
        .unwrap();

    let deletion = repos.authors.delete_by_id(author_id).await.unwrap();

    assert_eq!(deletion, Deletion::Blocked);
    assert!(repos.authors.find_by_id(author_id).await.unwrap().is_some());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_book_is_read_with_author_and_searchable() {
    let (_pool, repos) = setup().await;
    let herbert = repos.authors.insert(&author_details("Frank Herbert")).await.unwrap();
    let le_guin = repos.authors.insert(&author_details("Ursula K. Le Guin")).await.unwrap();
    let dune = repos
        .books
        .insert(&book_details("Dune", herbert, "0441013597"))
        .await
        .unwrap();
    repos
        .books
        .insert(&book_details("The Word for World Is Forest", le_guin, "0765324644"))
        .await
        .unwrap();

    let book = repos.books.find_by_id(dune).await.unwrap().unwrap();
    assert_eq!(book.author.id, herbert);
    assert_eq!(book.author.name, "Frank Herbert");

    assert_eq!(repos.books.search_by_title("DUNE").await.unwrap().len(), 1);
    assert_eq!(repos.books.search_by_author_name("guin").await.unwrap().len(), 1);
    assert_eq!(repos.books.search_by_isbn("0441").await.unwrap().len(), 1);
    assert!(repos.books.search_by_title("%").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_borrowed_book_delete_is_blocked_then_cascades() {
    let (_pool, repos) = setup().await;
    let author_id = repos.authors.insert(&author_details("Frank Herbert")).await.unwrap();
    let book_id = repos
        .books
        .insert(&book_details("Dune", author_id, "0441013597"))
        .await
        .unwrap();
    let customer_id = repos.customers.insert(&new_customer("Hanako")).await.unwrap();
    let record_id = repos
        .records
        .insert(&borrowing_details(customer_id, book_id, None))
        .await
        .unwrap();

    assert!(repos.records.exists_open_for_book(book_id).await.unwrap());
    assert_eq!(repos.books.delete_by_id(book_id).await.unwrap(), Deletion::Blocked);

    let mut record = repos.records.find_by_id(record_id).await.unwrap().unwrap();
    record.return_date = Some(date(2024, 3, 20));
    repos.records.update(&record).await.unwrap();

    assert!(!repos.records.exists_open_for_book(book_id).await.unwrap());
    assert_eq!(repos.books.delete_by_id(book_id).await.unwrap(), Deletion::Deleted);
    assert!(repos.books.find_by_id(book_id).await.unwrap().is_none());
    assert!(repos.records.find_by_id(record_id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_customer_delete_cascades_and_search_by_ids() {
    let (_pool, repos) = setup().await;
    let author_id = repos.authors.insert(&author_details("Frank Herbert")).await.unwrap();
    let book_id = repos
        .books
        .insert(&book_details("Dune", author_id, "0441013597"))
        .await
        .unwrap();
    let hanako = repos.customers.insert(&new_customer("Hanako")).await.unwrap();
    let taro = repos.customers.insert(&new_customer("Taro")).await.unwrap();
    repos
        .records
        .insert(&borrowing_details(hanako, book_id, None))
        .await
        .unwrap();
    repos
        .records
        .insert(&borrowing_details(taro, book_id, Some(date(2024, 3, 5))))
        .await
        .unwrap();

    assert_eq!(repos.records.find_by_book_id(book_id).await.unwrap().len(), 2);
    let hanako_records = repos.records.find_by_customer_id(hanako).await.unwrap();
    assert_eq!(hanako_records.len(), 1);
    assert_eq!(hanako_records[0].customer.password_hash, "$argon2id$stub");

    repos.customers.delete_by_id(hanako).await.unwrap();

    assert!(repos.customers.find_by_id(hanako).await.unwrap().is_none());
    assert!(repos.records.find_by_customer_id(hanako).await.unwrap().is_empty());
    assert_eq!(repos.records.find_by_book_id(book_id).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_borrowing_insert_with_missing_customer_fails() {
    let (_pool, repos) = setup().await;
    let author_id = repos.authors.insert(&author_details("Frank Herbert")).await.unwrap();
    let book_id = repos
        .books
        .insert(&book_details("Dune", author_id, "0441013597"))
        .await
        .unwrap();

    let result = repos
        .records
        .insert(&borrowing_details(CustomerId::new(99), book_id, None))
        .await;

    assert!(result.is_err());
    assert!(repos.records.find_by_book_id(book_id).await.unwrap().is_empty());
}
