use crate::domain::{
    BookId, BorrowingDetails, BorrowingRecord, BorrowingRecordId, BorrowingSearch, CustomerId,
};
use crate::ports::{Page, PageRequest};

use super::dependencies::ServiceDependencies;
use super::errors::{CatalogError, Result};

const CUSTOMER_OR_BOOK_NOT_FOUND: &str = "Customer or Book not found";
const UPDATE_REFERENCE_NOT_FOUND: &str = "Customer, Book or BorrowingRecord not found";
const BORROWING_SEARCH_USAGE: &str = "Please provide exactly one query parameter: userId or bookId";

/// 貸出記録検索のクエリ（どちらか一方を指定する）
#[derive(Debug, Clone, Copy, Default)]
pub struct BorrowingSearchQuery {
    pub customer_id: Option<CustomerId>,
    pub book_id: Option<BookId>,
}

/// 貸出記録一覧をページ単位で取得する
pub async fn list_borrowings(
    deps: &ServiceDependencies,
    page: PageRequest,
) -> Result<Page<BorrowingRecord>> {
    deps.borrowing_records
        .find_all(page)
        .await
        .map_err(CatalogError::RepositoryError)
}

/// IDで貸出記録を取得する
pub async fn get_borrowing(
    deps: &ServiceDependencies,
    id: BorrowingRecordId,
) -> Result<BorrowingRecord> {
    deps.borrowing_records
        .find_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?
        .ok_or(CatalogError::BorrowingRecordNotFound)
}

/// 貸出記録を作成する
///
/// ビジネスルール：
/// - 利用者と書籍がどちらも存在すること（どちらかが無ければ何も保存しない）
pub async fn create_borrowing(
    deps: &ServiceDependencies,
    details: BorrowingDetails,
) -> Result<BorrowingRecord> {
    let (customer, book) = futures::try_join!(
        deps.customers.find_by_id(details.customer_id),
        deps.books.find_by_id(details.book_id),
    )
    .map_err(CatalogError::RepositoryError)?;

    let (Some(customer), Some(book)) = (customer, book) else {
        return Err(CatalogError::ReferencedEntityNotFound(
            CUSTOMER_OR_BOOK_NOT_FOUND.to_string(),
        ));
    };

    let id = deps
        .borrowing_records
        .insert(&details)
        .await
        .map_err(|e| CatalogError::from_write(e, CUSTOMER_OR_BOOK_NOT_FOUND))?;

    tracing::info!(
        record_id = %id,
        customer_id = %customer.id,
        book_id = %book.id,
        "borrowing record created"
    );
    Ok(BorrowingRecord::from_details(id, details, customer, book))
}

/// 貸出記録を更新する
///
/// ビジネスルール：
/// - 利用者・書籍・既存の記録がすべて存在すること
///
/// 成功時は利用者・書籍・貸出日・返却日をすべて上書きする。
pub async fn update_borrowing(
    deps: &ServiceDependencies,
    id: BorrowingRecordId,
    details: BorrowingDetails,
) -> Result<BorrowingRecord> {
    let (customer, book, record) = futures::try_join!(
        deps.customers.find_by_id(details.customer_id),
        deps.books.find_by_id(details.book_id),
        deps.borrowing_records.find_by_id(id),
    )
    .map_err(CatalogError::RepositoryError)?;

    let (Some(customer), Some(book), Some(mut record)) = (customer, book, record) else {
        return Err(CatalogError::ReferencedEntityNotFound(
            UPDATE_REFERENCE_NOT_FOUND.to_string(),
        ));
    };

    record.replace_with(details, customer, book);

    deps.borrowing_records
        .update(&record)
        .await
        .map_err(|e| CatalogError::from_write(e, UPDATE_REFERENCE_NOT_FOUND))?;

    Ok(record)
}

/// 貸出記録を削除する（存在しないIDでも成功する）
pub async fn delete_borrowing(deps: &ServiceDependencies, id: BorrowingRecordId) -> Result<()> {
    deps.borrowing_records
        .delete_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?;

    tracing::info!(record_id = %id, "borrowing record deleted");
    Ok(())
}

/// 利用者IDまたは書籍IDで貸出記録を検索する
///
/// どちらも指定しない場合、両方指定した場合は不正なリクエストとする。
pub async fn search_borrowings(
    deps: &ServiceDependencies,
    query: BorrowingSearchQuery,
) -> Result<Vec<BorrowingRecord>> {
    let search = BorrowingSearch::from_filters(query.customer_id, query.book_id)
        .ok_or_else(|| CatalogError::InvalidSearch(BORROWING_SEARCH_USAGE.to_string()))?;

    match search {
        BorrowingSearch::ByCustomer(customer_id) => {
            deps.borrowing_records.find_by_customer_id(customer_id).await
        }
        BorrowingSearch::ByBook(book_id) => deps.borrowing_records.find_by_book_id(book_id).await,
    }
    .map_err(CatalogError::RepositoryError)
}
