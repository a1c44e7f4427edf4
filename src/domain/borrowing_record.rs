use chrono::NaiveDate;

use super::{Book, BookId, BorrowingRecordId, Customer, CustomerId};

/// 貸出記録
///
/// 返却日が `None` の記録は「貸出中」を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowingRecord {
    pub id: BorrowingRecordId,
    pub customer: Customer,
    pub book: Book,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// 貸出記録の作成・更新に使う入力値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowingDetails {
    pub customer_id: CustomerId,
    pub book_id: BookId,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowingRecord {
    pub fn from_details(
        id: BorrowingRecordId,
        details: BorrowingDetails,
        customer: Customer,
        book: Book,
    ) -> Self {
        Self {
            id,
            customer,
            book,
            borrow_date: details.borrow_date,
            return_date: details.return_date,
        }
    }

    /// 未返却かどうか
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    /// 利用者・書籍・貸出日・返却日をすべて上書きする
    pub fn replace_with(&mut self, details: BorrowingDetails, customer: Customer, book: Book) {
        self.customer = customer;
        self.book = book;
        self.borrow_date = details.borrow_date;
        self.return_date = details.return_date;
    }
}
