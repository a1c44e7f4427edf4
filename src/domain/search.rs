use super::{BookId, CustomerId};

/// 書籍検索条件
///
/// タイトル・著者名・ISBNのうちちょうど1つだけを指定できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSearch {
    /// タイトルの部分一致（大文字小文字を区別しない）
    Title(String),
    /// 著者名の部分一致（大文字小文字を区別しない）
    AuthorName(String),
    /// ISBNの部分一致
    Isbn(String),
}

impl BookSearch {
    /// 指定されたフィルタから検索条件を選ぶ
    ///
    /// 0個または2個以上指定された場合は `None`。
    pub fn from_filters(
        title: Option<String>,
        author: Option<String>,
        isbn: Option<String>,
    ) -> Option<Self> {
        match (title, author, isbn) {
            (Some(title), None, None) => Some(Self::Title(title)),
            (None, Some(author), None) => Some(Self::AuthorName(author)),
            (None, None, Some(isbn)) => Some(Self::Isbn(isbn)),
            _ => None,
        }
    }
}

/// 貸出記録検索条件（利用者IDか書籍IDのどちらか一方）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowingSearch {
    ByCustomer(CustomerId),
    ByBook(BookId),
}

impl BorrowingSearch {
    pub fn from_filters(customer_id: Option<CustomerId>, book_id: Option<BookId>) -> Option<Self> {
        match (customer_id, book_id) {
            (Some(customer_id), None) => Some(Self::ByCustomer(customer_id)),
            (None, Some(book_id)) => Some(Self::ByBook(book_id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_book_search_requires_exactly_one_filter() {
        assert_eq!(BookSearch::from_filters(None, None, None), None);
        assert_eq!(BookSearch::from_filters(s("dune"), s("herbert"), None), None);
        assert_eq!(BookSearch::from_filters(s("a"), s("b"), s("c")), None);
        assert_eq!(BookSearch::from_filters(None, s("x"), s("978")), None);
    }

    #[test]
    fn test_book_search_selects_matching_filter() {
        assert_eq!(
            BookSearch::from_filters(s("dune"), None, None),
            Some(BookSearch::Title("dune".to_string()))
        );
        assert_eq!(
            BookSearch::from_filters(None, s("herbert"), None),
            Some(BookSearch::AuthorName("herbert".to_string()))
        );
        assert_eq!(
            BookSearch::from_filters(None, None, s("0441")),
            Some(BookSearch::Isbn("0441".to_string()))
        );
    }

    #[test]
    fn test_empty_string_counts_as_provided() {
        assert_eq!(
            BookSearch::from_filters(s(""), None, None),
            Some(BookSearch::Title(String::new()))
        );
    }

    #[test]
    fn test_borrowing_search_rejects_neither_and_both() {
        let customer = Some(CustomerId::new(1));
        let book = Some(BookId::new(2));

        assert_eq!(BorrowingSearch::from_filters(None, None), None);
        assert_eq!(BorrowingSearch::from_filters(customer, book), None);
        assert_eq!(
            BorrowingSearch::from_filters(customer, None),
            Some(BorrowingSearch::ByCustomer(CustomerId::new(1)))
        );
        assert_eq!(
            BorrowingSearch::from_filters(None, book),
            Some(BorrowingSearch::ByBook(BookId::new(2)))
        );
    }
}
