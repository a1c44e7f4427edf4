use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::*;
use crate::ports::Page;

// ============================================================================
// Requests
// ============================================================================

/// 参照先エンティティ（`{ "id": 1 }` の形で指定する）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

/// 著者の作成・更新リクエスト（POST /authors, PUT /authors/:id）
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Author name must be between 1 and 100 characters"
    ))]
    pub name: String,
    pub birth_date: NaiveDate,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Nationality must be between 1 and 100 characters"
    ))]
    pub nationality: String,
}

impl AuthorRequest {
    pub fn into_details(self) -> AuthorDetails {
        AuthorDetails {
            name: self.name,
            birth_date: self.birth_date,
            nationality: self.nationality,
        }
    }
}

/// 書籍の作成・更新リクエスト
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    pub author: EntityRef,
    #[validate(length(min = 10, max = 13, message = "ISBN must be between 10 and 13 characters"))]
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: Option<String>,
    pub available: bool,
}

impl BookRequest {
    pub fn into_details(self) -> BookDetails {
        BookDetails {
            title: self.title,
            author_id: AuthorId::new(self.author.id),
            isbn: self.isbn,
            publication_date: self.publication_date,
            genre: self.genre,
            available: self.available,
        }
    }
}

/// 利用者の作成・更新リクエスト
///
/// 更新時のパスワードは省略可能（省略・空文字の場合は変更しない）。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: String,
    #[validate(length(
        min = 10,
        max = 15,
        message = "Phone number must be between 10 and 15 characters"
    ))]
    pub phone_number: String,
    pub password: Option<String>,
}

impl CustomerRequest {
    pub fn into_details(self) -> CustomerDetails {
        CustomerDetails {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            password: self.password,
        }
    }
}

/// 貸出記録の作成・更新リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRequest {
    pub customer: EntityRef,
    pub book: EntityRef,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowingRequest {
    pub fn into_details(self) -> BorrowingDetails {
        BorrowingDetails {
            customer_id: CustomerId::new(self.customer.id),
            book_id: BookId::new(self.book.id),
            borrow_date: self.borrow_date,
            return_date: self.return_date,
        }
    }
}

/// 一覧取得のクエリパラメータ（0始まりのページ番号）
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
}

/// GET /books/search のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct BookSearchParams {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// GET /borrowings/search のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingSearchParams {
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.value(),
            name: author.name,
            birth_date: author.birth_date,
            nationality: author.nationality,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: AuthorResponse,
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub available: bool,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title,
            author: AuthorResponse::from(book.author),
            isbn: book.isbn,
            publication_date: book.publication_date,
            genre: book.genre,
            available: book.available,
        }
    }
}

/// 利用者レスポンス（パスワードハッシュは含めない）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.value(),
            name: customer.name,
            email: customer.email,
            address: customer.address,
            phone_number: customer.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRecordResponse {
    pub id: i64,
    pub customer: CustomerResponse,
    pub book: BookResponse,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl From<BorrowingRecord> for BorrowingRecordResponse {
    fn from(record: BorrowingRecord) -> Self {
        Self {
            id: record.id.value(),
            customer: CustomerResponse::from(record.customer),
            book: BookResponse::from(record.book),
            borrow_date: record.borrow_date,
            return_date: record.return_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u32,
    pub number: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// ページ付き一覧レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>) -> Self
    where
        T: From<U>,
    {
        let metadata = PageMetadata {
            size: page.size,
            number: page.number,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
        };

        Self {
            content: page.items.into_iter().map(T::from).collect(),
            page: metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PageRequest;

    fn book_request(isbn: &str, genre: Option<&str>) -> BookRequest {
        BookRequest {
            title: "Dune".to_string(),
            author: EntityRef { id: 1 },
            isbn: isbn.to_string(),
            publication_date: None,
            genre: genre.map(str::to_string),
            available: true,
        }
    }

    #[test]
    fn test_book_request_isbn_length_is_validated() {
        assert!(book_request("0441013597", None).validate().is_ok());
        assert!(book_request("978044101359", None).validate().is_ok());
        assert!(book_request("044101359", None).validate().is_err());
        assert!(book_request("97804410135970", None).validate().is_err());
    }

    #[test]
    fn test_book_request_genre_is_limited_to_50_chars() {
        let long = "x".repeat(51);
        assert!(book_request("0441013597", Some(&long)).validate().is_err());
        assert!(book_request("0441013597", Some("Science fiction")).validate().is_ok());
    }

    #[test]
    fn test_customer_request_rejects_invalid_email() {
        let request: CustomerRequest = serde_json::from_value(serde_json::json!({
            "name": "Hanako",
            "email": "not-an-email",
            "address": "Tokyo",
            "phoneNumber": "0312345678",
            "password": "secret"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Invalid email format"));
    }

    #[test]
    fn test_author_request_rejects_empty_name() {
        let request: AuthorRequest = serde_json::from_value(serde_json::json!({
            "name": "",
            "birthDate": "1920-10-08",
            "nationality": "American"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_borrowing_search_params_use_camel_case() {
        let params: BorrowingSearchParams =
            serde_json::from_value(serde_json::json!({ "userId": 4 })).unwrap();
        assert_eq!(params.user_id, Some(4));
        assert_eq!(params.book_id, None);
    }

    #[test]
    fn test_page_response_carries_metadata() {
        let page = Page::new(
            vec![Author {
                id: AuthorId::new(6),
                name: "Ursula K. Le Guin".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1929, 10, 21).unwrap(),
                nationality: "American".to_string(),
            }],
            PageRequest::new(1, 5),
            6,
        );

        let response: PageResponse<AuthorResponse> = PageResponse::from_page(page);

        assert_eq!(response.content.len(), 1);
        assert_eq!(response.content[0].id, 6);
        assert_eq!(response.page.number, 1);
        assert_eq!(response.page.total_elements, 6);
        assert_eq!(response.page.total_pages, 2);
    }
}
