use crate::application::catalog::CatalogError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// 本文はプレーンテキストのメッセージ。
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError(CatalogError::Validation(errors.to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(CatalogError::Validation(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            // 404 Not Found - ID や参照先が存在しない
            CatalogError::AuthorNotFound
            | CatalogError::BookNotFound
            | CatalogError::CustomerNotFound
            | CatalogError::BorrowingRecordNotFound
            | CatalogError::ReferencedEntityNotFound(_) => StatusCode::NOT_FOUND,

            // 400 Bad Request - 検索パラメータや入力値の不備
            CatalogError::InvalidSearch(_) | CatalogError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }

            // 409 Conflict - 他のエンティティが使用中
            CatalogError::BookCurrentlyBorrowed | CatalogError::AuthorHasBooks => {
                StatusCode::CONFLICT
            }

            CatalogError::RepositoryError(_) | CatalogError::PasswordHashError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self.0 {
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CatalogError::RepositoryError(e) => {
                tracing::error!("Repository error: {}", e);
                "An unexpected error occurred".to_string()
            }
            CatalogError::PasswordHashError(e) => {
                tracing::error!("Password hashing error: {}", e);
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(CatalogError::BookNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CatalogError::ReferencedEntityNotFound("Author not found".into()))
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CatalogError::InvalidSearch("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CatalogError::BookCurrentlyBorrowed).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(CatalogError::RepositoryError("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response =
            ApiError::from(CatalogError::RepositoryError("connection refused".into()))
                .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"An unexpected error occurred");
    }
}
