use axum::extract::FromRequest;

use super::error::ApiError;

/// `axum::Json` と同じだが、本文の解析失敗を 400 の `ApiError` として返す
///
/// 必須項目の欠落や日付の形式誤りも入力値エラーとして扱う。
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
