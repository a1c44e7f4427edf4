pub mod authors;
pub mod books;
pub mod borrowings;
pub mod customers;

use crate::application::catalog::ServiceDependencies;
use crate::ports::PageRequest;

use super::types::PageQuery;

/// 一覧取得の1ページあたりの件数（固定）
pub const PAGE_SIZE: u32 = 5;

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

impl PageQuery {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page, PAGE_SIZE)
    }
}
