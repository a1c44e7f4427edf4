use crate::domain::{Customer, CustomerId, NewCustomer};
use async_trait::async_trait;

use super::{Page, PageRequest, Result};

/// 利用者リポジトリポート
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Customer>>;

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>>;

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerId>;

    async fn update(&self, customer: &Customer) -> Result<()>;

    /// 利用者と、その利用者の貸出記録を1トランザクションで削除する
    async fn delete_by_id(&self, id: CustomerId) -> Result<()>;
}
