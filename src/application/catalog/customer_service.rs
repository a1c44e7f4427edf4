use crate::domain::{Customer, CustomerDetails, CustomerId};
use crate::ports::{Page, PageRequest};

use super::dependencies::ServiceDependencies;
use super::errors::{CatalogError, Result};

/// 利用者一覧をページ単位で取得する
pub async fn list_customers(
    deps: &ServiceDependencies,
    page: PageRequest,
) -> Result<Page<Customer>> {
    deps.customers
        .find_all(page)
        .await
        .map_err(CatalogError::RepositoryError)
}

/// IDで利用者を取得する
pub async fn get_customer(deps: &ServiceDependencies, id: CustomerId) -> Result<Customer> {
    deps.customers
        .find_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?
        .ok_or(CatalogError::CustomerNotFound)
}

/// 利用者を作成する
///
/// パスワードはハッシュ化してから保存する。作成時のパスワードは必須。
pub async fn create_customer(
    deps: &ServiceDependencies,
    details: CustomerDetails,
) -> Result<Customer> {
    let password = details
        .new_password()
        .ok_or_else(|| CatalogError::Validation("Password is required".to_string()))?;

    let password_hash = deps
        .password_hasher
        .encode(password)
        .map_err(CatalogError::PasswordHashError)?;

    let new_customer = details.into_new_customer(password_hash);
    let id = deps
        .customers
        .insert(&new_customer)
        .await
        .map_err(CatalogError::RepositoryError)?;

    tracing::info!(customer_id = %id, "customer created");
    Ok(Customer::from_new(id, new_customer))
}

/// 利用者の項目を置き換える
///
/// パスワードが空でなく指定されている場合のみ再ハッシュして差し替え、
/// それ以外は保存済みのハッシュを維持する。
pub async fn update_customer(
    deps: &ServiceDependencies,
    id: CustomerId,
    details: CustomerDetails,
) -> Result<Customer> {
    let mut customer = get_customer(deps, id).await?;

    let password_hash = details
        .new_password()
        .map(|password| deps.password_hasher.encode(password))
        .transpose()
        .map_err(CatalogError::PasswordHashError)?;

    customer.replace_with(details, password_hash);

    deps.customers
        .update(&customer)
        .await
        .map_err(CatalogError::RepositoryError)?;

    Ok(customer)
}

/// 利用者と、その利用者の貸出記録を削除する
pub async fn delete_customer(deps: &ServiceDependencies, id: CustomerId) -> Result<()> {
    deps.customers
        .delete_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?;

    tracing::info!(customer_id = %id, "customer deleted");
    Ok(())
}
