use crate::domain::{Author, AuthorDetails, AuthorId};
use crate::ports::{Deletion, Page, PageRequest};

use super::dependencies::ServiceDependencies;
use super::errors::{CatalogError, Result};

/// 著者一覧をページ単位で取得する
pub async fn list_authors(deps: &ServiceDependencies, page: PageRequest) -> Result<Page<Author>> {
    deps.authors
        .find_all(page)
        .await
        .map_err(CatalogError::RepositoryError)
}

/// IDで著者を取得する
pub async fn get_author(deps: &ServiceDependencies, id: AuthorId) -> Result<Author> {
    deps.authors
        .find_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?
        .ok_or(CatalogError::AuthorNotFound)
}

/// 著者を作成する
pub async fn create_author(deps: &ServiceDependencies, details: AuthorDetails) -> Result<Author> {
    let id = deps
        .authors
        .insert(&details)
        .await
        .map_err(CatalogError::RepositoryError)?;

    tracing::info!(author_id = %id, "author created");
    Ok(Author::from_details(id, details))
}

/// 著者の全項目を置き換える
pub async fn update_author(
    deps: &ServiceDependencies,
    id: AuthorId,
    details: AuthorDetails,
) -> Result<Author> {
    let mut author = get_author(deps, id).await?;
    author.replace_with(details);

    deps.authors
        .update(&author)
        .await
        .map_err(CatalogError::RepositoryError)?;

    Ok(author)
}

/// 著者を削除する
///
/// 存在しないIDでも成功する。書籍から参照されている場合はストレージが拒否する。
pub async fn delete_author(deps: &ServiceDependencies, id: AuthorId) -> Result<()> {
    match deps
        .authors
        .delete_by_id(id)
        .await
        .map_err(CatalogError::RepositoryError)?
    {
        Deletion::Deleted => {
            tracing::info!(author_id = %id, "author deleted");
            Ok(())
        }
        Deletion::Blocked => {
            tracing::warn!(author_id = %id, "author still referenced by books");
            Err(CatalogError::AuthorHasBooks)
        }
    }
}
