use crate::domain::{Author, AuthorDetails, AuthorId};
use crate::ports::author_repository::AuthorRepository as AuthorRepositoryTrait;
use crate::ports::{Deletion, Page, PageRequest, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{is_foreign_key_violation, map_row_to_author};

/// AuthorRepositoryのPostgreSQL実装
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepositoryTrait for AuthorRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Author>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(
            r#"
            SELECT
                id AS author_id,
                name AS author_name,
                birth_date AS author_birth_date,
                nationality AS author_nationality
            FROM authors
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let authors = rows
            .iter()
            .map(map_row_to_author)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Page::new(authors, page, total as u64))
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>> {
        let row = sqlx::query(
            r#"
            SELECT
                id AS author_id,
                name AS author_name,
                birth_date AS author_birth_date,
                nationality AS author_nationality
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_author).transpose()?)
    }

    async fn insert(&self, details: &AuthorDetails) -> Result<AuthorId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO authors (name, birth_date, nationality)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&details.name)
        .bind(details.birth_date)
        .bind(&details.nationality)
        .fetch_one(&self.pool)
        .await?;

        Ok(AuthorId::new(id))
    }

    async fn update(&self, author: &Author) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE authors
            SET name = $2, birth_date = $3, nationality = $4
            WHERE id = $1
            "#,
        )
        .bind(author.id.value())
        .bind(&author.name)
        .bind(author.birth_date)
        .bind(&author.nationality)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// books.author_id の外部キー制約に拒否された場合は `Blocked`
    async fn delete_by_id(&self, id: AuthorId) -> Result<Deletion> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Deletion::Deleted),
            Err(e) if is_foreign_key_violation(&e) => Ok(Deletion::Blocked),
            Err(e) => Err(e.into()),
        }
    }
}
