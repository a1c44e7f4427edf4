use crate::domain::{Customer, CustomerId, NewCustomer};
use crate::ports::customer_repository::CustomerRepository as CustomerRepositoryTrait;
use crate::ports::{Page, PageRequest, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::map_row_to_customer;

/// CustomerRepositoryのPostgreSQL実装
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(&self, page: PageRequest) -> Result<Page<Customer>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(
            r#"
            SELECT
                id AS customer_id,
                name AS customer_name,
                email AS customer_email,
                address AS customer_address,
                phone_number AS customer_phone_number,
                password_hash AS customer_password_hash
            FROM customers
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let customers = rows
            .iter()
            .map(map_row_to_customer)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Page::new(customers, page, total as u64))
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            SELECT
                id AS customer_id,
                name AS customer_name,
                email AS customer_email,
                address AS customer_address,
                phone_number AS customer_phone_number,
                password_hash AS customer_password_hash
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_customer).transpose()?)
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO customers (name, email, address, phone_number, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.phone_number)
        .bind(&customer.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(CustomerId::new(id))
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE customers
            SET name = $2,
                email = $3,
                address = $4,
                phone_number = $5,
                password_hash = $6
            WHERE id = $1
            "#,
        )
        .bind(customer.id.value())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.phone_number)
        .bind(&customer.password_hash)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 利用者の貸出記録も同じトランザクションで削除する
    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM borrowing_records WHERE customer_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
