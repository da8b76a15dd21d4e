use sqlx::{PgConnection, PgPool};

use crate::models::customer::Customer;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::sort::SortOrder;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, phone: Option<&str>) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, phone)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    /// Comprobación de existencia dentro de una transacción en curso
    pub async fn exists(conn: &mut PgConnection, id: i64) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(conn)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<Customer, AppError> {
        // Obtener cliente actual; los campos ausentes conservan su valor
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("customer"))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $2, phone = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(phone.or(current.phone))
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn list(
        &self,
        field: &'static str,
        order: SortOrder,
        page: i64,
        size: i64,
    ) -> Result<Vec<Customer>, AppError> {
        // field proviene de la lista blanca de parse_sort, nunca del usuario
        let query = format!(
            "SELECT * FROM customers ORDER BY {} {} OFFSET $1 LIMIT $2",
            field,
            order.as_sql()
        );

        let customers = sqlx::query_as::<_, Customer>(&query)
            .bind((page - 1) * size)
            .bind(size)
            .fetch_all(&self.pool)
            .await?;

        Ok(customers)
    }
}
