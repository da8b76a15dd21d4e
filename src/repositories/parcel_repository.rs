use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::models::parcel::{Parcel, ParcelStatus};
use crate::utils::errors::AppError;
use crate::utils::sort::SortOrder;

pub struct ParcelRepository {
    pool: PgPool,
}

impl ParcelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_code(&self, tracking_code: &str) -> Result<Option<Parcel>, AppError> {
        let parcel =
            sqlx::query_as::<_, Parcel>("SELECT * FROM parcels WHERE tracking_code = $1")
                .bind(tracking_code)
                .fetch_optional(&self.pool)
                .await?;

        Ok(parcel)
    }

    /// Cargar el paquete bloqueando su fila hasta el final de la transacción.
    ///
    /// Serializa la secuencia leer-validar-escribir por paquete: un segundo
    /// escaneo concurrente sobre el mismo paquete espera aquí y revalida
    /// contra el estado ya confirmado.
    pub async fn lock_by_code(
        conn: &mut PgConnection,
        tracking_code: &str,
    ) -> Result<Option<Parcel>, AppError> {
        let parcel = sqlx::query_as::<_, Parcel>(
            "SELECT * FROM parcels WHERE tracking_code = $1 FOR UPDATE",
        )
        .bind(tracking_code)
        .fetch_optional(conn)
        .await?;

        Ok(parcel)
    }

    /// Insertar el borrador con su código provisional
    pub async fn insert_draft(
        conn: &mut PgConnection,
        placeholder_code: &str,
        customer_id: i64,
        weight_kg: f64,
        addr_from: &str,
        addr_to: &str,
    ) -> Result<Parcel, AppError> {
        let parcel = sqlx::query_as::<_, Parcel>(
            r#"
            INSERT INTO parcels (tracking_code, customer_id, status, weight_kg, addr_from, addr_to)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(placeholder_code)
        .bind(customer_id)
        .bind(ParcelStatus::New)
        .bind(weight_kg)
        .bind(addr_from)
        .bind(addr_to)
        .fetch_one(conn)
        .await?;

        Ok(parcel)
    }

    /// Sustituir el código provisional por el definitivo
    pub async fn finalize_tracking_code(
        conn: &mut PgConnection,
        id: i64,
        tracking_code: &str,
    ) -> Result<Parcel, AppError> {
        let parcel = sqlx::query_as::<_, Parcel>(
            r#"
            UPDATE parcels
            SET tracking_code = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(tracking_code)
        .fetch_one(conn)
        .await?;

        Ok(parcel)
    }

    /// Aplicar el nuevo estado tras un escaneo aceptado.
    ///
    /// `delivered_at` solo se escribe la primera vez gracias al COALESCE;
    /// una vez fijado es inmutable.
    pub async fn apply_status(
        conn: &mut PgConnection,
        id: i64,
        status: ParcelStatus,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE parcels
            SET status = $2, delivered_at = COALESCE(delivered_at, $3)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(delivered_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        &self,
        status: Option<ParcelStatus>,
        customer_id: Option<i64>,
        q: Option<&str>,
        field: &'static str,
        order: SortOrder,
        page: i64,
        size: i64,
    ) -> Result<Vec<Parcel>, AppError> {
        let like = q.map(|q| format!("%{}%", q));

        // field proviene de la lista blanca de parse_sort, nunca del usuario
        let query = format!(
            r#"
            SELECT * FROM parcels
            WHERE ($1::parcel_status IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR customer_id = $2)
              AND ($3::TEXT IS NULL
                   OR tracking_code ILIKE $3
                   OR addr_from ILIKE $3
                   OR addr_to ILIKE $3)
            ORDER BY {} {}
            OFFSET $4 LIMIT $5
            "#,
            field,
            order.as_sql()
        );

        let parcels = sqlx::query_as::<_, Parcel>(&query)
            .bind(status)
            .bind(customer_id)
            .bind(like)
            .bind((page - 1) * size)
            .bind(size)
            .fetch_all(&self.pool)
            .await?;

        Ok(parcels)
    }
}
