use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::models::scan::{Scan, ScanType};
use crate::utils::errors::AppError;
use crate::utils::sort::SortOrder;

pub struct ScanRepository {
    pool: PgPool,
}

impl ScanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un escaneo dentro de la transacción del motor de transiciones
    pub async fn insert(
        conn: &mut PgConnection,
        parcel_id: i64,
        scan_type: ScanType,
        location: &str,
        ts: DateTime<Utc>,
        note: Option<&str>,
    ) -> Result<Scan, AppError> {
        let scan = sqlx::query_as::<_, Scan>(
            r#"
            INSERT INTO scans (parcel_id, type, location, ts, note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(parcel_id)
        .bind(scan_type)
        .bind(location)
        .bind(ts)
        .bind(note)
        .fetch_one(conn)
        .await?;

        Ok(scan)
    }

    /// Historia completa del paquete: ts ascendente, empates por orden de inserción
    pub async fn timeline_for_parcel(&self, parcel_id: i64) -> Result<Vec<Scan>, AppError> {
        let scans = sqlx::query_as::<_, Scan>(
            "SELECT * FROM scans WHERE parcel_id = $1 ORDER BY ts ASC, id ASC",
        )
        .bind(parcel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(scans)
    }

    pub async fn list_for_parcel(
        &self,
        parcel_id: i64,
        field: &'static str,
        order: SortOrder,
        page: i64,
        size: i64,
    ) -> Result<Vec<Scan>, AppError> {
        // field proviene de la lista blanca de parse_sort, nunca del usuario
        let query = format!(
            "SELECT * FROM scans WHERE parcel_id = $1 ORDER BY {} {} OFFSET $2 LIMIT $3",
            field,
            order.as_sql()
        );

        let scans = sqlx::query_as::<_, Scan>(&query)
            .bind(parcel_id)
            .bind((page - 1) * size)
            .bind(size)
            .fetch_all(&self.pool)
            .await?;

        Ok(scans)
    }
}
