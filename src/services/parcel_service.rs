//! Servicio de paquetes
//!
//! Creación de paquetes con asignación de código en dos fases y proyección
//! de la línea de tiempo.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::parcel::Parcel;
use crate::models::scan::Scan;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::parcel_repository::ParcelRepository;
use crate::repositories::scan_repository::ScanRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::tracking_code::TrackingCodeFormatter;

pub struct ParcelService {
    pool: PgPool,
    parcels: ParcelRepository,
    scans: ScanRepository,
    formatter: TrackingCodeFormatter,
}

impl ParcelService {
    pub fn new(pool: PgPool, formatter: TrackingCodeFormatter) -> Self {
        Self {
            parcels: ParcelRepository::new(pool.clone()),
            scans: ScanRepository::new(pool.clone()),
            pool,
            formatter,
        }
    }

    /// Crear un paquete para un cliente existente.
    ///
    /// El código definitivo depende del id que asigna la base, así que el
    /// alta ocurre en dos fases dentro de una sola transacción: se inserta
    /// un borrador con un código provisional único y se sustituye por el
    /// definitivo antes del commit. Ningún paquete es visible desde fuera
    /// con el código provisional.
    pub async fn create_parcel(
        &self,
        customer_id: i64,
        weight_kg: f64,
        addr_from: &str,
        addr_to: &str,
    ) -> Result<Parcel, AppError> {
        let mut tx = self.pool.begin().await?;

        if !CustomerRepository::exists(&mut *tx, customer_id).await? {
            return Err(not_found_error("customer"));
        }

        // Provisional único por fila; el UNIQUE de tracking_code admite
        // creaciones concurrentes sin colisión
        let placeholder = format!("TMP-{}", Uuid::new_v4());

        let draft = ParcelRepository::insert_draft(
            &mut *tx,
            &placeholder,
            customer_id,
            weight_kg,
            addr_from,
            addr_to,
        )
        .await?;

        let tracking_code = self.formatter.format(draft.id)?;
        let parcel =
            ParcelRepository::finalize_tracking_code(&mut *tx, draft.id, &tracking_code).await?;

        tx.commit().await?;

        info!(
            "✅ Paquete {} creado para el cliente {}",
            parcel.tracking_code, customer_id
        );

        Ok(parcel)
    }

    /// Línea de tiempo de un paquete: escaneos por `ts` ascendente con
    /// empates resueltos por orden de inserción
    pub async fn timeline(&self, tracking_code: &str) -> Result<(Parcel, Vec<Scan>), AppError> {
        let parcel = self
            .parcels
            .find_by_code(tracking_code)
            .await?
            .ok_or_else(|| not_found_error("parcel"))?;

        let scans = self.scans.timeline_for_parcel(parcel.id).await?;

        Ok((parcel, scans))
    }
}
