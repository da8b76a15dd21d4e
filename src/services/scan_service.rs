//! Motor de transiciones de escaneo
//!
//! Este módulo es la única autoridad que decide si un escaneo puede
//! aplicarse a un paquete. La regla es estricta: cada escaneo debe avanzar
//! el estado exactamente un paso en el orden fijo
//! `new → picked_up → in_transit → delivered`. No hay saltos, no hay
//! retrocesos y un paquete entregado no acepta más escaneos.
//!
//! La aplicación es atómica: el alta del escaneo y la mutación del paquete
//! ocurren en la misma transacción, con la fila del paquete bloqueada para
//! serializar escaneos concurrentes sobre el mismo paquete.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::models::parcel::ParcelStatus;
use crate::models::scan::{Scan, ScanType};
use crate::repositories::parcel_repository::ParcelRepository;
use crate::repositories::scan_repository::ScanRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Rechazos del motor de transiciones
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot transition from delivered")]
    TerminalState,

    #[error("parcel is already {0}")]
    AlreadyInStatus(ParcelStatus),

    #[error("illegal status jump from {from} to {to}")]
    IllegalJump {
        from: ParcelStatus,
        to: ParcelStatus,
    },
}

impl From<TransitionError> for AppError {
    fn from(e: TransitionError) -> Self {
        AppError::Conflict(e.to_string())
    }
}

/// Decidir si un escaneo es válido para el estado actual del paquete.
///
/// Devuelve el estado objetivo si la transición es legal. Un escaneo cuyo
/// objetivo coincide con el estado actual se rechaza como duplicado: la
/// historia de escaneos guarda exactamente un evento por transición.
pub fn validate_transition(
    current: ParcelStatus,
    scan_type: ScanType,
) -> Result<ParcelStatus, TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::TerminalState);
    }

    let target = scan_type.target_status();
    if target == current {
        return Err(TransitionError::AlreadyInStatus(current));
    }

    match current.next() {
        Some(next) if next == target => Ok(target),
        _ => Err(TransitionError::IllegalJump {
            from: current,
            to: target,
        }),
    }
}

/// Servicio que aplica escaneos contra el almacén
pub struct ScanService {
    pool: PgPool,
}

impl ScanService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aplicar un escaneo a un paquete de forma atómica.
    ///
    /// Carga el paquete con su fila bloqueada, valida la transición contra
    /// el estado confirmado, inserta el escaneo y actualiza el estado del
    /// paquete. Si la transición alcanza `delivered`, fija `delivered_at`
    /// con el `ts` del escaneo. Cualquier fallo revierte la transacción
    /// completa: nunca queda un escaneo sin su mutación de paquete.
    pub async fn apply_scan(
        &self,
        tracking_code: &str,
        scan_type: ScanType,
        ts: DateTime<Utc>,
        location: &str,
        note: Option<&str>,
    ) -> Result<Scan, AppError> {
        let mut tx = self.pool.begin().await?;

        let parcel = ParcelRepository::lock_by_code(&mut *tx, tracking_code)
            .await?
            .ok_or_else(|| not_found_error("parcel"))?;

        let target = validate_transition(parcel.status, scan_type)?;

        let scan =
            ScanRepository::insert(&mut *tx, parcel.id, scan_type, location, ts, note).await?;

        let delivered_at = if target == ParcelStatus::Delivered {
            Some(ts)
        } else {
            None
        };
        ParcelRepository::apply_status(&mut *tx, parcel.id, target, delivered_at).await?;

        tx.commit().await?;

        info!(
            "📦 Escaneo {} aplicado a {}: {} → {}",
            scan_type, tracking_code, parcel.status, target
        );

        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_forward_steps() {
        assert_eq!(
            validate_transition(ParcelStatus::New, ScanType::PickedUp),
            Ok(ParcelStatus::PickedUp)
        );
        assert_eq!(
            validate_transition(ParcelStatus::PickedUp, ScanType::InTransit),
            Ok(ParcelStatus::InTransit)
        );
        assert_eq!(
            validate_transition(ParcelStatus::InTransit, ScanType::Delivered),
            Ok(ParcelStatus::Delivered)
        );
    }

    #[test]
    fn test_skipping_forward_is_rejected() {
        assert_eq!(
            validate_transition(ParcelStatus::New, ScanType::InTransit),
            Err(TransitionError::IllegalJump {
                from: ParcelStatus::New,
                to: ParcelStatus::InTransit,
            })
        );
        assert_eq!(
            validate_transition(ParcelStatus::New, ScanType::Delivered),
            Err(TransitionError::IllegalJump {
                from: ParcelStatus::New,
                to: ParcelStatus::Delivered,
            })
        );
        assert_eq!(
            validate_transition(ParcelStatus::PickedUp, ScanType::Delivered),
            Err(TransitionError::IllegalJump {
                from: ParcelStatus::PickedUp,
                to: ParcelStatus::Delivered,
            })
        );
    }

    #[test]
    fn test_moving_backward_is_rejected() {
        assert_eq!(
            validate_transition(ParcelStatus::InTransit, ScanType::PickedUp),
            Err(TransitionError::IllegalJump {
                from: ParcelStatus::InTransit,
                to: ParcelStatus::PickedUp,
            })
        );
    }

    #[test]
    fn test_duplicate_scan_is_rejected_as_conflict() {
        assert_eq!(
            validate_transition(ParcelStatus::PickedUp, ScanType::PickedUp),
            Err(TransitionError::AlreadyInStatus(ParcelStatus::PickedUp))
        );
        assert_eq!(
            validate_transition(ParcelStatus::InTransit, ScanType::InTransit),
            Err(TransitionError::AlreadyInStatus(ParcelStatus::InTransit))
        );
    }

    #[test]
    fn test_delivered_is_terminal_for_every_scan_type() {
        for scan_type in [ScanType::PickedUp, ScanType::InTransit, ScanType::Delivered] {
            assert_eq!(
                validate_transition(ParcelStatus::Delivered, scan_type),
                Err(TransitionError::TerminalState)
            );
        }
    }

    #[test]
    fn test_transition_errors_surface_as_conflicts() {
        let err: AppError = TransitionError::TerminalState.into();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(err.to_string().contains("cannot transition from delivered"));

        let err: AppError = TransitionError::AlreadyInStatus(ParcelStatus::PickedUp).into();
        assert!(err.to_string().contains("parcel is already picked_up"));

        let err: AppError = TransitionError::IllegalJump {
            from: ParcelStatus::New,
            to: ParcelStatus::Delivered,
        }
        .into();
        assert!(err
            .to_string()
            .contains("illegal status jump from new to delivered"));
    }
}
