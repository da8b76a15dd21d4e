use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::parcel::{Parcel, ParcelStatus};
use crate::models::scan::{Scan, ScanType};

// Request para crear un paquete
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParcelRequest {
    pub customer_id: i64,

    #[validate(range(min = 0.0))]
    pub weight_kg: f64,

    #[validate(length(min = 1, max = 200))]
    pub addr_from: String,

    #[validate(length(min = 1, max = 200))]
    pub addr_to: String,
}

// Parámetros de listado con filtros opcionales
#[derive(Debug, Deserialize, Validate)]
pub struct ParcelListQuery {
    // Se parsea contra el vocabulario cerrado antes de tocar la base
    pub status: Option<String>,

    pub customer_id: Option<i64>,

    // Búsqueda libre sobre tracking_code, addr_from y addr_to
    pub q: Option<String>,

    #[validate(range(min = 1))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub size: Option<i64>,

    pub sort: Option<String>,
}

// Response de paquete
#[derive(Debug, Serialize)]
pub struct ParcelResponse {
    pub id: i64,
    pub tracking_code: String,
    pub customer_id: i64,
    pub status: ParcelStatus,
    pub weight_kg: f64,
    pub addr_from: String,
    pub addr_to: String,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl From<Parcel> for ParcelResponse {
    fn from(parcel: Parcel) -> Self {
        Self {
            id: parcel.id,
            tracking_code: parcel.tracking_code,
            customer_id: parcel.customer_id,
            status: parcel.status,
            weight_kg: parcel.weight_kg,
            addr_from: parcel.addr_from,
            addr_to: parcel.addr_to,
            created_at: parcel.created_at,
            delivered_at: parcel.delivered_at,
        }
    }
}

// Evento dentro de la línea de tiempo de un paquete
#[derive(Debug, Serialize)]
pub struct TimelineEvent {
    pub ts: DateTime<Utc>,
    #[serde(rename = "type")]
    pub scan_type: ScanType,
    pub location: String,
    pub note: Option<String>,
}

impl From<Scan> for TimelineEvent {
    fn from(scan: Scan) -> Self {
        Self {
            ts: scan.ts,
            scan_type: scan.scan_type,
            location: scan.location,
            note: scan.note,
        }
    }
}

// Línea de tiempo completa de un paquete
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub tracking_code: String,
    pub events: Vec<TimelineEvent>,
}
