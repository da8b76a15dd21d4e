use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::scan::{Scan, ScanType};

// Request para registrar un escaneo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScanRequest {
    // Se parsea contra el vocabulario cerrado antes de tocar la base
    #[serde(rename = "type")]
    pub scan_type: String,

    #[validate(length(min = 1, max = 200))]
    pub location: String,

    pub ts: DateTime<Utc>,

    pub note: Option<String>,
}

// Parámetros de listado de escaneos
#[derive(Debug, Deserialize, Validate)]
pub struct ScanListQuery {
    #[validate(range(min = 1))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 200))]
    pub size: Option<i64>,

    pub sort: Option<String>,
}

// Response de escaneo
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub id: i64,
    pub parcel_id: i64,
    #[serde(rename = "type")]
    pub scan_type: ScanType,
    pub location: String,
    pub ts: DateTime<Utc>,
    pub note: Option<String>,
}

impl From<Scan> for ScanResponse {
    fn from(scan: Scan) -> Self {
        Self {
            id: scan.id,
            parcel_id: scan.parcel_id,
            scan_type: scan.scan_type,
            location: scan.location,
            ts: scan.ts,
            note: scan.note,
        }
    }
}
