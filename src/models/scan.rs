//! Modelo de escaneo
//!
//! Cada escaneo es un evento inmutable en la historia de un paquete. El tipo
//! de escaneo mapea uno a uno con el estado que produce; `new` no existe como
//! tipo de escaneo porque es el estado exclusivo de creación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::parcel::ParcelStatus;

/// Tipo de evento de escaneo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "scan_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScanType {
    PickedUp,
    InTransit,
    Delivered,
}

impl ScanType {
    /// Estado objetivo que produce este tipo de escaneo al aplicarse
    pub fn target_status(&self) -> ParcelStatus {
        match self {
            ScanType::PickedUp => ParcelStatus::PickedUp,
            ScanType::InTransit => ParcelStatus::InTransit,
            ScanType::Delivered => ParcelStatus::Delivered,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::PickedUp => "picked_up",
            ScanType::InTransit => "in_transit",
            ScanType::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "picked_up" => Ok(ScanType::PickedUp),
            "in_transit" => Ok(ScanType::InTransit),
            "delivered" => Ok(ScanType::Delivered),
            other => Err(format!("unknown scan type '{}'", other)),
        }
    }
}

/// Escaneo persistido
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Scan {
    pub id: i64,
    pub parcel_id: i64,
    #[sqlx(rename = "type")]
    pub scan_type: ScanType,
    pub location: String,
    pub ts: DateTime<Utc>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scan_type_has_exactly_one_target_status() {
        assert_eq!(ScanType::PickedUp.target_status(), ParcelStatus::PickedUp);
        assert_eq!(ScanType::InTransit.target_status(), ParcelStatus::InTransit);
        assert_eq!(ScanType::Delivered.target_status(), ParcelStatus::Delivered);
    }

    #[test]
    fn test_from_str_round_trips_every_type() {
        for scan_type in [ScanType::PickedUp, ScanType::InTransit, ScanType::Delivered] {
            assert_eq!(scan_type.as_str().parse::<ScanType>(), Ok(scan_type));
        }
    }

    #[test]
    fn test_new_is_not_a_scan_type() {
        // El estado de creación no puede enviarse como escaneo
        assert!("new".parse::<ScanType>().is_err());
    }

    #[test]
    fn test_from_str_rejects_unknown_values() {
        assert!("teleported".parse::<ScanType>().is_err());
        assert!("DELIVERED".parse::<ScanType>().is_err());
    }
}
