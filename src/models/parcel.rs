//! Modelo de paquete
//!
//! Este módulo define el paquete persistido y su estado de ciclo de vida.
//! El estado es una enumeración cerrada con un orden total fijo; cualquier
//! valor fuera del vocabulario falla al parsear en lugar de colarse como
//! texto libre.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estado del ciclo de vida de un paquete
///
/// El orden de avance es fijo: `new → picked_up → in_transit → delivered`.
/// `delivered` es terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "parcel_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    New,
    PickedUp,
    InTransit,
    Delivered,
}

impl ParcelStatus {
    /// Siguiente estado en el orden fijo, o `None` si el estado es terminal
    pub fn next(&self) -> Option<ParcelStatus> {
        match self {
            ParcelStatus::New => Some(ParcelStatus::PickedUp),
            ParcelStatus::PickedUp => Some(ParcelStatus::InTransit),
            ParcelStatus::InTransit => Some(ParcelStatus::Delivered),
            ParcelStatus::Delivered => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ParcelStatus::Delivered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::New => "new",
            ParcelStatus::PickedUp => "picked_up",
            ParcelStatus::InTransit => "in_transit",
            ParcelStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParcelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ParcelStatus::New),
            "picked_up" => Ok(ParcelStatus::PickedUp),
            "in_transit" => Ok(ParcelStatus::InTransit),
            "delivered" => Ok(ParcelStatus::Delivered),
            other => Err(format!("unknown parcel status '{}'", other)),
        }
    }
}

/// Paquete persistido
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Parcel {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_the_fixed_order() {
        assert_eq!(ParcelStatus::New.next(), Some(ParcelStatus::PickedUp));
        assert_eq!(ParcelStatus::PickedUp.next(), Some(ParcelStatus::InTransit));
        assert_eq!(ParcelStatus::InTransit.next(), Some(ParcelStatus::Delivered));
        assert_eq!(ParcelStatus::Delivered.next(), None);
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        assert!(!ParcelStatus::New.is_terminal());
        assert!(!ParcelStatus::PickedUp.is_terminal());
        assert!(!ParcelStatus::InTransit.is_terminal());
        assert!(ParcelStatus::Delivered.is_terminal());
    }

    #[test]
    fn test_from_str_round_trips_every_status() {
        for status in [
            ParcelStatus::New,
            ParcelStatus::PickedUp,
            ParcelStatus::InTransit,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_values() {
        assert!("lost".parse::<ParcelStatus>().is_err());
        assert!("PICKED_UP".parse::<ParcelStatus>().is_err());
        assert!("".parse::<ParcelStatus>().is_err());
    }
}
