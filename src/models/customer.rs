//! Modelo de cliente

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cliente propietario de paquetes
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
