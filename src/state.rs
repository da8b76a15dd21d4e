//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::utils::tracking_code::TrackingCodeFormatter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub code_formatter: TrackingCodeFormatter,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let code_formatter = TrackingCodeFormatter::from_raw(
            &config.tracking_code_prefix,
            &config.tracking_code_padding,
        );
        Self {
            pool,
            config,
            code_formatter,
        }
    }
}
