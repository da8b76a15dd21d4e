//! Parcel Tracking API
//!
//! Backend de seguimiento de paquetes: clientes, paquetes con código de
//! tracking y scans que hacen avanzar el estado del paquete.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::build_router;
pub use state::AppState;
