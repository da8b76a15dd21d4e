//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, ordenación
//! de listados y generación de códigos de seguimiento.

pub mod errors;
pub mod sort;
pub mod tracking_code;
