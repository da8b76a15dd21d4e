//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y la composición de capas
//! HTTP comunes de la aplicación.

pub mod cors;
