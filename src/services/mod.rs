//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. El motor de
//! transiciones de escaneo vive aquí; los controladores no deciden
//! transiciones por su cuenta.

pub mod parcel_service;
pub mod scan_service;

pub use parcel_service::*;
pub use scan_service::*;
