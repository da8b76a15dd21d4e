//! DTOs de la API
//!
//! Estructuras de request y response con su validación declarativa.

pub mod customer_dto;
pub mod parcel_dto;
pub mod scan_dto;
