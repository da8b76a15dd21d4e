//! Repositorios de acceso a datos
//!
//! Consultas SQLx sobre PostgreSQL. Las operaciones que participan en una
//! transacción reciben la conexión en curso; el resto trabaja sobre el pool.

pub mod customer_repository;
pub mod parcel_repository;
pub mod scan_repository;
