//! Controladores HTTP: validan la entrada, delegan en servicios y
//! repositorios, y mapean los modelos a DTOs de respuesta

pub mod customer_controller;
pub mod parcel_controller;
pub mod scan_controller;
