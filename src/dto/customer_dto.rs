use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::customer::Customer;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9 +()-]{7,20}$").unwrap();
}

// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,

    #[validate(length(max = 20), regex = "PHONE_REGEX")]
    pub phone: Option<String>,
}

// Request para actualizar un cliente (campos opcionales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: Option<String>,

    #[validate(length(max = 20), regex = "PHONE_REGEX")]
    pub phone: Option<String>,
}

// Parámetros de listado
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerListQuery {
    #[validate(range(min = 1))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub size: Option<i64>,

    pub sort: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            created_at: customer.created_at,
        }
    }
}
