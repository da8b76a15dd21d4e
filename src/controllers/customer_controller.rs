use sqlx::PgPool;
use validator::Validate;

use crate::dto::customer_dto::{
    CreateCustomerRequest, CustomerListQuery, CustomerResponse, UpdateCustomerRequest,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::sort::parse_sort;

const CUSTOMER_SORT_FIELDS: &[&str] = &["id", "name", "created_at"];
const DEFAULT_CUSTOMER_SORT: &str = "created_at,desc";

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        let customer = self
            .repository
            .create(&request.name, request.phone.as_deref())
            .await?;

        Ok(customer.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("customer"))?;

        Ok(customer.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        let customer = self
            .repository
            .update(id, request.name, request.phone)
            .await?;

        Ok(customer.into())
    }

    pub async fn list(&self, query: CustomerListQuery) -> Result<Vec<CustomerResponse>, AppError> {
        query.validate()?;

        let page = query.page.unwrap_or(1);
        let size = query.size.unwrap_or(20);
        let sort = query
            .sort
            .unwrap_or_else(|| DEFAULT_CUSTOMER_SORT.to_string());
        let (field, order) = parse_sort(&sort, CUSTOMER_SORT_FIELDS, "created_at");

        let customers = self.repository.list(field, order, page, size).await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }
}
