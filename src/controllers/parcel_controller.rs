use sqlx::PgPool;
use validator::Validate;

use crate::dto::parcel_dto::{
    CreateParcelRequest, ParcelListQuery, ParcelResponse, TimelineEvent, TimelineResponse,
};
use crate::models::parcel::ParcelStatus;
use crate::repositories::parcel_repository::ParcelRepository;
use crate::services::parcel_service::ParcelService;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::sort::parse_sort;
use crate::utils::tracking_code::TrackingCodeFormatter;

const PARCEL_SORT_FIELDS: &[&str] = &["created_at", "status", "id", "tracking_code", "delivered_at"];
const DEFAULT_PARCEL_SORT: &str = "created_at,desc";

pub struct ParcelController {
    service: ParcelService,
    repository: ParcelRepository,
}

impl ParcelController {
    pub fn new(pool: PgPool, formatter: TrackingCodeFormatter) -> Self {
        Self {
            service: ParcelService::new(pool.clone(), formatter),
            repository: ParcelRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateParcelRequest) -> Result<ParcelResponse, AppError> {
        request.validate()?;

        let parcel = self
            .service
            .create_parcel(
                request.customer_id,
                request.weight_kg,
                &request.addr_from,
                &request.addr_to,
            )
            .await?;

        Ok(parcel.into())
    }

    pub async fn get_by_code(&self, tracking_code: &str) -> Result<ParcelResponse, AppError> {
        let parcel = self
            .repository
            .find_by_code(tracking_code)
            .await?
            .ok_or_else(|| not_found_error("parcel"))?;

        Ok(parcel.into())
    }

    pub async fn list(&self, query: ParcelListQuery) -> Result<Vec<ParcelResponse>, AppError> {
        query.validate()?;

        // El filtro de estado se parsea contra el vocabulario cerrado antes
        // de consultar; un valor desconocido es un error de validación
        let status = match query.status.as_deref() {
            Some(raw) => Some(
                raw.parse::<ParcelStatus>()
                    .map_err(|_| validation_error("status", "unknown status value"))?,
            ),
            None => None,
        };

        let page = query.page.unwrap_or(1);
        let size = query.size.unwrap_or(20);
        let sort = query.sort.unwrap_or_else(|| DEFAULT_PARCEL_SORT.to_string());
        let (field, order) = parse_sort(&sort, PARCEL_SORT_FIELDS, "created_at");

        let parcels = self
            .repository
            .list(
                status,
                query.customer_id,
                query.q.as_deref(),
                field,
                order,
                page,
                size,
            )
            .await?;

        Ok(parcels.into_iter().map(ParcelResponse::from).collect())
    }

    pub async fn timeline(&self, tracking_code: &str) -> Result<TimelineResponse, AppError> {
        let (parcel, scans) = self.service.timeline(tracking_code).await?;

        Ok(TimelineResponse {
            tracking_code: parcel.tracking_code,
            events: scans.into_iter().map(TimelineEvent::from).collect(),
        })
    }
}
