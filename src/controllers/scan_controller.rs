use sqlx::PgPool;
use validator::Validate;

use crate::dto::scan_dto::{CreateScanRequest, ScanListQuery, ScanResponse};
use crate::models::scan::ScanType;
use crate::repositories::parcel_repository::ParcelRepository;
use crate::repositories::scan_repository::ScanRepository;
use crate::services::scan_service::ScanService;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::sort::parse_sort;

const SCAN_SORT_FIELDS: &[&str] = &["ts", "location", "type", "id"];
const DEFAULT_SCAN_SORT: &str = "ts,asc";

pub struct ScanController {
    service: ScanService,
    parcels: ParcelRepository,
    scans: ScanRepository,
}

impl ScanController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: ScanService::new(pool.clone()),
            parcels: ParcelRepository::new(pool.clone()),
            scans: ScanRepository::new(pool),
        }
    }

    pub async fn add_scan(
        &self,
        tracking_code: &str,
        request: CreateScanRequest,
    ) -> Result<ScanResponse, AppError> {
        request.validate()?;

        // Un tipo fuera del vocabulario es un error de validación, no un
        // conflicto, y se decide antes de tocar la base
        let scan_type = request
            .scan_type
            .parse::<ScanType>()
            .map_err(|_| validation_error("type", "unrecognized scan type"))?;

        let scan = self
            .service
            .apply_scan(
                tracking_code,
                scan_type,
                request.ts,
                &request.location,
                request.note.as_deref(),
            )
            .await?;

        Ok(scan.into())
    }

    pub async fn list_scans(
        &self,
        tracking_code: &str,
        query: ScanListQuery,
    ) -> Result<Vec<ScanResponse>, AppError> {
        query.validate()?;

        let parcel = self
            .parcels
            .find_by_code(tracking_code)
            .await?
            .ok_or_else(|| not_found_error("parcel"))?;

        let page = query.page.unwrap_or(1);
        let size = query.size.unwrap_or(50);
        let sort = query.sort.unwrap_or_else(|| DEFAULT_SCAN_SORT.to_string());
        let (field, order) = parse_sort(&sort, SCAN_SORT_FIELDS, "ts");

        let scans = self
            .scans
            .list_for_parcel(parcel.id, field, order, page, size)
            .await?;

        Ok(scans.into_iter().map(ScanResponse::from).collect())
    }
}
