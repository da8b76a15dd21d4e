use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::scan_controller::ScanController;
use crate::dto::scan_dto::{CreateScanRequest, ScanListQuery, ScanResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_scan_router() -> Router<AppState> {
    Router::new()
        .route("/:tracking_code/scans", post(add_scan))
        .route("/:tracking_code/scans", get(list_scans))
}

async fn add_scan(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(request): Json<CreateScanRequest>,
) -> Result<(StatusCode, Json<ScanResponse>), AppError> {
    let controller = ScanController::new(state.pool.clone());
    let response = controller.add_scan(&tracking_code, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_scans(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Query(query): Query<ScanListQuery>,
) -> Result<Json<Vec<ScanResponse>>, AppError> {
    let controller = ScanController::new(state.pool.clone());
    let response = controller.list_scans(&tracking_code, query).await?;
    Ok(Json(response))
}
