use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::parcel_controller::ParcelController;
use crate::dto::parcel_dto::{
    CreateParcelRequest, ParcelListQuery, ParcelResponse, TimelineResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parcel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_parcel))
        .route("/", get(list_parcels))
        .route("/:tracking_code", get(get_parcel))
        .route("/:tracking_code/timeline", get(get_timeline))
}

async fn create_parcel(
    State(state): State<AppState>,
    Json(request): Json<CreateParcelRequest>,
) -> Result<(StatusCode, Json<ParcelResponse>), AppError> {
    let controller = ParcelController::new(state.pool.clone(), state.code_formatter.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_parcel(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<ParcelResponse>, AppError> {
    let controller = ParcelController::new(state.pool.clone(), state.code_formatter.clone());
    let response = controller.get_by_code(&tracking_code).await?;
    Ok(Json(response))
}

async fn list_parcels(
    State(state): State<AppState>,
    Query(query): Query<ParcelListQuery>,
) -> Result<Json<Vec<ParcelResponse>>, AppError> {
    let controller = ParcelController::new(state.pool.clone(), state.code_formatter.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_timeline(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<TimelineResponse>, AppError> {
    let controller = ParcelController::new(state.pool.clone(), state.code_formatter.clone());
    let response = controller.timeline(&tracking_code).await?;
    Ok(Json(response))
}
