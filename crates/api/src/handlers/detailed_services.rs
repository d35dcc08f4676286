//! Handlers for the `/detailed-services` resource (general services).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use carcare_core::error::CoreError;
use carcare_db::models::detailed_service::{
    CreateGeneralService, GeneralService, UpdateGeneralService,
};
use carcare_db::repositories::DetailedServiceRepo;
use serde::Serialize;

use super::deleted_with_assets;
use crate::error::AppResult;
use crate::extract::Json;
use crate::query::{IdBody, IdParams};
use crate::response::Success;
use crate::state::AppState;

const ENTITY: &str = "Service";

#[derive(Debug, Serialize)]
pub struct ServiceList {
    pub services: Vec<GeneralService>,
}

#[derive(Debug, Serialize)]
pub struct ServicePayload {
    pub service: GeneralService,
}

/// GET /api/detailed-services
///
/// Sorted by `order`, then creation time.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let services = DetailedServiceRepo::list(&state.pool).await?;
    Ok(Success::json(ServiceList { services }))
}

/// POST /api/detailed-services
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGeneralService>,
) -> AppResult<impl IntoResponse> {
    let new = input.validate()?;
    let service = DetailedServiceRepo::create(&state.pool, &new).await?;
    tracing::info!(service_id = %service.id, slug = %service.slug, "General service created");
    Ok(Success::json(ServicePayload { service }))
}

/// PUT /api/detailed-services
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<IdBody<UpdateGeneralService>>,
) -> AppResult<impl IntoResponse> {
    let (id, input) = body.into_parts(ENTITY)?;
    let changes = input.validate()?;

    let service = DetailedServiceRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(service_id = %id, "General service updated");
    Ok(Success::json(ServicePayload { service }))
}

/// DELETE /api/detailed-services?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse(ENTITY)?;
    let service = DetailedServiceRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(service_id = %id, "General service deleted");

    let payload =
        deleted_with_assets(&state, "Service deleted successfully", service.asset_ids()).await;
    Ok(Success::json(payload))
}
