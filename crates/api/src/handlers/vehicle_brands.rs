//! Handlers for the `/vehicle-brands` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use carcare_core::error::CoreError;
use carcare_db::models::vehicle_brand::{CreateVehicleBrand, UpdateVehicleBrand, VehicleBrand};
use carcare_db::repositories::VehicleBrandRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::Json;
use crate::query::{IdBody, IdParams};
use crate::response::{Deleted, Success};
use crate::state::AppState;

const ENTITY: &str = "Brand";

#[derive(Debug, Serialize)]
pub struct BrandList {
    pub brands: Vec<VehicleBrand>,
}

#[derive(Debug, Serialize)]
pub struct BrandPayload {
    pub brand: VehicleBrand,
}

/// GET /api/vehicle-brands
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = VehicleBrandRepo::list(&state.pool).await?;
    Ok(Success::json(BrandList { brands }))
}

/// POST /api/vehicle-brands
///
/// Rejects a name whose slug is already taken ("Toyota" vs "toyota ").
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicleBrand>,
) -> AppResult<impl IntoResponse> {
    let new = input.validate()?;
    if VehicleBrandRepo::slug_exists(&state.pool, &new.slug).await? {
        return Err(CoreError::Duplicate("Brand already exists".into()).into());
    }

    let brand = VehicleBrandRepo::create(&state.pool, &new).await?;
    tracing::info!(brand_id = %brand.id, slug = %brand.slug, "Vehicle brand created");
    Ok(Success::json(BrandPayload { brand }))
}

/// PUT /api/vehicle-brands
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<IdBody<UpdateVehicleBrand>>,
) -> AppResult<impl IntoResponse> {
    let (id, input) = body.into_parts(ENTITY)?;
    let changes = input.validate()?;

    let brand = VehicleBrandRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(brand_id = %id, "Vehicle brand updated");
    Ok(Success::json(BrandPayload { brand }))
}

/// DELETE /api/vehicle-brands?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse(ENTITY)?;
    if !VehicleBrandRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(brand_id = %id, "Vehicle brand deleted");
    Ok(Success::json(Deleted::new("Brand deleted successfully")))
}
