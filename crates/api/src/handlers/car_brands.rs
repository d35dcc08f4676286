//! Handlers for the `/car-brands` resource and the public brand directory.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use carcare_core::catalog::{brand_directory, BrandInput, DirectoryEntry, ModelInput};
use carcare_core::error::CoreError;
use carcare_db::models::car_brand::{CarBrand, CreateCarBrand, UpdateCarBrand};
use carcare_db::repositories::{CarBrandRepo, CarModelRepo};
use serde::Serialize;

use super::deleted_with_assets;
use crate::error::AppResult;
use crate::extract::Json;
use crate::query::{IdBody, IdParams};
use crate::response::Success;
use crate::state::AppState;

const ENTITY: &str = "Brand";

#[derive(Debug, Serialize)]
pub struct BrandList {
    pub brands: Vec<CarBrand>,
}

#[derive(Debug, Serialize)]
pub struct BrandPayload {
    pub brand: CarBrand,
}

#[derive(Debug, Serialize)]
pub struct Directory {
    pub brands: Vec<DirectoryEntry>,
}

/// GET /api/car-brands
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = CarBrandRepo::list(&state.pool).await?;
    Ok(Success::json(BrandList { brands }))
}

/// POST /api/car-brands
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCarBrand>,
) -> AppResult<impl IntoResponse> {
    let new = input.validate()?;
    if CarBrandRepo::slug_exists(&state.pool, &new.brand_slug).await? {
        return Err(CoreError::Duplicate("Brand already exists".into()).into());
    }

    let brand = CarBrandRepo::create(&state.pool, &new).await?;
    tracing::info!(brand_id = %brand.id, brand_slug = %brand.brand_slug, "Car brand created");
    Ok(Success::json(BrandPayload { brand }))
}

/// PUT /api/car-brands
///
/// Replacing the logo does not delete the previous image from the host.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<IdBody<UpdateCarBrand>>,
) -> AppResult<impl IntoResponse> {
    let (id, input) = body.into_parts(ENTITY)?;
    let changes = input.validate()?;

    let brand = CarBrandRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(brand_id = %id, "Car brand updated");
    Ok(Success::json(BrandPayload { brand }))
}

/// DELETE /api/car-brands?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse(ENTITY)?;
    let brand = CarBrandRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(brand_id = %id, "Car brand deleted");

    let payload = deleted_with_assets(&state, "Brand deleted successfully", brand.asset_ids()).await;
    Ok(Success::json(payload))
}

/// GET /api/car-brands/directory
///
/// Every car brand with the names of its models, sorted by brand name.
pub async fn directory(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = CarBrandRepo::list(&state.pool).await?;
    let models = CarModelRepo::list(&state.pool, None).await?;

    let brand_inputs: Vec<BrandInput<'_>> = brands
        .iter()
        .map(|b| BrandInput {
            name: &b.name,
            brand_slug: &b.brand_slug,
            logo_url: &b.logo_url,
        })
        .collect();
    let model_inputs: Vec<ModelInput<'_>> = models
        .iter()
        .map(|m| ModelInput {
            brand_slug: &m.brand_slug,
            name: &m.name,
        })
        .collect();

    Ok(Success::json(Directory {
        brands: brand_directory(&brand_inputs, &model_inputs),
    }))
}
