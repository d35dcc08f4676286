//! Handlers for the `/car-models` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use carcare_core::error::CoreError;
use carcare_db::models::car_model::{CarModel, CreateCarModel, UpdateCarModel};
use carcare_db::repositories::CarModelRepo;
use serde::Serialize;

use super::deleted_with_assets;
use crate::error::AppResult;
use crate::extract::Json;
use crate::query::{BrandFilter, IdBody, IdParams};
use crate::response::Success;
use crate::state::AppState;

const ENTITY: &str = "Model";

#[derive(Debug, Serialize)]
pub struct ModelList {
    pub models: Vec<CarModel>,
}

#[derive(Debug, Serialize)]
pub struct ModelPayload {
    pub model: CarModel,
    pub message: &'static str,
}

/// GET /api/car-models?brand=<brandSlug>
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BrandFilter>,
) -> AppResult<impl IntoResponse> {
    let brand = filter.brand.as_deref().map(str::trim).filter(|b| !b.is_empty());
    let models = CarModelRepo::list(&state.pool, brand).await?;
    Ok(Success::json(ModelList { models }))
}

/// POST /api/car-models
///
/// Duplicates are the exact `(brand, name)` pair, not the slugs.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCarModel>,
) -> AppResult<impl IntoResponse> {
    let new = input.validate()?;
    if CarModelRepo::exists(&state.pool, &new.brand, &new.name).await? {
        return Err(
            CoreError::Duplicate("This model already exists for this brand".into()).into(),
        );
    }

    let model = CarModelRepo::create(&state.pool, &new).await?;
    tracing::info!(model_id = %model.id, brand = %model.brand_slug, slug = %model.slug, "Car model created");
    Ok(Success::json(ModelPayload {
        model,
        message: "Car model added successfully!",
    }))
}

/// PUT /api/car-models
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<IdBody<UpdateCarModel>>,
) -> AppResult<impl IntoResponse> {
    let (id, input) = body.into_parts(ENTITY)?;
    let changes = input.validate()?;

    let model = CarModelRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(model_id = %id, "Car model updated");
    Ok(Success::json(ModelPayload {
        model,
        message: "Car model updated successfully!",
    }))
}

/// DELETE /api/car-models?id=
///
/// Succeeds once the row is gone, whatever happens to its image.
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse(ENTITY)?;
    let model = CarModelRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(model_id = %id, "Car model deleted");

    let payload =
        deleted_with_assets(&state, "Car model deleted successfully!", model.asset_ids()).await;
    Ok(Success::json(payload))
}
