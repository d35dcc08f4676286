//! The bookable service catalog shown by the booking form.

use axum::extract::State;
use axum::response::IntoResponse;
use carcare_core::booking::ServiceType;
use carcare_core::catalog::{merge_catalog, CatalogEntry};
use carcare_db::repositories::{DetailedServiceRepo, SpecialServiceRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub services: Vec<CatalogEntry>,
}

/// GET /api/services/catalog
///
/// General services first, then special services, each tagged with `type`.
pub async fn services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (general, special) = tokio::try_join!(
        DetailedServiceRepo::list(&state.pool),
        SpecialServiceRepo::list(&state.pool),
    )?;

    let general = general
        .into_iter()
        .map(|s| CatalogEntry {
            id: s.id,
            slug: s.slug,
            name: s.name,
            tagline: s.tagline,
            order: s.order,
            hero_image_url: s.hero_image_url,
            service_type: ServiceType::General,
        })
        .collect();
    let special = special
        .into_iter()
        .map(|s| CatalogEntry {
            id: s.id,
            slug: s.slug,
            name: s.name,
            tagline: s.tagline,
            order: s.order,
            hero_image_url: s.hero_image_url,
            service_type: ServiceType::Special,
        })
        .collect();

    Ok(Success::json(Catalog {
        services: merge_catalog(general, special),
    }))
}
