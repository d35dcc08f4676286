pub mod admin;
pub mod bookings;
pub mod car_brands;
pub mod car_models;
pub mod catalog;
pub mod contact;
pub mod detailed_services;
pub mod media;
pub mod special_services;
pub mod vehicle_brands;

use crate::response::Deleted;
use crate::state::AppState;
use crate::workflow::cleanup::release_assets;

/// Release a deleted entity's hosted images and build the delete payload.
///
/// The entity row is already gone; asset failures only show up in the
/// `assetsFailed` count.
pub(crate) async fn deleted_with_assets(
    state: &AppState,
    message: &str,
    asset_ids: Vec<String>,
) -> Deleted {
    let release = release_assets(state.media.as_ref(), asset_ids).await;
    Deleted {
        message: message.to_string(),
        assets_released: Some(release.released),
        assets_failed: Some(release.failed.len()),
    }
}
