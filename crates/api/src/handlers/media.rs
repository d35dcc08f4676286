//! Handlers for signed uploads and the hosted image folder.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use carcare_cloud::{issue_upload_signature, list_or_empty, MediaAsset};
use carcare_core::error::CoreError;
use carcare_core::validation::non_blank;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::Json;
use crate::query::FolderParams;
use crate::response::{Message, Success};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImageList {
    pub images: Vec<MediaAsset>,
    pub count: usize,
    /// Set when the host could not be reached; `images` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAsset {
    pub asset_id: Option<String>,
}

fn folder_or_default(state: &AppState, params: FolderParams) -> String {
    non_blank(params.folder).unwrap_or_else(|| state.config.media_default_folder.clone())
}

/// GET /api/upload-signature?folder=
///
/// Parameters for a direct browser upload. The secret never leaves the
/// server.
pub async fn upload_signature(
    State(state): State<AppState>,
    Query(params): Query<FolderParams>,
) -> AppResult<impl IntoResponse> {
    let folder = folder_or_default(&state, params);
    let timestamp = chrono::Utc::now().timestamp();

    let signature =
        issue_upload_signature(state.media_credentials.as_deref(), &folder, timestamp)?;
    tracing::debug!(folder = %signature.folder, timestamp, "Upload signature issued");
    Ok(Success::json(signature))
}

/// GET /api/media?folder=
///
/// Always 200. A host failure yields an empty list plus `error`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FolderParams>,
) -> AppResult<impl IntoResponse> {
    let folder = folder_or_default(&state, params);
    let listing = list_or_empty(state.media.as_ref(), &folder).await;

    Ok(Success::json(ImageList {
        count: listing.images.len(),
        images: listing.images,
        error: listing.error,
    }))
}

/// POST /api/media/delete
///
/// Deleting an asset that is already gone succeeds.
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteAsset>,
) -> AppResult<impl IntoResponse> {
    let asset_id = non_blank(input.asset_id)
        .ok_or_else(|| CoreError::Validation("assetId is required".into()))?;

    state.media.delete_asset(&asset_id).await?;
    tracing::info!(asset_id = %asset_id, "Media asset deleted");
    Ok(Success::json(Message::new("Image deleted successfully")))
}
