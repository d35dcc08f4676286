use axum::routing::{get, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// ```text
/// GET  /upload-signature?folder=   -> upload_signature
/// GET  /media?folder=              -> list
/// POST /media/delete               -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload-signature", get(media::upload_signature))
        .route("/media", get(media::list))
        .route("/media/delete", post(media::delete))
}
