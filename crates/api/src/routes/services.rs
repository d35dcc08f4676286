use axum::routing::get;
use axum::Router;

use crate::handlers::{catalog, detailed_services, special_services};
use crate::state::AppState;

/// ```text
/// GET|POST|PUT|DELETE  /detailed-services
/// GET|POST|PUT|DELETE  /special-services
/// GET                  /services/catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/detailed-services",
            get(detailed_services::list)
                .post(detailed_services::create)
                .put(detailed_services::update)
                .delete(detailed_services::delete),
        )
        .route(
            "/special-services",
            get(special_services::list)
                .post(special_services::create)
                .put(special_services::update)
                .delete(special_services::delete),
        )
        .route("/services/catalog", get(catalog::services))
}
