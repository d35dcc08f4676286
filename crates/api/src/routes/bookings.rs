use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Booking routes.
///
/// ```text
/// GET    /bookings          -> list
/// POST   /bookings          -> submit
/// PUT    /bookings          -> accept
/// DELETE /bookings?id=      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/bookings",
        get(bookings::list)
            .post(bookings::submit)
            .put(bookings::accept)
            .delete(bookings::delete),
    )
}
