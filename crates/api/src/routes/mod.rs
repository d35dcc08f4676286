pub mod admin;
pub mod bookings;
pub mod brands;
pub mod contact;
pub mod health;
pub mod media;
pub mod services;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /bookings                  list, submit, accept (PUT), delete (?id=)
///
/// /vehicle-brands            list, create, update, delete
/// /car-brands                list, create, update, delete
/// /car-brands/directory      brands with their model names (GET)
/// /car-models                list (?brand=), create, update, delete
///
/// /detailed-services         list, create, update, delete
/// /special-services          list, create, update, delete
/// /services/catalog          merged bookable services (GET)
///
/// /upload-signature          signed upload parameters (GET, ?folder=)
/// /media                     list hosted images (GET, ?folder=)
/// /media/delete              delete a hosted image (POST)
///
/// /contact                   contact form (POST)
/// /admin/login               static credential check (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(bookings::router())
        .merge(brands::router())
        .merge(services::router())
        .merge(media::router())
        .merge(contact::router())
        .merge(admin::router())
}
