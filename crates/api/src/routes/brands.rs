//! Vehicle brands (booking form dropdowns), car brands and car models
//! (brand browsing pages).

use axum::routing::get;
use axum::Router;

use crate::handlers::{car_brands, car_models, vehicle_brands};
use crate::state::AppState;

/// ```text
/// GET|POST|PUT|DELETE  /vehicle-brands
/// GET|POST|PUT|DELETE  /car-brands
/// GET                  /car-brands/directory
/// GET|POST|PUT|DELETE  /car-models            (GET accepts ?brand=<slug>)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicle-brands",
            get(vehicle_brands::list)
                .post(vehicle_brands::create)
                .put(vehicle_brands::update)
                .delete(vehicle_brands::delete),
        )
        .route(
            "/car-brands",
            get(car_brands::list)
                .post(car_brands::create)
                .put(car_brands::update)
                .delete(car_brands::delete),
        )
        .route("/car-brands/directory", get(car_brands::directory))
        .route(
            "/car-models",
            get(car_models::list)
                .post(car_models::create)
                .put(car_models::update)
                .delete(car_models::delete),
        )
}
