//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories return
//! `sqlx::Error` untouched; mapping to HTTP lives in the API crate.

pub mod booking_repo;
pub mod car_brand_repo;
pub mod car_model_repo;
pub mod detailed_service_repo;
pub mod special_service_repo;
pub mod vehicle_brand_repo;

pub use booking_repo::BookingRepo;
pub use car_brand_repo::CarBrandRepo;
pub use car_model_repo::CarModelRepo;
pub use detailed_service_repo::DetailedServiceRepo;
pub use special_service_repo::SpecialServiceRepo;
pub use vehicle_brand_repo::VehicleBrandRepo;
