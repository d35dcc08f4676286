pub mod booking;
pub mod car_brand;
pub mod car_model;
pub mod detailed_service;
pub mod special_service;
pub mod vehicle_brand;
