//! Domain logic for the car care back-office.
//!
//! Everything in this crate is pure: no database, network, or clock access.
//! The `db`, `events`, `cloud`, and `api` crates build on these types.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod slug;
pub mod types;
pub mod validation;
