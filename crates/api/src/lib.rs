//! Car care API server library.
//!
//! Exposes config, state, error handling, routes, and the booking workflow
//! so integration tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod workflow;
