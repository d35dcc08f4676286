//! Shared response envelope types for API handlers.
//!
//! Successful responses are `{ "success": true, ...payload }`, where the
//! payload is a struct whose fields become top-level keys (`booking`,
//! `brands`, `message`, ...). Errors use the envelope in [`crate::error`].

use axum::Json;
use serde::Serialize;

/// Standard `{ "success": true, ... }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Success::json(BookingList { bookings }))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Success<T> {
    pub fn json(payload: T) -> Json<Self> {
        Json(Self {
            success: true,
            payload,
        })
    }
}

/// Payload carrying only a human-readable message.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Payload of a delete that may also have released hosted images.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_released: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_failed: Option<usize>,
}

impl Deleted {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            assets_released: None,
            assets_failed: None,
        }
    }
}
