//! Handlers for the `/bookings` resource.
//!
//! Submission and acceptance go through [`crate::workflow::booking`] so the
//! email outcome is reported next to the committed booking.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use carcare_core::booking::SUBMITTED_MESSAGE;
use carcare_db::models::booking::{Booking, CreateBooking, UpdateBookingStatus};
use carcare_db::repositories::BookingRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::Json;
use crate::query::{IdBody, IdParams};
use crate::response::{Deleted, Success};
use crate::state::AppState;
use crate::workflow::booking::{self, BookingOutcome};

const ENTITY: &str = "Booking";

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}

/// A booking write plus its notification status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub booking: Booking,
    pub message: String,
    pub email_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

impl BookingResult {
    fn new(outcome: BookingOutcome, message: String) -> Self {
        Self {
            email_sent: outcome.notification.succeeded(),
            email_error: outcome.notification.error().map(str::to_string),
            booking: outcome.booking,
            message,
        }
    }
}

/// GET /api/bookings
///
/// All bookings, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Success::json(BookingList { bookings }))
}

/// POST /api/bookings
///
/// Public booking form. The booking is saved even when the emails fail.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    let outcome = booking::submit(&state, input).await?;
    Ok(Success::json(BookingResult::new(
        outcome,
        SUBMITTED_MESSAGE.to_string(),
    )))
}

/// PUT /api/bookings
///
/// Admin accept: `{ id, status: "confirmed" }`.
pub async fn accept(
    State(state): State<AppState>,
    Json(body): Json<IdBody<UpdateBookingStatus>>,
) -> AppResult<impl IntoResponse> {
    let (id, input) = body.into_parts(ENTITY)?;
    let outcome = booking::accept(&state, id, input.target()).await?;

    let message = match outcome.notification.error() {
        None => "Booking confirmed! Confirmation email sent.".to_string(),
        Some(reason) => format!("Booking confirmed, but email failed: {reason}"),
    };
    Ok(Success::json(BookingResult::new(outcome, message)))
}

/// DELETE /api/bookings?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse(ENTITY)?;
    booking::remove(&state, id).await?;
    Ok(Success::json(Deleted::new("Booking deleted successfully")))
}
