//! Booking workflow: submit, accept, remove.
//!
//! ```text
//! pending --accept--> confirmed
//! ```
//!
//! Each step commits the booking write first, then attempts the customer
//! email. The email outcome is returned alongside the booking.

use carcare_core::booking::BookingStatus;
use carcare_core::error::CoreError;
use carcare_core::types::DbId;
use carcare_db::models::booking::{Booking, CreateBooking};
use carcare_db::repositories::BookingRepo;
use carcare_events::Notification;

use super::SideEffect;
use crate::error::AppResult;
use crate::state::AppState;

const ENTITY: &str = "Booking";

/// A committed booking write plus the outcome of its notification.
#[derive(Debug)]
pub struct BookingOutcome {
    pub booking: Booking,
    pub notification: SideEffect,
}

/// Validate and persist a booking, then notify the customer and the shop.
pub async fn submit(state: &AppState, input: CreateBooking) -> AppResult<BookingOutcome> {
    let new = input.validate()?;
    let booking = BookingRepo::create(&state.pool, &new).await?;
    tracing::info!(booking_id = %booking.id, service = %booking.service_slug, "Booking created");

    let notification = SideEffect::from_result(
        state
            .notifier
            .notify(Notification::BookingReceived(&booking))
            .await,
    );
    if let SideEffect::Failed(reason) = &notification {
        tracing::warn!(
            booking_id = %booking.id,
            error = %reason,
            "Booking saved without notification"
        );
    }

    Ok(BookingOutcome {
        booking,
        notification,
    })
}

/// Move a booking to `target` and email the customer.
///
/// Only `pending -> confirmed` is allowed. The write is conditional on the
/// status read here, so when two accepts race exactly one succeeds and
/// sends the email. The status change stands even when the email fails.
pub async fn accept(
    state: &AppState,
    id: DbId,
    target: BookingStatus,
) -> AppResult<BookingOutcome> {
    let current = load(state, id).await?;
    let next = current.status.transition(target)?;

    let booking = match BookingRepo::update_status(&state.pool, id, current.status, next).await? {
        Some(booking) => booking,
        None => {
            // Another writer moved it first; its status decides the error.
            let latest = load(state, id).await?;
            let err = latest.status.transition(target).err().unwrap_or_else(|| {
                CoreError::Validation("Booking status changed, please retry".into())
            });
            return Err(err.into());
        }
    };
    tracing::info!(booking_id = %id, status = %booking.status, "Booking status updated");

    let notification = SideEffect::from_result(
        state
            .notifier
            .notify(Notification::BookingConfirmed(&booking))
            .await,
    );

    Ok(BookingOutcome {
        booking,
        notification,
    })
}

async fn load(state: &AppState, id: DbId) -> AppResult<Booking> {
    Ok(BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?)
}

/// Hard-delete a booking.
pub async fn remove(state: &AppState, id: DbId) -> AppResult<()> {
    if !BookingRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(booking_id = %id, "Booking deleted");
    Ok(())
}
