//! Repository for the `bookings` table.

use carcare_core::booking::BookingStatus;
use carcare_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::booking::{Booking, NewBooking};

const COLUMNS: &str = "id, name, email, phone, service_slug, service_name, service_type, \
     additional_services, vehicle_brand, vehicle_model, booking_date, booking_time, notes, \
     status, created_at, updated_at";

/// Provides create/read/status/delete operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking. Status always starts at the column default (`pending`).
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (name, email, phone, service_slug, service_name, service_type,
                 additional_services, vehicle_brand, vehicle_model, booking_date,
                 booking_time, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.service_slug)
            .bind(&input.service_name)
            .bind(input.service_type.as_str())
            .bind(Json(&input.additional_services))
            .bind(&input.vehicle_brand)
            .bind(&input.vehicle_model)
            .bind(&input.booking_date)
            .bind(&input.booking_time)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every booking, newest first. Unpaginated.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Move a booking from `from` to `to` in a single conditional write.
    ///
    /// Returns `None` if the booking does not exist or its status is no
    /// longer `from`, so only one of several concurrent writers wins.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $3
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
