//! Booking entity model and DTOs.

use carcare_core::booking::{BookingStatus, ServiceRef, ServiceType};
use carcare_core::error::CoreError;
use carcare_core::types::{DbId, Timestamp};
use carcare_core::validation::{require_fields, trimmed, validate_email};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_slug: String,
    pub service_name: String,
    #[sqlx(try_from = "String")]
    pub service_type: ServiceType,
    #[sqlx(json)]
    pub additional_services: Vec<ServiceRef>,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub booking_date: String,
    pub booking_time: String,
    pub notes: String,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// Display name of the primary service, falling back to its slug.
    pub fn primary_service_label(&self) -> &str {
        if self.service_name.is_empty() {
            &self.service_slug
        } else {
            &self.service_name
        }
    }

    /// Comma-separated names of the additional services, if any.
    pub fn additional_service_names(&self) -> Option<String> {
        if self.additional_services.is_empty() {
            return None;
        }
        Some(
            self.additional_services
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Booking form payload as submitted by the public site.
///
/// Every field is optional at the wire level so that [`CreateBooking::validate`]
/// can report all missing fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Primary service slug.
    #[serde(alias = "serviceSlug")]
    pub service: Option<String>,
    pub service_name: Option<String>,
    pub service_type: Option<ServiceType>,
    pub additional_services: Option<Vec<ServiceRef>>,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub notes: Option<String>,
}

/// A validated booking ready to insert.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_slug: String,
    pub service_name: String,
    pub service_type: ServiceType,
    pub additional_services: Vec<ServiceRef>,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub booking_date: String,
    pub booking_time: String,
    pub notes: String,
}

impl CreateBooking {
    /// Check required fields and the email format.
    pub fn validate(self) -> Result<NewBooking, CoreError> {
        require_fields(&[
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("service", self.service.as_deref()),
            ("vehicleBrand", self.vehicle_brand.as_deref()),
            ("vehicleModel", self.vehicle_model.as_deref()),
            ("bookingDate", self.booking_date.as_deref()),
            ("bookingTime", self.booking_time.as_deref()),
        ])?;

        let email = trimmed(self.email);
        validate_email("email", &email)?;

        Ok(NewBooking {
            name: trimmed(self.name),
            email,
            phone: trimmed(self.phone),
            service_slug: trimmed(self.service),
            service_name: trimmed(self.service_name),
            service_type: self.service_type.unwrap_or_default(),
            additional_services: self.additional_services.unwrap_or_default(),
            vehicle_brand: trimmed(self.vehicle_brand),
            vehicle_model: trimmed(self.vehicle_model),
            booking_date: trimmed(self.booking_date),
            booking_time: trimmed(self.booking_time),
            notes: trimmed(self.notes),
        })
    }
}

/// Status change requested by the admin console.
///
/// `status` defaults to `confirmed`, the only transition the console offers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatus {
    pub status: Option<BookingStatus>,
}

impl UpdateBookingStatus {
    pub fn target(&self) -> BookingStatus {
        self.status.unwrap_or(BookingStatus::Confirmed)
    }
}
