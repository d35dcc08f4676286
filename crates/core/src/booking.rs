//! Booking lifecycle and booking-form constants.
//!
//! A booking is created `pending` and the only transition is
//! `pending -> confirmed` (admin accept). There is no cancel or reject
//! state; an unwanted booking is hard-deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Fields the public booking form must supply, in the order they are
/// reported when missing. `service` is the primary service slug.
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "service",
    "vehicleBrand",
    "vehicleModel",
    "bookingDate",
    "bookingTime",
];

/// Message returned to the customer after a successful submission.
pub const SUBMITTED_MESSAGE: &str =
    "Booking submitted successfully! Check your email for confirmation.";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Booking status. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

impl BookingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }

    /// Statuses reachable from `self`.
    pub const fn valid_transitions(self) -> &'static [BookingStatus] {
        match self {
            Self::Pending => &[Self::Confirmed],
            Self::Confirmed => &[],
        }
    }

    /// Validate a transition from `self` to `next`, returning `next`.
    pub fn transition(self, next: BookingStatus) -> Result<BookingStatus, CoreError> {
        if self.valid_transitions().contains(&next) {
            Ok(next)
        } else if self == next {
            Err(CoreError::Validation(format!("Booking is already {self}")))
        } else {
            Err(CoreError::Validation(format!(
                "Cannot transition booking from '{self}' to '{next}'"
            )))
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            other => Err(CoreError::Validation(format!(
                "Invalid booking status '{other}'. Must be one of: pending, confirmed"
            ))),
        }
    }
}

impl TryFrom<String> for BookingStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Service type
// ---------------------------------------------------------------------------

/// Which service collection a booked service comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    General,
    Special,
}

impl ServiceType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "special" => Ok(Self::Special),
            other => Err(CoreError::Validation(format!(
                "Invalid service type '{other}'. Must be one of: general, special"
            ))),
        }
    }
}

impl TryFrom<String> for ServiceType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Snapshot of a service taken at booking time.
///
/// Later edits to the service do not change bookings that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub slug: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub service_type: ServiceType,
}

/// Short human-readable booking reference: the last eight characters of
/// the id, upper-cased.
pub fn reference_code(id: &uuid::Uuid) -> String {
    let simple = id.simple().to_string();
    simple[simple.len() - 8..].to_uppercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
