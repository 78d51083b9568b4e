//! Booking domain models and parameters.
//!
//! A booking starts `Confirmed` and moves at most once into one of the terminal
//! cancellation states. Admin cancellation removes the row instead of moving it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::integrity::IntegrityError, model::slot::SlotIndex};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// The only active status; the booking holds its slot.
    Confirmed,
    /// Cancelled by the owning customer.
    Cancelled,
    /// Cancelled by an operator.
    ///
    /// Part of the stored status set but never written here: admin cancellation
    /// deletes the row. Only accepted when read back from storage.
    CancelledByAdmin,
    /// Cancelled because the slot table was reset.
    CancelledBySystemReset,
}

impl BookingStatus {
    /// String persisted in `booking.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::CancelledByAdmin => "Cancelled by admin",
            Self::CancelledBySystemReset => "Cancelled by system reset",
        }
    }

    /// Parses a stored status string.
    ///
    /// Matching is exact; `"booked"` or `"confirmed"` are not accepted as aliases.
    pub fn from_stored(booking_id: i32, status: &str) -> Result<Self, IntegrityError> {
        match status {
            "Confirmed" => Ok(Self::Confirmed),
            "Cancelled" => Ok(Self::Cancelled),
            "Cancelled by admin" => Ok(Self::CancelledByAdmin),
            "Cancelled by system reset" => Ok(Self::CancelledBySystemReset),
            other => Err(IntegrityError::UnknownBookingStatus {
                booking_id,
                status: other.to_string(),
            }),
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Confirmed
    }
}

/// A customer's reservation of one slot on one court.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub customer_id: i32,
    pub sport_id: i32,
    pub court_id: i32,
    pub slot_index: SlotIndex,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(IntegrityError)` - Stored slot index or status is invalid
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, IntegrityError> {
        Ok(Self {
            id: entity.id,
            customer_id: entity.customer_id,
            sport_id: entity.sport_id,
            court_id: entity.court_id,
            slot_index: SlotIndex::from_stored(entity.id, entity.slot_index)?,
            status: BookingStatus::from_stored(entity.id, &entity.status)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for reserving a slot.
#[derive(Debug, Clone)]
pub struct ReserveParam {
    /// Email of the booking customer; normalized before lookup.
    pub customer_email: String,
    pub sport_id: i32,
    pub court_id: i32,
    /// Unvalidated slot index, 0 = 08:00-09:00.
    pub slot_index: i32,
}

/// Parameters for a customer cancelling their own booking.
#[derive(Debug, Clone)]
pub struct CancelByOwnerParam {
    pub booking_id: i32,
    /// Email of the requester; must match the booking's customer.
    pub customer_email: String,
}

/// Parameters for an operator removing any booking.
#[derive(Debug, Clone)]
pub struct CancelByAdminParam {
    pub booking_id: i32,
}

/// Booking joined with its court, sport and customer for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub booking_id: i32,
    pub customer_email: String,
    pub court_name: String,
    pub sport_name: String,
    pub slot_index: usize,
    /// Interval such as `"10:00-11:00"`.
    pub slot_time: String,
    pub status: String,
}
