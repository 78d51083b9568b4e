//! Booking factory for creating test booking rows.
//!
//! The factory writes only the booking row. Use
//! [`crate::factory::helpers::create_confirmed_booking`] when the slot cell must agree.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, customer.id, sport.id, court.id)
///     .slot_index(3)
///     .status("Cancelled")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    sport_id: i32,
    court_id: i32,
    slot_index: i32,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - slot_index: `0` (08:00-09:00)
    /// - status: `"Confirmed"`
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, sport_id: i32, court_id: i32) -> Self {
        Self {
            db,
            customer_id,
            sport_id,
            court_id,
            slot_index: 0,
            status: "Confirmed".to_string(),
        }
    }

    /// Sets the raw slot index, which may be out of range to stage corrupt rows.
    pub fn slot_index(mut self, slot_index: i32) -> Self {
        self.slot_index = slot_index;
        self
    }

    /// Sets the raw status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            sport_id: ActiveValue::Set(self.sport_id),
            court_id: ActiveValue::Set(self.court_id),
            slot_index: ActiveValue::Set(self.slot_index),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Confirmed booking at slot 0 without touching the slot cell.
pub async fn create_booking(
    db: &DatabaseConnection,
    customer_id: i32,
    sport_id: i32,
    court_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, customer_id, sport_id, court_id)
        .build()
        .await
}
