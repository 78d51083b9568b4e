//! Court factory for creating test courts together with their slot table row.
//!
//! A court never exists without its slot row in the running system, so the factory
//! always inserts both.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::court::CourtFactory;
///
/// let (court, slots) = CourtFactory::new(&db, sport.id)
///     .name("Court A")
///     .status(0)
///     .build()
///     .await?;
/// ```
pub struct CourtFactory<'a> {
    db: &'a DatabaseConnection,
    sport_id: i32,
    name: String,
    location: String,
    capacity: Option<i32>,
    status: i32,
}

impl<'a> CourtFactory<'a> {
    /// Creates a new CourtFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Court {id}"` where id is auto-incremented
    /// - location: `"Test Complex"`
    /// - capacity: `Some(4)`
    /// - status: `1` (active)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `sport_id` - Sport the court belongs to
    pub fn new(db: &'a DatabaseConnection, sport_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            sport_id,
            name: format!("Court {}", id),
            location: "Test Complex".to_string(),
            capacity: Some(4),
            status: 1,
        }
    }

    /// Sets the court name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the court location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the raw court status (1 = active).
    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the court and an all-available slot row.
    ///
    /// # Returns
    /// - `Ok((court, slots))` - Created court and slot row entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::court::Model, entity::court_time_slots::Model), DbErr> {
        let court = entity::court::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            capacity: ActiveValue::Set(self.capacity),
            status: ActiveValue::Set(self.status),
            sport_id: ActiveValue::Set(self.sport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let slots = entity::court_time_slots::ActiveModel {
            court_id: ActiveValue::Set(court.id),
            slot_08_09: ActiveValue::Set(1),
            slot_09_10: ActiveValue::Set(1),
            slot_10_11: ActiveValue::Set(1),
            slot_11_12: ActiveValue::Set(1),
            slot_12_13: ActiveValue::Set(1),
            slot_13_14: ActiveValue::Set(1),
            slot_14_15: ActiveValue::Set(1),
            slot_15_16: ActiveValue::Set(1),
            slot_16_17: ActiveValue::Set(1),
            slot_17_18: ActiveValue::Set(1),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((court, slots))
    }
}

/// Creates an active court with default values for the given sport.
///
/// Shorthand for `CourtFactory::new(db, sport_id).build().await`.
pub async fn create_court(
    db: &DatabaseConnection,
    sport_id: i32,
) -> Result<(entity::court::Model, entity::court_time_slots::Model), DbErr> {
    CourtFactory::new(db, sport_id).build().await
}
