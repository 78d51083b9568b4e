//! Court domain models and parameters.

use serde::Serialize;

use crate::model::slot::SLOT_COUNT;

/// Stored status value of an active court.
pub const ACTIVE_COURT_STATUS: i32 = 1;

/// Physical court bookable through its slot table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Court {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: Option<i32>,
    /// 1 = active, anything else = inactive.
    pub status: i32,
    pub sport_id: i32,
}

impl Court {
    /// Converts an entity model to a court domain model at the repository boundary.
    pub fn from_entity(entity: entity::court::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            capacity: entity.capacity,
            status: entity.status,
            sport_id: entity.sport_id,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_COURT_STATUS
    }
}

/// Parameters for creating a court together with its slot table.
#[derive(Debug, Clone)]
pub struct CreateCourtParam {
    pub name: String,
    pub location: String,
    pub capacity: Option<i32>,
    /// `None` or `Some(0)` defaults to active.
    pub status: Option<i32>,
    /// Name of the sport the court belongs to.
    pub sport_name: String,
}

/// A court with its current slot cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtAvailability {
    pub court_id: i32,
    pub court_name: String,
    pub court_status: i32,
    pub sport_id: i32,
    /// Cell values in wall-clock order, 1 = available, 2 = booked.
    pub slots: [i32; SLOT_COUNT],
}
