//! Slot table domain model.
//!
//! A court's day runs from 08:00 to 18:00 in ten one-hour slots. Slot `i` covers
//! `(8 + i):00` to `(9 + i):00`; this ordering is part of the stored and transmitted
//! format and must never change.

use entity::court_time_slots::SLOT_COLUMNS;

use crate::error::{integrity::IntegrityError, AppError};

/// Number of hourly slots per court.
pub const SLOT_COUNT: usize = 10;

/// Hour at which slot 0 starts.
const FIRST_SLOT_HOUR: usize = 8;

/// Validated position in the 08:00-18:00 slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Validates a caller-supplied slot index.
    ///
    /// # Returns
    /// - `Ok(SlotIndex)` - Index within 0..=9
    /// - `Err(AppError::Validation)` - Index outside the slot table
    pub fn new(index: i32) -> Result<Self, AppError> {
        Self::checked(index).ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid slot index {}, expected 0 to {}",
                index,
                SLOT_COUNT - 1
            ))
        })
    }

    /// Validates a slot index read back from a booking row.
    ///
    /// A bad stored index means the row is corrupt, so it is reported as an
    /// integrity error rather than a validation error.
    pub fn from_stored(booking_id: i32, index: i32) -> Result<Self, IntegrityError> {
        Self::checked(index).ok_or(IntegrityError::SlotIndexOutOfRange {
            booking_id,
            slot_index: index,
        })
    }

    fn checked(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < SLOT_COUNT)
            .map(Self)
    }

    /// All slot indices in wall-clock order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).map(Self)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Value persisted in `booking.slot_index`.
    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Hour (24h clock) at which the slot starts.
    pub fn start_hour(self) -> usize {
        FIRST_SLOT_HOUR + self.0
    }

    /// Human readable interval, e.g. `"08:00-09:00"` for slot 0.
    pub fn time_label(self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour(), self.start_hour() + 1)
    }

    /// The `court_time_slots` column storing this slot.
    pub fn column(self) -> entity::court_time_slots::Column {
        SLOT_COLUMNS[self.0]
    }
}

/// State of a single slot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Available,
    Booked,
}

impl SlotState {
    /// Raw value stored in the slot column.
    pub fn value(self) -> i32 {
        match self {
            Self::Available => 1,
            Self::Booked => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
        }
    }

    fn from_stored(court_id: i32, slot_index: usize, value: i32) -> Result<Self, IntegrityError> {
        match value {
            1 => Ok(Self::Available),
            2 => Ok(Self::Booked),
            _ => Err(IntegrityError::UnknownSlotState {
                court_id,
                slot_index,
                value,
            }),
        }
    }
}

/// The ten availability cells of one court.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    /// Court owning the cells.
    pub court_id: i32,
    cells: [SlotState; SLOT_COUNT],
}

impl SlotTable {
    /// Converts an entity model to a slot table at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SlotTable)` - Every cell holds a known state
    /// - `Err(IntegrityError::UnknownSlotState)` - A cell holds a value other than 1 or 2
    pub fn from_entity(entity: entity::court_time_slots::Model) -> Result<Self, IntegrityError> {
        let raw = entity.cells();
        let mut cells = [SlotState::Available; SLOT_COUNT];
        for (i, value) in raw.into_iter().enumerate() {
            cells[i] = SlotState::from_stored(entity.court_id, i, value)?;
        }

        Ok(Self {
            court_id: entity.court_id,
            cells,
        })
    }

    pub fn cell(&self, index: SlotIndex) -> SlotState {
        self.cells[index.get()]
    }

    pub fn cells(&self) -> &[SlotState; SLOT_COUNT] {
        &self.cells
    }

    /// Raw cell values as exposed to clients (1 = available, 2 = booked).
    pub fn values(&self) -> [i32; SLOT_COUNT] {
        self.cells.map(SlotState::value)
    }

    pub fn is_fully_available(&self) -> bool {
        self.cells.iter().all(|c| *c == SlotState::Available)
    }
}
