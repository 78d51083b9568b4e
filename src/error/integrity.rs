use thiserror::Error;

/// Stored data that violates the slot table or booking model.
///
/// These never originate from caller input. They indicate a corrupt row or a broken
/// invariant, are surfaced as store errors and are never retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// A booking row carries a slot index outside 0..=9.
    #[error(
        "Booking {booking_id} references slot index {slot_index} outside the 08:00-18:00 table"
    )]
    SlotIndexOutOfRange {
        /// The booking holding the bad index
        booking_id: i32,
        /// The stored index
        slot_index: i32,
    },

    /// A slot cell holds a value other than 1 (available) or 2 (booked).
    #[error("Court {court_id} slot {slot_index} holds unknown state {value}")]
    UnknownSlotState {
        /// Court owning the slot row
        court_id: i32,
        /// Cell position
        slot_index: usize,
        /// The stored raw value
        value: i32,
    },

    /// A booking row carries a status string that matches no known status.
    #[error("Booking {booking_id} has unknown status '{status}'")]
    UnknownBookingStatus {
        /// The booking holding the bad status
        booking_id: i32,
        /// The stored status string
        status: String,
    },

    /// An existing court has no slot table row.
    #[error("Court {court_id} has no slot table row")]
    MissingSlotTable {
        /// Court without slots
        court_id: i32,
    },

    /// A cell's state disagrees with the number of confirmed bookings on it.
    #[error(
        "Court {court_id} slot {slot_index} is {state} but has {confirmed} confirmed booking(s)"
    )]
    SlotInvariantViolated {
        /// Court owning the cell
        court_id: i32,
        /// Cell position
        slot_index: usize,
        /// Observed cell state
        state: &'static str,
        /// Confirmed bookings found for the cell
        confirmed: u64,
    },
}
