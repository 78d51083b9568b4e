//! Slot table invariant checks run before commit.
//!
//! A cell is Booked exactly when one Confirmed booking exists for it, and Available
//! exactly when none does.

use sea_orm::ConnectionTrait;

use crate::{
    data::{booking::BookingRepository, slot::SlotRepository},
    error::{integrity::IntegrityError, AppError},
    model::slot::{SlotIndex, SlotState},
};

/// Verifies one cell against the confirmed bookings holding it.
///
/// # Returns
/// - `Ok(())` - Cell state and confirmed booking count agree
/// - `Err(AppError::IntegrityErr)` - The court has no slot row or the cell disagrees
pub(crate) async fn verify_cell<C: ConnectionTrait>(
    db: &C,
    court_id: i32,
    index: SlotIndex,
) -> Result<(), AppError> {
    let table = SlotRepository::new(db)
        .find_by_court(court_id)
        .await?
        .ok_or(IntegrityError::MissingSlotTable { court_id })?;

    let state = table.cell(index);
    let confirmed = BookingRepository::new(db)
        .count_confirmed_for_cell(court_id, index)
        .await?;

    let consistent = match state {
        SlotState::Booked => confirmed == 1,
        SlotState::Available => confirmed == 0,
    };

    if !consistent {
        tracing::error!(
            "Slot invariant violated on court {} slot {}: {} with {} confirmed booking(s)",
            court_id,
            index.get(),
            state.as_str(),
            confirmed
        );

        return Err(IntegrityError::SlotInvariantViolated {
            court_id,
            slot_index: index.get(),
            state: state.as_str(),
            confirmed,
        }
        .into());
    }

    Ok(())
}

/// Verifies that a freshly reset court has no booked cell and no confirmed booking.
///
/// # Returns
/// - `Ok(())` - Every cell is available and no confirmed booking remains
/// - `Err(AppError::IntegrityErr)` - The court is not clear; reports the first booked
///   cell (or slot 0) with the court-wide confirmed count
pub(crate) async fn verify_court_clear<C: ConnectionTrait>(
    db: &C,
    court_id: i32,
) -> Result<(), AppError> {
    let table = SlotRepository::new(db)
        .find_by_court(court_id)
        .await?
        .ok_or(IntegrityError::MissingSlotTable { court_id })?;

    let confirmed = BookingRepository::new(db)
        .count_confirmed_for_courts(&[court_id])
        .await?;

    if table.is_fully_available() && confirmed == 0 {
        return Ok(());
    }

    let slot_index = table
        .cells()
        .iter()
        .position(|c| *c == SlotState::Booked)
        .unwrap_or(0);

    tracing::error!(
        "Court {} not clear after reset: {} confirmed booking(s) remain",
        court_id,
        confirmed
    );

    Err(IntegrityError::SlotInvariantViolated {
        court_id,
        slot_index,
        state: table.cells()[slot_index].as_str(),
        confirmed,
    }
    .into())
}
