//! Slot reservation and booking release.
//!
//! Each operation runs in one transaction. Reserve takes a locked read of the court's
//! slot row and then flips the cell with a conditional update, so of two concurrent
//! reservations for the same cell exactly one commits and the other gets `Conflict`.
//! Cancellations take the same slot-row lock before touching the booking row.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{
        booking::BookingRepository, court::CourtRepository, customer::CustomerRepository,
        slot::SlotRepository, sport::SportRepository,
    },
    error::{integrity::IntegrityError, AppError},
    model::{
        booking::{Booking, BookingStatus, CancelByAdminParam, CancelByOwnerParam, ReserveParam},
        slot::{SlotIndex, SlotState, SlotTable},
    },
    service::{finish, invariant::verify_cell},
    util::email::normalize_email,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reserves one slot of a court for a customer.
    ///
    /// The customer is created on first booking. The slot index and email are
    /// validated before any transaction opens.
    ///
    /// # Arguments
    /// - `param` - Customer email, sport, court and slot index
    ///
    /// # Returns
    /// - `Ok(Booking)` - The new `Confirmed` booking
    /// - `Err(AppError::Validation)` - Slot index outside 0..=9 or blank email
    /// - `Err(AppError::NotFound)` - Sport or court does not exist
    /// - `Err(AppError::Conflict)` - The slot is already booked
    /// - `Err(AppError::IntegrityErr)` - Court has no slot row or the invariant broke
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn reserve(&self, param: ReserveParam) -> Result<Booking, AppError> {
        let slot_index = SlotIndex::new(param.slot_index)?;
        let email = normalize_email(&param.customer_email)?;

        let txn = self.db.begin().await?;
        let result =
            Self::reserve_in(&txn, &email, param.sport_id, param.court_id, slot_index).await;
        let booking = finish(txn, result).await?;

        tracing::info!(
            "Booking {} confirmed for {} on court {} at {}",
            booking.id,
            email,
            booking.court_id,
            slot_index.time_label()
        );

        Ok(booking)
    }

    async fn reserve_in(
        txn: &DatabaseTransaction,
        email: &str,
        sport_id: i32,
        court_id: i32,
        slot_index: SlotIndex,
    ) -> Result<Booking, AppError> {
        SportRepository::new(txn)
            .find_by_id(sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", sport_id)))?;

        let court = CourtRepository::new(txn)
            .find_by_id(court_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Court {} not found", court_id)))?;

        let table = Self::lock_slot_table(txn, court.id).await?;

        if table.cell(slot_index) != SlotState::Available {
            return Err(Self::slot_unavailable(&court.name, slot_index));
        }

        let customer = CustomerRepository::new(txn).find_or_create(email).await?;
        if customer.was_created() {
            tracing::info!("Created customer {} on first booking", email);
        }

        let booking = BookingRepository::new(txn)
            .create(customer.customer().id, sport_id, court.id, slot_index)
            .await?;

        let booked = SlotRepository::new(txn)
            .transition(court.id, slot_index, SlotState::Available, SlotState::Booked)
            .await?;
        if !booked {
            return Err(Self::slot_unavailable(&court.name, slot_index));
        }

        verify_cell(txn, court.id, slot_index).await?;

        Ok(booking)
    }

    /// Cancels a booking on behalf of the customer who made it.
    ///
    /// The booking row is kept with status `Cancelled` and its cell is freed.
    ///
    /// # Arguments
    /// - `param` - Booking ID and the requester's email
    ///
    /// # Returns
    /// - `Ok(())` - Booking cancelled and slot freed
    /// - `Err(AppError::Validation)` - Blank requester email
    /// - `Err(AppError::NotFound)` - Booking or requesting customer does not exist
    /// - `Err(AppError::Forbidden)` - Requester does not own the booking
    /// - `Err(AppError::Conflict)` - Booking is no longer `Confirmed`
    /// - `Err(AppError::IntegrityErr)` - The booking's cell was not booked
    pub async fn cancel_by_owner(&self, param: CancelByOwnerParam) -> Result<(), AppError> {
        let email = normalize_email(&param.customer_email)?;

        let txn = self.db.begin().await?;
        let result = Self::cancel_by_owner_in(&txn, param.booking_id, &email).await;
        let booking = finish(txn, result).await?;

        tracing::info!(
            "Booking {} cancelled by {}, court {} at {} is free",
            booking.id,
            email,
            booking.court_id,
            booking.slot_index.time_label()
        );

        Ok(())
    }

    async fn cancel_by_owner_in(
        txn: &DatabaseTransaction,
        booking_id: i32,
        email: &str,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(txn);

        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| Self::booking_not_found(booking_id))?;

        let customer = CustomerRepository::new(txn)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", email)))?;

        if booking.customer_id != customer.id {
            return Err(AppError::Forbidden(
                "Unauthorized to cancel this booking".to_string(),
            ));
        }

        let table = Self::lock_slot_table(txn, booking.court_id).await?;

        // Re-read under the slot lock; a reset or admin delete may have won the race.
        let booking = booking_repo
            .find_by_id_for_update(booking_id)
            .await?
            .ok_or_else(|| Self::booking_not_found(booking_id))?;

        if booking.status != BookingStatus::Confirmed {
            return Err(AppError::Conflict(format!(
                "Booking {} is already {}",
                booking.id,
                booking.status.as_str()
            )));
        }

        let cancelled = booking_repo
            .transition_status(booking.id, BookingStatus::Confirmed, BookingStatus::Cancelled)
            .await?;
        if !cancelled {
            return Err(AppError::Conflict(format!(
                "Booking {} is no longer confirmed",
                booking.id
            )));
        }

        Self::release_cell(txn, &booking, &table).await?;
        verify_cell(txn, booking.court_id, booking.slot_index).await?;

        Ok(booking)
    }

    /// Removes any booking, bypassing the ownership check.
    ///
    /// The row is deleted outright. The cell is freed only when the booking was still
    /// `Confirmed`; a cancelled booking's cell may already belong to a newer booking.
    ///
    /// # Returns
    /// - `Ok(())` - Booking deleted
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AppError::IntegrityErr)` - The booking's cell was not booked
    pub async fn cancel_by_admin(&self, param: CancelByAdminParam) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::cancel_by_admin_in(&txn, param.booking_id).await;
        let booking = finish(txn, result).await?;

        tracing::info!(
            "Booking {} ({}) deleted by admin",
            booking.id,
            booking.status.as_str()
        );

        Ok(())
    }

    async fn cancel_by_admin_in(
        txn: &DatabaseTransaction,
        booking_id: i32,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(txn);

        let court_id = booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| Self::booking_not_found(booking_id))?
            .court_id;

        let table = Self::lock_slot_table(txn, court_id).await?;

        let booking = booking_repo
            .find_by_id_for_update(booking_id)
            .await?
            .ok_or_else(|| Self::booking_not_found(booking_id))?;

        booking_repo.delete(booking.id).await?;

        if booking.status.is_active() {
            Self::release_cell(txn, &booking, &table).await?;
        }

        verify_cell(txn, booking.court_id, booking.slot_index).await?;

        Ok(booking)
    }

    /// Locks a court's slot row.
    ///
    /// Every write path locks the slot row before any booking row of that court,
    /// so cancellations, reservations and resets queue instead of deadlocking.
    async fn lock_slot_table(
        txn: &DatabaseTransaction,
        court_id: i32,
    ) -> Result<SlotTable, AppError> {
        let table = SlotRepository::new(txn)
            .find_by_court_for_update(court_id)
            .await?
            .ok_or(IntegrityError::MissingSlotTable { court_id })?;

        Ok(table)
    }

    /// Frees the cell held by a confirmed booking.
    ///
    /// A confirmed booking whose cell is not booked means the slot table was already
    /// out of step, which is reported with the state found in the locked row.
    async fn release_cell(
        txn: &DatabaseTransaction,
        booking: &Booking,
        table: &SlotTable,
    ) -> Result<(), AppError> {
        let observed = table.cell(booking.slot_index);
        let released = observed == SlotState::Booked
            && SlotRepository::new(txn)
                .transition(
                    booking.court_id,
                    booking.slot_index,
                    SlotState::Booked,
                    SlotState::Available,
                )
                .await?;

        if !released {
            return Err(IntegrityError::SlotInvariantViolated {
                court_id: booking.court_id,
                slot_index: booking.slot_index.get(),
                state: observed.as_str(),
                confirmed: 1,
            }
            .into());
        }

        Ok(())
    }

    fn booking_not_found(booking_id: i32) -> AppError {
        AppError::NotFound(format!("Booking {} not found", booking_id))
    }

    fn slot_unavailable(court_name: &str, slot_index: SlotIndex) -> AppError {
        AppError::Conflict(format!(
            "Slot {} on {} is already booked or unavailable",
            slot_index.time_label(),
            court_name
        ))
    }
}
