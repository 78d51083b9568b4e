//! Bulk slot resets, sport cascade deletes and environment wipes.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{
        booking::BookingRepository, court::CourtRepository, customer::CustomerRepository,
        slot::SlotRepository, sport::SportRepository,
    },
    error::{integrity::IntegrityError, AppError},
    model::{
        booking::BookingStatus,
        reset::{ResetSelector, ResetSummary, WipeScope},
    },
    service::{finish, invariant::verify_court_clear},
};

pub struct ResetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Frees every slot of the selected courts and cancels their confirmed bookings.
    ///
    /// Each court is reset in its own transaction. A court that fails is logged and
    /// rolled back while the remaining courts are still reset. Cancelled bookings keep
    /// their rows with status `Cancelled by system reset`. Running it again on a clean
    /// court changes nothing.
    ///
    /// # Arguments
    /// - `selector` - Which active courts to reset
    ///
    /// # Returns
    /// - `Ok(ResetSummary)` - Courts reset and bookings cancelled; zeros when nothing matched
    /// - `Err(AppError)` - The first court failure, returned after every other court was tried
    pub async fn reset_courts(&self, selector: ResetSelector) -> Result<ResetSummary, AppError> {
        let court_ids = CourtRepository::new(self.db)
            .find_ids_for_reset(&selector)
            .await?;

        if court_ids.is_empty() {
            tracing::info!("No active courts matched {:?}, nothing to reset", selector);
            return Ok(ResetSummary::default());
        }

        let mut summary = ResetSummary::default();
        let mut first_failure = None;
        let mut failed = 0;
        for court_id in court_ids {
            match self.reset_court(court_id).await {
                Ok(cancelled) => {
                    summary.courts_reset += 1;
                    summary.bookings_cancelled += cancelled;
                }
                Err(err) => {
                    tracing::error!("Failed to reset court {}: {}", court_id, err);
                    failed += 1;
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
            }
        }

        tracing::info!(
            "Reset {} court(s) for {:?}, cancelled {} booking(s), {} court(s) failed",
            summary.courts_reset,
            selector,
            summary.bookings_cancelled,
            failed
        );

        match first_failure {
            Some(err) => Err(err),
            None => Ok(summary),
        }
    }

    async fn reset_court(&self, court_id: i32) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::reset_court_in(&txn, court_id).await;

        finish(txn, result).await
    }

    async fn reset_court_in(txn: &DatabaseTransaction, court_id: i32) -> Result<u64, AppError> {
        // The slot row is updated first so it is locked before bookings are touched.
        let rows = SlotRepository::new(txn).reset_courts(&[court_id]).await?;
        if rows == 0 {
            return Err(IntegrityError::MissingSlotTable { court_id }.into());
        }

        let cancelled = BookingRepository::new(txn)
            .cancel_confirmed_for_courts(&[court_id], BookingStatus::CancelledBySystemReset)
            .await?;

        verify_court_clear(txn, court_id).await?;

        Ok(cancelled)
    }

    /// Deletes a sport together with its courts, their slot rows and their bookings.
    ///
    /// Runs in a single transaction in dependency order: slot rows, bookings, courts,
    /// then the sport. Any failure rolls back the whole cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Sport and everything under it deleted
    /// - `Err(AppError::NotFound)` - No sport with that name
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn reset_by_sport(&self, sport_name: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::reset_by_sport_in(&txn, sport_name).await;
        let (courts, bookings) = finish(txn, result).await?;

        tracing::info!(
            "Deleted sport '{}' with {} court(s) and {} booking(s)",
            sport_name,
            courts,
            bookings
        );

        Ok(())
    }

    async fn reset_by_sport_in(
        txn: &DatabaseTransaction,
        sport_name: &str,
    ) -> Result<(u64, u64), AppError> {
        let sport_repo = SportRepository::new(txn);
        let sport = sport_repo
            .find_by_name(sport_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport '{}' not found", sport_name)))?;

        let court_repo = CourtRepository::new(txn);
        let court_ids: Vec<i32> = court_repo
            .get_by_sport(sport.id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        SlotRepository::new(txn).delete_by_courts(&court_ids).await?;
        let bookings = BookingRepository::new(txn)
            .delete_for_courts_or_sport(&court_ids, sport.id)
            .await?;
        let courts = court_repo.delete_by_sport(sport.id).await?;
        sport_repo.delete(sport.id).await?;

        Ok((courts, bookings))
    }

    /// Wipes booking data and frees every slot of every court.
    ///
    /// Booking ids restart at 1 afterwards. Courts and sports are kept.
    ///
    /// # Arguments
    /// - `scope` - Whether customers are truncated as well
    pub async fn wipe_all(&self, scope: WipeScope) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::wipe_all_in(&txn, scope).await;
        let courts = finish(txn, result).await?;

        tracing::warn!("Wiped {:?}, freed slots on {} court(s)", scope, courts);

        Ok(())
    }

    async fn wipe_all_in(txn: &DatabaseTransaction, scope: WipeScope) -> Result<u64, AppError> {
        BookingRepository::new(txn).truncate().await?;

        if scope == WipeScope::BookingsAndCustomers {
            CustomerRepository::new(txn).truncate().await?;
        }

        let courts = SlotRepository::new(txn).reset_all().await?;

        Ok(courts)
    }
}
