use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::collections::HashMap;

use crate::{
    data::{
        booking::BookingRepository, court::CourtRepository, slot::SlotRepository,
        sport::SportRepository,
    },
    error::AppError,
    model::{
        court::{Court, CourtAvailability, CreateCourtParam, ACTIVE_COURT_STATUS},
        slot::SlotTable,
    },
    service::finish,
};

pub struct CourtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a court and its all-available slot row in one transaction.
    ///
    /// # Arguments
    /// - `param` - Court fields and the name of its sport
    ///
    /// # Returns
    /// - `Ok((Court, SlotTable))` - The created court and slot table
    /// - `Err(AppError::Validation)` - Blank name or a court with that name exists
    /// - `Err(AppError::NotFound)` - No sport with that name
    pub async fn create_court(
        &self,
        param: CreateCourtParam,
    ) -> Result<(Court, SlotTable), AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Court name is required".to_string()));
        }

        let txn = self.db.begin().await?;
        let result = Self::create_court_in(&txn, name, param).await;
        let (court, slots) = finish(txn, result).await?;

        tracing::info!("Created court '{}' ({})", court.name, court.id);

        Ok((court, slots))
    }

    async fn create_court_in(
        txn: &DatabaseTransaction,
        name: String,
        param: CreateCourtParam,
    ) -> Result<(Court, SlotTable), AppError> {
        let sport = SportRepository::new(txn)
            .find_by_name(&param.sport_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Sport '{}' not found", param.sport_name))
            })?;

        let court_repo = CourtRepository::new(txn);
        if court_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Validation(format!(
                "Court '{}' already exists",
                name
            )));
        }

        let status = match param.status {
            None | Some(0) => ACTIVE_COURT_STATUS,
            Some(status) => status,
        };

        let court = court_repo
            .create(name, param.location, param.capacity, status, sport.id)
            .await?;
        let slots = SlotRepository::new(txn).create_for_court(court.id).await?;

        Ok((court, slots))
    }

    /// Deletes a court together with its slot row and every booking on it.
    ///
    /// Runs in one transaction in dependency order: slot row, bookings, then the
    /// court. Any failure rolls back the whole delete.
    ///
    /// # Arguments
    /// - `name` - Exact court name
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings deleted with the court
    /// - `Err(AppError::Validation)` - Blank name
    /// - `Err(AppError::NotFound)` - No court with that name
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete_court(&self, name: &str) -> Result<u64, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Court name is required".to_string()));
        }

        let txn = self.db.begin().await?;
        let result = Self::delete_court_in(&txn, name).await;
        let (court, bookings) = finish(txn, result).await?;

        tracing::info!(
            "Deleted court '{}' ({}) with {} booking(s)",
            court.name,
            court.id,
            bookings
        );

        Ok(bookings)
    }

    async fn delete_court_in(
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<(Court, u64), AppError> {
        let court_repo = CourtRepository::new(txn);
        let court = court_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Court '{}' not found", name)))?;

        SlotRepository::new(txn).delete_by_courts(&[court.id]).await?;
        let bookings = BookingRepository::new(txn)
            .delete_for_courts(&[court.id])
            .await?;
        court_repo.delete(court.id).await?;

        Ok((court, bookings))
    }

    /// Lists every court of a sport with its current slot cells.
    ///
    /// Courts without a slot row are skipped with a warning.
    ///
    /// # Returns
    /// - `Ok(Vec<CourtAvailability>)` - Courts in ID order, possibly empty
    /// - `Err(AppError::NotFound)` - No sport with that name
    pub async fn availability(
        &self,
        sport_name: &str,
    ) -> Result<Vec<CourtAvailability>, AppError> {
        let sport = SportRepository::new(self.db)
            .find_by_name(sport_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport '{}' not found", sport_name)))?;

        let courts = CourtRepository::new(self.db).get_by_sport(sport.id).await?;
        let court_ids: Vec<i32> = courts.iter().map(|c| c.id).collect();

        let mut tables: HashMap<i32, SlotTable> = SlotRepository::new(self.db)
            .find_by_courts(&court_ids)
            .await?
            .into_iter()
            .map(|t| (t.court_id, t))
            .collect();

        let mut availability = Vec::with_capacity(courts.len());
        for court in courts {
            let Some(table) = tables.remove(&court.id) else {
                tracing::warn!("Court {} has no slot table row, skipping", court.id);
                continue;
            };

            availability.push(CourtAvailability {
                court_id: court.id,
                court_name: court.name,
                court_status: court.status,
                sport_id: court.sport_id,
                slots: table.values(),
            });
        }

        Ok(availability)
    }
}
