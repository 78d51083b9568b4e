//! Booking data repository for database operations.
//!
//! Status changes are conditional on the current status, which keeps the
//! `Confirmed -> cancelled` transition one-way even under concurrent requests.

use chrono::Utc;
use entity::booking;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityName, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    data::truncate_table,
    error::AppError,
    model::{
        booking::{Booking, BookingStatus},
        slot::SlotIndex,
    },
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new `Confirmed` booking stamped with the current time.
    ///
    /// Does not touch the slot table; the caller marks the cell booked in the same
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. a foreign key is dangling
    pub async fn create(
        &self,
        customer_id: i32,
        sport_id: i32,
        court_id: i32,
        slot_index: SlotIndex,
    ) -> Result<Booking, AppError> {
        let entity = booking::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            sport_id: ActiveValue::Set(sport_id),
            court_id: ActiveValue::Set(court_id),
            slot_index: ActiveValue::Set(slot_index.as_i32()),
            status: ActiveValue::Set(BookingStatus::Confirmed.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity)?)
    }

    /// Finds a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(AppError::IntegrityErr)` - Stored slot index or status is invalid
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let entity = booking::Entity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity).transpose()?)
    }

    /// Finds a booking by ID and locks the row until the transaction ends.
    pub async fn find_by_id_for_update(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let entity = booking::Entity::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity).transpose()?)
    }

    /// Moves a booking from status `from` to status `to`.
    ///
    /// # Returns
    /// - `Ok(true)` - The booking held `from` and now holds `to`
    /// - `Ok(false)` - The booking is missing or held another status
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: i32,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, DbErr> {
        let result = booking::Entity::update_many()
            .col_expr(booking::Column::Status, Expr::value(to.as_str()))
            .filter(booking::Column::Id.eq(id))
            .filter(booking::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a booking row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = booking::Entity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Counts confirmed bookings holding one cell of a court.
    pub async fn count_confirmed_for_cell(
        &self,
        court_id: i32,
        index: SlotIndex,
    ) -> Result<u64, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::CourtId.eq(court_id))
            .filter(booking::Column::SlotIndex.eq(index.as_i32()))
            .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .count(self.db)
            .await
    }

    /// Counts confirmed bookings across the given courts.
    pub async fn count_confirmed_for_courts(&self, court_ids: &[i32]) -> Result<u64, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::CourtId.is_in(court_ids.to_vec()))
            .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .count(self.db)
            .await
    }

    /// Moves every confirmed booking on the given courts to `to`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings cancelled
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel_confirmed_for_courts(
        &self,
        court_ids: &[i32],
        to: BookingStatus,
    ) -> Result<u64, DbErr> {
        let result = booking::Entity::update_many()
            .col_expr(booking::Column::Status, Expr::value(to.as_str()))
            .filter(booking::Column::CourtId.is_in(court_ids.to_vec()))
            .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every booking on the given courts or referencing the sport, in any status.
    pub async fn delete_for_courts_or_sport(
        &self,
        court_ids: &[i32],
        sport_id: i32,
    ) -> Result<u64, DbErr> {
        let result = booking::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(booking::Column::CourtId.is_in(court_ids.to_vec()))
                    .add(booking::Column::SportId.eq(sport_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every booking on the given courts, in any status.
    pub async fn delete_for_courts(&self, court_ids: &[i32]) -> Result<u64, DbErr> {
        let result = booking::Entity::delete_many()
            .filter(booking::Column::CourtId.is_in(court_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every booking of a customer, newest first.
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<Booking>, AppError> {
        let entities = booking::Entity::find()
            .filter(booking::Column::CustomerId.eq(customer_id))
            .order_by_desc(booking::Column::Id)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    /// Gets every booking in any status, newest first.
    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        let entities = booking::Entity::find()
            .order_by_desc(booking::Column::Id)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    /// Removes every booking and restarts booking ids at 1.
    pub async fn truncate(&self) -> Result<(), DbErr> {
        truncate_table(self.db, booking::Entity.table_name()).await
    }

    fn convert_all(entities: Vec<booking::Model>) -> Result<Vec<Booking>, AppError> {
        let bookings = entities
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookings)
    }
}
