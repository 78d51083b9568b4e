//! Slot table repository.
//!
//! Every cell write is a conditional update that names the state it expects to
//! replace, so a write that lost a race affects zero rows instead of clobbering
//! another transaction's result.

use entity::court_time_slots::{self as slots, SLOT_COLUMNS};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QuerySelect,
};

use crate::{
    error::AppError,
    model::slot::{SlotIndex, SlotState, SlotTable},
};

pub struct SlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the slot row of a new court with every cell available.
    ///
    /// # Returns
    /// - `Ok(SlotTable)` - The created slot table
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the court already has a slot row
    pub async fn create_for_court(&self, court_id: i32) -> Result<SlotTable, AppError> {
        let available = ActiveValue::Set(SlotState::Available.value());

        let entity = slots::ActiveModel {
            court_id: ActiveValue::Set(court_id),
            slot_08_09: available.clone(),
            slot_09_10: available.clone(),
            slot_10_11: available.clone(),
            slot_11_12: available.clone(),
            slot_12_13: available.clone(),
            slot_13_14: available.clone(),
            slot_14_15: available.clone(),
            slot_15_16: available.clone(),
            slot_16_17: available.clone(),
            slot_17_18: available,
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SlotTable::from_entity(entity)?)
    }

    /// Finds the slot table of a court.
    ///
    /// # Returns
    /// - `Ok(Some(SlotTable))` - Slot row found and every cell valid
    /// - `Ok(None)` - Court has no slot row
    /// - `Err(AppError::IntegrityErr)` - A cell holds an unknown value
    pub async fn find_by_court(&self, court_id: i32) -> Result<Option<SlotTable>, AppError> {
        let entity = slots::Entity::find()
            .filter(slots::Column::CourtId.eq(court_id))
            .one(self.db)
            .await?;

        Ok(entity.map(SlotTable::from_entity).transpose()?)
    }

    /// Finds the slot table of a court and locks the row until the transaction ends.
    ///
    /// Emits `SELECT ... FOR UPDATE` on backends with row locks. SQLite serializes
    /// writers on its own and ignores the clause.
    pub async fn find_by_court_for_update(
        &self,
        court_id: i32,
    ) -> Result<Option<SlotTable>, AppError> {
        let entity = slots::Entity::find()
            .filter(slots::Column::CourtId.eq(court_id))
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(SlotTable::from_entity).transpose()?)
    }

    /// Finds the slot tables of several courts.
    pub async fn find_by_courts(&self, court_ids: &[i32]) -> Result<Vec<SlotTable>, AppError> {
        let entities = slots::Entity::find()
            .filter(slots::Column::CourtId.is_in(court_ids.to_vec()))
            .all(self.db)
            .await?;

        let tables = entities
            .into_iter()
            .map(SlotTable::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tables)
    }

    /// Moves one cell from `from` to `to`.
    ///
    /// # Returns
    /// - `Ok(true)` - The cell held `from` and now holds `to`
    /// - `Ok(false)` - The cell did not hold `from`, or the court has no slot row
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition(
        &self,
        court_id: i32,
        index: SlotIndex,
        from: SlotState,
        to: SlotState,
    ) -> Result<bool, DbErr> {
        let column = index.column();

        let result = slots::Entity::update_many()
            .col_expr(column, Expr::value(to.value()))
            .filter(slots::Column::CourtId.eq(court_id))
            .filter(column.eq(from.value()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets every cell of the given courts to available.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of slot rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_courts(&self, court_ids: &[i32]) -> Result<u64, DbErr> {
        let result = Self::release_all_cells()
            .filter(slots::Column::CourtId.is_in(court_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets every cell of every court to available.
    pub async fn reset_all(&self) -> Result<u64, DbErr> {
        let result = Self::release_all_cells().exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes the slot rows of the given courts.
    pub async fn delete_by_courts(&self, court_ids: &[i32]) -> Result<u64, DbErr> {
        let result = slots::Entity::delete_many()
            .filter(slots::Column::CourtId.is_in(court_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn release_all_cells() -> sea_orm::UpdateMany<slots::Entity> {
        SLOT_COLUMNS
            .into_iter()
            .fold(slots::Entity::update_many(), |update, column| {
                update.col_expr(column, Expr::value(SlotState::Available.value()))
            })
    }
}
