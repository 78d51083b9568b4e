//! Court data repository for database operations.

use entity::court;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::{
    court::{Court, ACTIVE_COURT_STATUS},
    reset::ResetSelector,
};

/// Repository providing database operations for courts.
pub struct CourtRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourtRepository<'a, C> {
    /// Creates a new CourtRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a court by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Court>, DbErr> {
        let entity = court::Entity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Court::from_entity))
    }

    /// Finds a court by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Court>, DbErr> {
        let entity = court::Entity::find()
            .filter(court::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Court::from_entity))
    }

    /// Gets courts by IDs.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Court>, DbErr> {
        let entities = court::Entity::find()
            .filter(court::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Court::from_entity).collect())
    }

    /// Gets every court of a sport in any status, ordered by ID.
    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Court>, DbErr> {
        let entities = court::Entity::find()
            .filter(court::Column::SportId.eq(sport_id))
            .order_by_asc(court::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Court::from_entity).collect())
    }

    /// Resolves a reset selector to the IDs of the courts it covers.
    ///
    /// Only active courts are ever selected. Court names are compared ignoring case,
    /// which is done in memory so the comparison behaves the same on every backend.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Matching court IDs in ascending order, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_ids_for_reset(&self, selector: &ResetSelector) -> Result<Vec<i32>, DbErr> {
        let mut query = court::Entity::find()
            .filter(court::Column::Status.eq(ACTIVE_COURT_STATUS))
            .order_by_asc(court::Column::Id);

        if let ResetSelector::Sport(sport_id) = selector {
            query = query.filter(court::Column::SportId.eq(*sport_id));
        }

        let courts = query.all(self.db).await?;

        let ids = match selector {
            ResetSelector::CourtName(name) => {
                let wanted = name.trim().to_lowercase();
                courts
                    .into_iter()
                    .filter(|c| c.name.to_lowercase() == wanted)
                    .map(|c| c.id)
                    .collect()
            }
            ResetSelector::AllActive | ResetSelector::Sport(_) => {
                courts.into_iter().map(|c| c.id).collect()
            }
        };

        Ok(ids)
    }

    /// Inserts a court row. The caller creates its slot row in the same transaction.
    pub async fn create(
        &self,
        name: String,
        location: String,
        capacity: Option<i32>,
        status: i32,
        sport_id: i32,
    ) -> Result<Court, DbErr> {
        let entity = court::ActiveModel {
            name: ActiveValue::Set(name),
            location: ActiveValue::Set(location),
            capacity: ActiveValue::Set(capacity),
            status: ActiveValue::Set(status),
            sport_id: ActiveValue::Set(sport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Court::from_entity(entity))
    }

    /// Deletes one court row. Its slot row and bookings must already be gone.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error, e.g. a booking still references the court
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = court::Entity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes every court of a sport.
    pub async fn delete_by_sport(&self, sport_id: i32) -> Result<u64, DbErr> {
        let result = court::Entity::delete_many()
            .filter(court::Column::SportId.eq(sport_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
