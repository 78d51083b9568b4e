use entity::sport;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::sport::Sport;

pub struct SportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sport>, DbErr> {
        let entity = sport::Entity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Sport::from_entity))
    }

    /// Finds a sport by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Sport>, DbErr> {
        let entity = sport::Entity::find()
            .filter(sport::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Sport::from_entity))
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Sport>, DbErr> {
        let entities = sport::Entity::find()
            .filter(sport::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Sport::from_entity).collect())
    }

    /// Deletes a sport row. Courts of the sport must already be gone.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = sport::Entity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
