//! Sport factory for creating test sport entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let sport = SportFactory::new(&db).name("Tennis").build().await?;
/// ```
pub struct SportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> SportFactory<'a> {
    /// Creates a new SportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Sport {id}"` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sport {}", id),
            description: None,
        }
    }

    /// Sets the sport name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sport description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the sport entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::sport::Model)` - Created sport entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::sport::Model, DbErr> {
        entity::sport::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sport with default values.
///
/// Shorthand for `SportFactory::new(db).build().await`.
pub async fn create_sport(db: &DatabaseConnection) -> Result<entity::sport::Model, DbErr> {
    SportFactory::new(db).build().await
}
