//! Customer data repository for database operations.
//!
//! Lookups expect an email already passed through `util::email::normalize_email`.

use entity::customer;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityName, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{
    data::truncate_table,
    model::customer::{Customer, FindOrCreate, DEFAULT_CUSTOMER_NAME},
};

/// Repository providing database operations for customers.
pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a customer by normalized email.
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - Customer found
    /// - `Ok(None)` - No customer with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DbErr> {
        let entity = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Gets customers by IDs.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Customer>, DbErr> {
        let entities = customer::Entity::find()
            .filter(customer::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Returns the customer with the given email, creating one if none exists.
    ///
    /// Customers created here get the placeholder name `"Gator User"`. The insert uses
    /// `ON CONFLICT (email) DO NOTHING`, so two concurrent first bookings with the same
    /// email end up sharing one customer row instead of failing on the unique index.
    ///
    /// # Arguments
    /// - `email` - Normalized email address
    ///
    /// # Returns
    /// - `Ok(FindOrCreate::Existing)` - A customer already had this email
    /// - `Ok(FindOrCreate::Created)` - A new customer was inserted
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn find_or_create(&self, email: &str) -> Result<FindOrCreate, DbErr> {
        if let Some(existing) = self.find_by_email(email).await? {
            return Ok(FindOrCreate::Existing(existing));
        }

        let inserted = customer::Entity::insert(customer::ActiveModel {
            name: ActiveValue::Set(DEFAULT_CUSTOMER_NAME.to_string()),
            email: ActiveValue::Set(email.to_string()),
            contact: ActiveValue::Set(None),
            ufid: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(customer::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let customer = self.find_by_email(email).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Customer {} missing after insert", email))
        })?;

        if inserted > 0 {
            Ok(FindOrCreate::Created(customer))
        } else {
            Ok(FindOrCreate::Existing(customer))
        }
    }

    /// Inserts a customer with an explicit profile.
    pub async fn create(
        &self,
        email: &str,
        name: String,
        ufid: Option<String>,
    ) -> Result<Customer, DbErr> {
        let entity = customer::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email.to_string()),
            contact: ActiveValue::Set(None),
            ufid: ActiveValue::Set(ufid),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    /// Overwrites the name and/or UFID of a customer.
    ///
    /// `None` leaves the stored value untouched.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The updated customer
    /// - `Err(DbErr::RecordNotFound)` - No customer with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        name: Option<String>,
        ufid: Option<String>,
    ) -> Result<Customer, DbErr> {
        let entity = customer::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Customer {} not found", id)))?;

        if name.is_none() && ufid.is_none() {
            return Ok(Customer::from_entity(entity));
        }

        let mut active_model = entity.into_active_model();
        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(ufid) = ufid {
            active_model.ufid = ActiveValue::Set(Some(ufid));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Customer::from_entity(entity))
    }

    /// Removes every customer and restarts customer ids at 1.
    ///
    /// Bookings reference customers, so callers truncate bookings first.
    pub async fn truncate(&self) -> Result<(), DbErr> {
        truncate_table(self.db, customer::Entity.table_name()).await
    }
}
