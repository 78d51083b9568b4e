//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// The email is stored as given, so callers staging normalization cases must pass an
/// already normalized value unless they are testing the lookup itself.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    ufid: Option<String>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Customer {id}"`
    /// - email: `"customer{id}@example.com"`
    /// - ufid: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            ufid: None,
        }
    }

    /// Sets the customer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the customer email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the customer UFID.
    pub fn ufid(mut self, ufid: impl Into<String>) -> Self {
        self.ufid = Some(ufid.into());
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            contact: ActiveValue::Set(None),
            ufid: ActiveValue::Set(self.ufid),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}

/// Creates a customer with a specific email.
///
/// Shorthand for `CustomerFactory::new(db).email(email).build().await`.
pub async fn create_customer_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).email(email).build().await
}
