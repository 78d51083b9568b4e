use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{Customer, FindOrCreate, UpdateProfileParam, DEFAULT_CUSTOMER_NAME},
    service::finish,
    util::email::normalize_email,
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the customer for an email, creating one named "Gator User" if needed.
    ///
    /// # Returns
    /// - `Ok(FindOrCreate)` - The customer, tagged with whether it was just created
    /// - `Err(AppError::Validation)` - Blank or malformed email
    pub async fn find_or_create(&self, email: &str) -> Result<FindOrCreate, AppError> {
        let email = normalize_email(email)?;

        let result = CustomerRepository::new(self.db)
            .find_or_create(&email)
            .await?;

        if result.was_created() {
            tracing::info!("Created customer {}", email);
        }

        Ok(result)
    }

    /// Gets a customer by email, compared after normalization.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Customer>, AppError> {
        let email = normalize_email(email)?;

        Ok(CustomerRepository::new(self.db).find_by_email(&email).await?)
    }

    /// Creates a customer profile or enriches an existing one.
    ///
    /// Blank name or UFID values are ignored, so a partial profile never erases stored
    /// data. A new customer without a name gets the placeholder name.
    ///
    /// # Returns
    /// - `Ok(FindOrCreate::Existing)` - Existing customer, possibly updated
    /// - `Ok(FindOrCreate::Created)` - Newly created customer
    /// - `Err(AppError::Validation)` - Blank or malformed email
    pub async fn update_profile(
        &self,
        param: UpdateProfileParam,
    ) -> Result<FindOrCreate, AppError> {
        let email = normalize_email(&param.email)?;
        let name = non_blank(param.name);
        let ufid = non_blank(param.ufid);

        let txn = self.db.begin().await?;
        let result = Self::update_profile_in(&txn, &email, name, ufid).await;
        let outcome = finish(txn, result).await?;

        match &outcome {
            FindOrCreate::Existing(c) => tracing::info!("Updated profile of customer {}", c.id),
            FindOrCreate::Created(c) => tracing::info!("Created customer {} with profile", c.id),
        }

        Ok(outcome)
    }

    async fn update_profile_in(
        txn: &DatabaseTransaction,
        email: &str,
        name: Option<String>,
        ufid: Option<String>,
    ) -> Result<FindOrCreate, AppError> {
        let repo = CustomerRepository::new(txn);

        match repo.find_by_email(email).await? {
            Some(existing) => {
                let customer = repo.update_profile(existing.id, name, ufid).await?;
                Ok(FindOrCreate::Existing(customer))
            }
            None => {
                let name = name.unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string());
                let customer = repo.create(email, name, ufid).await?;
                Ok(FindOrCreate::Created(customer))
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
