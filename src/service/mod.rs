//! Service layer for business logic and orchestration.
//!
//! Services sit between callers and the data (repository) layer. They are responsible for:
//!
//! - **Business Logic**: Validating input and enforcing the booking lifecycle
//! - **Orchestration**: Coordinating several repository calls inside one transaction
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Committing on success and rolling back on any failure
//!
//! Every service that writes slot cells or booking status re-checks the slot table
//! invariant inside its transaction before committing.

pub mod booking;
pub mod court;
pub mod customer;
pub mod reservation;
pub mod reset;

mod invariant;


use sea_orm::DatabaseTransaction;

use crate::error::AppError;

/// Commits the transaction if `result` is `Ok`, otherwise rolls it back.
///
/// A failed rollback is logged and the original error is returned.
pub(crate) async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
