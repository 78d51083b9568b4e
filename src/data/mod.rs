//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed connection and convert entity models into domain models
//! at the boundary. Every repository is generic over `ConnectionTrait`, so the same
//! queries run directly on the pool for reads or on a `DatabaseTransaction` when a
//! service needs several writes to commit or roll back together.

pub mod booking;
pub mod court;
pub mod customer;
pub mod slot;
pub mod sport;

#[cfg(test)]
mod test;

use sea_orm::{ConnectionTrait, DbBackend, DbErr};

/// Removes every row of a table and restarts its identity sequence.
///
/// Postgres uses `TRUNCATE ... RESTART IDENTITY CASCADE`. SQLite has no `TRUNCATE`, so
/// rows are deleted and the table's `sqlite_sequence` entry is cleared instead.
pub(crate) async fn truncate_table<C: ConnectionTrait>(db: &C, table: &str) -> Result<(), DbErr> {
    match db.get_database_backend() {
        DbBackend::Postgres => {
            db.execute_unprepared(&format!(
                "TRUNCATE TABLE \"{}\" RESTART IDENTITY CASCADE",
                table
            ))
            .await?;
        }
        DbBackend::Sqlite => {
            db.execute_unprepared(&format!("DELETE FROM \"{}\"", table))
                .await?;
            db.execute_unprepared(&format!(
                "DELETE FROM sqlite_sequence WHERE name = '{}'",
                table
            ))
            .await?;
        }
        _ => {
            db.execute_unprepared(&format!("TRUNCATE TABLE `{}`", table))
                .await?;
        }
    }

    Ok(())
}
