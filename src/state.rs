//! Application state shared by the scheduler and any request layer.

use sea_orm::DatabaseConnection;

use crate::scheduler::slot_reset::ResetRunner;

/// Shared resources created once at startup.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and `ResetRunner` shares its
/// in-flight flag through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, closed in `main` at shutdown.
    pub db: DatabaseConnection,

    /// Runner used by both the cron job and manual reset triggers, so the two never
    /// overlap.
    pub reset_runner: ResetRunner,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let reset_runner = ResetRunner::new(db.clone());

        Self { db, reset_runner }
    }
}
