use sea_orm::DatabaseConnection;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::reset::{ResetSelector, ResetSummary},
    service::reset::ResetService,
};

/// Daily at 00:00:00 UTC. Seconds come first.
pub const DEFAULT_RESET_SCHEDULE: &str = "0 0 0 * * *";

/// Result of one reset attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The reset ran to completion.
    Completed(ResetSummary),
    /// Another reset was still in flight, so this one did nothing.
    Skipped,
}

/// Runs the all-courts slot reset, never more than one at a time.
///
/// Clones share the in-flight flag.
#[derive(Clone)]
pub struct ResetRunner {
    db: DatabaseConnection,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag when dropped, including on error or panic.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ResetRunner {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resets every active court unless a reset is already running.
    ///
    /// # Returns
    /// - `Ok(ResetOutcome::Completed)` - Reset finished with its summary
    /// - `Ok(ResetOutcome::Skipped)` - A previous reset was still in flight
    /// - `Err(AppError)` - The reset failed part way
    pub async fn run(&self) -> Result<ResetOutcome, AppError> {
        let Some(_guard) = self.try_begin() else {
            tracing::warn!("Slot reset already in progress, skipping");
            return Ok(ResetOutcome::Skipped);
        };

        let summary = ResetService::new(&self.db)
            .reset_courts(ResetSelector::AllActive)
            .await?;

        Ok(ResetOutcome::Completed(summary))
    }

    fn try_begin(&self) -> Option<InFlightGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(self.in_flight.clone()))
    }
}

/// Cron-driven nightly slot reset.
pub struct SlotResetScheduler {
    scheduler: JobScheduler,
    runner: ResetRunner,
}

impl SlotResetScheduler {
    /// Starts the slot reset scheduler
    ///
    /// Ticks run `ResetRunner::run`. A failed tick is logged and the next tick runs
    /// as normal; missed ticks are not caught up.
    ///
    /// # Arguments
    /// - `runner`: Runner shared with manual triggers
    /// - `schedule`: Six-field cron expression, evaluated in UTC
    ///
    /// # Returns
    /// - `Ok(SlotResetScheduler)`: Scheduler running
    /// - `Err(AppError::SchedulerErr)`: Invalid cron expression or scheduler failure
    pub async fn start(runner: ResetRunner, schedule: &str) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;

        let job_runner = runner.clone();

        let job = Job::new_async(schedule, move |_uuid, _lock| {
            let runner = job_runner.clone();

            Box::pin(async move {
                match runner.run().await {
                    Ok(ResetOutcome::Completed(summary)) => tracing::info!(
                        "Nightly slot reset finished: {} court(s), {} booking(s) cancelled",
                        summary.courts_reset,
                        summary.bookings_cancelled
                    ),
                    Ok(ResetOutcome::Skipped) => {}
                    Err(e) => tracing::error!("Error running nightly slot reset: {}", e),
                }
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        tracing::info!("Slot reset scheduler started with schedule '{}'", schedule);

        Ok(Self { scheduler, runner })
    }

    /// Runs the reset immediately, outside the cron schedule.
    ///
    /// Shares the in-flight flag with scheduled ticks.
    pub async fn trigger_now(&self) -> Result<ResetOutcome, AppError> {
        tracing::info!("Manual slot reset triggered");

        self.runner.run().await
    }

    /// Stops the cron scheduler. A reset already running is not interrupted.
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;

        tracing::info!("Slot reset scheduler stopped");

        Ok(())
    }
}
