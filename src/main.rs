use courtlink::{
    config::Config, error::AppError, scheduler::slot_reset::SlotResetScheduler, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db);

    tracing::info!("Starting CourtLink");

    let scheduler =
        SlotResetScheduler::start(state.reset_runner.clone(), &config.reset_schedule).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");

    scheduler.shutdown().await?;
    state.db.close().await?;

    Ok(())
}
