use crate::{
    error::{config::ConfigError, AppError},
    scheduler::slot_reset::DEFAULT_RESET_SCHEDULE,
};

pub struct Config {
    pub database_url: String,

    /// Six-field cron expression (seconds first, UTC) for the nightly slot reset.
    pub reset_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let reset_schedule = match lookup("RESET_SCHEDULE") {
            None => DEFAULT_RESET_SCHEDULE.to_string(),
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "RESET_SCHEDULE".to_string(),
                    reason: "cron expression is empty".to_string(),
                }
                .into())
            }
            Some(value) => value.trim().to_string(),
        };

        Ok(Self {
            database_url,
            reset_schedule,
        })
    }
}
