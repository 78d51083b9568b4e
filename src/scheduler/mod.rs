//! Cron jobs for automated maintenance.

pub mod slot_reset;
