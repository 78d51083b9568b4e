//! Court slot reservation and booking lifecycle engine.
//!
//! Customers reserve one-hour slots (08:00 to 18:00) on courts, cancel their own
//! bookings, and operators remove bookings or reset courts. A nightly cron job frees
//! every slot of every active court.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Business rules, transactions and invariant checks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP status mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, reset runner)
//! - **Startup** (`startup`) - Logging setup, database connection and migrations
//! - **Scheduler** (`scheduler/`) - Cron job for the nightly slot reset
//!
//! # Slot Table Invariant
//!
//! Every court has one row of ten slot cells. A cell is booked exactly when one
//! `Confirmed` booking exists for it. Only `ReservationService` and `ResetService`
//! write cells or booking status, each inside a transaction that checks the invariant
//! before committing.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
