//! SeaORM entities for the court booking schema.

pub mod prelude;

pub mod booking;
pub mod court;
pub mod court_time_slots;
pub mod customer;
pub mod sport;
