//! Domain models and operation parameters.
//!
//! Entity models from the `entity` crate never leave the data layer. Repositories
//! convert rows into these types with `from_entity`, validating stored slot indices,
//! cell states and status strings on the way, so services only ever see well-formed
//! values.

pub mod api;
pub mod booking;
pub mod court;
pub mod customer;
pub mod reset;
pub mod slot;
pub mod sport;
