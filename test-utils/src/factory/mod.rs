//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let sport = factory::sport::create_sport(&db).await?;
//!     let (court, slots) = factory::court::create_court(&db, sport.id).await?;
//!
//!     // Create with all dependencies
//!     let (sport, court, customer, booking) =
//!         factory::helpers::create_confirmed_booking_with_dependencies(&db, 0).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let (court, _) = factory::court::CourtFactory::new(&db, sport.id)
//!     .name("Center Court")
//!     .status(0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `sport` - Create sport entities
//! - `court` - Create court entities together with their slot table row
//! - `customer` - Create customer entities
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod court;
pub mod customer;
pub mod helpers;
pub mod sport;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use court::create_court;
pub use customer::create_customer;
pub use sport::create_sport;
