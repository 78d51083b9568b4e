pub use super::booking::Entity as Booking;
pub use super::court::Entity as Court;
pub use super::court_time_slots::Entity as CourtTimeSlots;
pub use super::customer::Entity as Customer;
pub use super::sport::Entity as Sport;
