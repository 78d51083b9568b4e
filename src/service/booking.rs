//! Read-only booking listings.
//!
//! Listings read with default consistency and take no locks.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{
        booking::BookingRepository, court::CourtRepository, customer::CustomerRepository,
        sport::SportRepository,
    },
    error::AppError,
    model::booking::{Booking, BookingSummary},
    util::email::normalize_email,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every booking of a customer in any status, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingSummary>)` - The customer's bookings, possibly empty
    /// - `Err(AppError::NotFound)` - No customer with that email
    pub async fn list_for_customer(&self, email: &str) -> Result<Vec<BookingSummary>, AppError> {
        let email = normalize_email(email)?;

        let customer = CustomerRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", email)))?;

        let bookings = BookingRepository::new(self.db)
            .get_by_customer(customer.id)
            .await?;

        self.summarize(bookings).await
    }

    /// Lists every booking of every customer, newest first.
    pub async fn list_all(&self) -> Result<Vec<BookingSummary>, AppError> {
        let bookings = BookingRepository::new(self.db).get_all().await?;

        self.summarize(bookings).await
    }

    /// Joins bookings with their court, sport and customer names.
    async fn summarize(&self, bookings: Vec<Booking>) -> Result<Vec<BookingSummary>, AppError> {
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let court_ids = unique_ids(bookings.iter().map(|b| b.court_id));
        let sport_ids = unique_ids(bookings.iter().map(|b| b.sport_id));
        let customer_ids = unique_ids(bookings.iter().map(|b| b.customer_id));

        let courts: HashMap<i32, String> = CourtRepository::new(self.db)
            .get_by_ids(&court_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let sports: HashMap<i32, String> = SportRepository::new(self.db)
            .get_by_ids(&sport_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();
        let customers: HashMap<i32, String> = CustomerRepository::new(self.db)
            .get_by_ids(&customer_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.email))
            .collect();

        let summaries = bookings
            .into_iter()
            .map(|booking| BookingSummary {
                booking_id: booking.id,
                customer_email: customers
                    .get(&booking.customer_id)
                    .cloned()
                    .unwrap_or_default(),
                court_name: courts.get(&booking.court_id).cloned().unwrap_or_default(),
                sport_name: sports.get(&booking.sport_id).cloned().unwrap_or_default(),
                slot_index: booking.slot_index.get(),
                slot_time: booking.slot_index.time_label(),
                status: booking.status.as_str().to_string(),
            })
            .collect();

        Ok(summaries)
    }
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
