//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation, direct slot cell manipulation and convenience
//! methods for creating entities with their dependencies.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Writes a raw value into one slot cell of a court.
///
/// Bypasses all engine checks, which lets tests stage booked cells or corrupt rows.
///
/// # Arguments
/// - `db` - Database connection
/// - `court_id` - Court whose slot row is updated
/// - `slot_index` - Cell position, 0 = 08:00-09:00
/// - `value` - Raw value to store (1 = available, 2 = booked)
pub async fn set_slot_cell(
    db: &DatabaseConnection,
    court_id: i32,
    slot_index: usize,
    value: i32,
) -> Result<(), DbErr> {
    let column = entity::court_time_slots::SLOT_COLUMNS[slot_index];

    entity::prelude::CourtTimeSlots::update_many()
        .col_expr(column, Expr::value(value))
        .filter(entity::court_time_slots::Column::CourtId.eq(court_id))
        .exec(db)
        .await?;

    Ok(())
}

/// Reads the raw slot cells of a court.
///
/// # Returns
/// - `Ok([i32; 10])` - Cell values in wall-clock order
/// - `Err(DbErr::RecordNotFound)` - The court has no slot row
pub async fn slot_cells(db: &DatabaseConnection, court_id: i32) -> Result<[i32; 10], DbErr> {
    let row = entity::prelude::CourtTimeSlots::find()
        .filter(entity::court_time_slots::Column::CourtId.eq(court_id))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("slot row for court {}", court_id)))?;

    Ok(row.cells())
}

/// Creates a sport and one active court with an all-available slot row.
///
/// # Returns
/// - `Ok((sport, court))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_court_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::sport::Model, entity::court::Model), DbErr> {
    let sport = crate::factory::sport::create_sport(db).await?;
    let (court, _) = crate::factory::court::create_court(db, sport.id).await?;

    Ok((sport, court))
}

/// Creates a consistent confirmed booking on a fresh court.
///
/// Creates a sport, court, and customer, inserts a Confirmed booking for the given slot and
/// marks that cell booked, so the result satisfies the slot table invariant.
///
/// # Arguments
/// - `db` - Database connection
/// - `slot_index` - Slot the booking occupies
///
/// # Returns
/// - `Ok((sport, court, customer, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_confirmed_booking_with_dependencies(
    db: &DatabaseConnection,
    slot_index: usize,
) -> Result<
    (
        entity::sport::Model,
        entity::court::Model,
        entity::customer::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (sport, court) = create_court_with_dependencies(db).await?;
    let customer = crate::factory::customer::create_customer(db).await?;
    let booking = create_confirmed_booking(db, &customer, &court, slot_index).await?;

    Ok((sport, court, customer, booking))
}

/// Inserts a Confirmed booking for an existing court and marks the cell booked.
///
/// # Returns
/// - `Ok(entity::booking::Model)` - The created booking
/// - `Err(DbErr)` - Database error during insert or cell update
pub async fn create_confirmed_booking(
    db: &DatabaseConnection,
    customer: &entity::customer::Model,
    court: &entity::court::Model,
    slot_index: usize,
) -> Result<entity::booking::Model, DbErr> {
    let booking =
        crate::factory::booking::BookingFactory::new(db, customer.id, court.sport_id, court.id)
            .slot_index(slot_index as i32)
            .build()
            .await?;
    set_slot_cell(db, court.id, slot_index, 2).await?;

    Ok(booking)
}
