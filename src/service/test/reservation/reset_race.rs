use super::*;
use crate::{
    data::booking::BookingRepository, model::reset::ResetSelector,
    service::reset::ResetService,
};

async fn stored_status(db: &sea_orm::DatabaseConnection, id: i32) -> Result<String, AppError> {
    let booking = entity::prelude::Booking::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

    Ok(booking.status)
}

/// Tests an owner cancellation racing a reset of the same court.
///
/// Both paths lock the slot row before the booking row, so whichever runs second
/// sees the first one's outcome instead of failing on a lock cycle.
///
/// Expected: reset Ok; cancel Ok with status "Cancelled" or Err(Conflict) with
/// status "Cancelled by system reset"; the cell free either way
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn owner_cancel_and_reset_both_settle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court, customer, booking) = create_confirmed_booking_with_dependencies(db, 5).await?;

    let reservations = ReservationService::new(db);
    let resets = ResetService::new(db);
    let (cancel, reset) = tokio::join!(
        reservations.cancel_by_owner(CancelByOwnerParam {
            booking_id: booking.id,
            customer_email: customer.email.clone(),
        }),
        resets.reset_courts(ResetSelector::AllActive),
    );

    let summary = reset?;
    let status = stored_status(db, booking.id).await?;
    match cancel {
        Ok(()) => {
            assert_eq!(status, "Cancelled");
            assert_eq!(summary.bookings_cancelled, 0);
        }
        Err(AppError::Conflict(_)) => {
            assert_eq!(status, "Cancelled by system reset");
            assert_eq!(summary.bookings_cancelled, 1);
        }
        Err(other) => panic!("cancel failed with {:?}", other),
    }
    assert_eq!(summary.courts_reset, 1);
    assert_eq!(slot_cells(db, court.id).await?, [1; 10]);
    assert_eq!(
        BookingRepository::new(db)
            .count_confirmed_for_courts(&[court.id])
            .await?,
        0
    );

    Ok(())
}

/// Tests an admin delete racing a reset of the same court.
///
/// Expected: both Ok, the booking row gone and the cell free
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn admin_cancel_and_reset_both_settle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court, _, booking) = create_confirmed_booking_with_dependencies(db, 8).await?;

    let reservations = ReservationService::new(db);
    let resets = ResetService::new(db);
    let (cancel, reset) = tokio::join!(
        reservations.cancel_by_admin(CancelByAdminParam {
            booking_id: booking.id
        }),
        resets.reset_courts(ResetSelector::AllActive),
    );

    cancel?;
    let summary = reset?;

    assert_eq!(summary.courts_reset, 1);
    assert!(summary.bookings_cancelled <= 1);
    assert!(entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(slot_cells(db, court.id).await?, [1; 10]);

    Ok(())
}
