use super::*;
use crate::error::{integrity::IntegrityError, AppError};

/// Tests finding an existing booking.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court, customer, created) = create_confirmed_booking_with_dependencies(db, 3).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(booking.id, created.id);
    assert_eq!(booking.court_id, court.id);
    assert_eq!(booking.customer_id, customer.id);
    assert_eq!(booking.slot_index.get(), 3);

    Ok(())
}

/// Tests finding a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.find_by_id(42).await.unwrap().is_none());
    assert!(repo.find_by_id_for_update(42).await.unwrap().is_none());

    Ok(())
}

/// Tests that a stored slot index outside the table is reported as corrupt data.
///
/// Expected: Err(IntegrityErr(SlotIndexOutOfRange))
#[tokio::test]
async fn rejects_out_of_range_slot_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let customer = factory::create_customer(db).await?;
    let bad = BookingFactory::new(db, customer.id, sport.id, court.id)
        .slot_index(11)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_id(bad.id).await;

    assert!(matches!(
        result,
        Err(AppError::IntegrityErr(IntegrityError::SlotIndexOutOfRange { slot_index: 11, .. }))
    ));

    Ok(())
}

/// Tests that an unrecognised status string is reported as corrupt data.
///
/// Expected: Err(IntegrityErr(UnknownBookingStatus))
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let customer = factory::create_customer(db).await?;
    let bad = BookingFactory::new(db, customer.id, sport.id, court.id)
        .status("booked")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_id(bad.id).await;

    assert!(matches!(
        result,
        Err(AppError::IntegrityErr(IntegrityError::UnknownBookingStatus { .. }))
    ));

    Ok(())
}
