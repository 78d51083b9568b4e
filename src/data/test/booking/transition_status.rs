use super::*;

/// Tests cancelling a confirmed booking.
///
/// Expected: Ok(true) and the stored status becomes Cancelled
#[tokio::test]
async fn cancels_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_confirmed_booking_with_dependencies(db, 0).await?;

    let repo = BookingRepository::new(db);
    let changed = repo
        .transition_status(booking.id, BookingStatus::Confirmed, BookingStatus::Cancelled)
        .await?;

    assert!(changed);
    let stored = repo.find_by_id(booking.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests that a cancelled booking cannot be cancelled again.
///
/// Expected: Ok(false) and the status is unchanged
#[tokio::test]
async fn refuses_booking_not_in_expected_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let customer = factory::create_customer(db).await?;
    let booking = BookingFactory::new(db, customer.id, sport.id, court.id)
        .status(BookingStatus::CancelledBySystemReset.as_str())
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let changed = repo
        .transition_status(booking.id, BookingStatus::Confirmed, BookingStatus::Cancelled)
        .await?;

    assert!(!changed);
    let stored = repo.find_by_id(booking.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::CancelledBySystemReset);

    Ok(())
}
