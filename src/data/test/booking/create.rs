use super::*;

/// Tests creating a booking.
///
/// Verifies that a new booking starts Confirmed with the requested slot and
/// references.
///
/// Expected: Ok with status Confirmed
#[tokio::test]
async fn creates_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let customer = factory::create_customer(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(customer.id, sport.id, court.id, SlotIndex::new(5).unwrap())
        .await
        .unwrap();

    assert_eq!(booking.customer_id, customer.id);
    assert_eq!(booking.sport_id, sport.id);
    assert_eq!(booking.court_id, court.id);
    assert_eq!(booking.slot_index.get(), 5);
    assert_eq!(booking.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests that booking ids increase monotonically.
///
/// Expected: second booking id is greater than the first
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let customer = factory::create_customer(db).await?;

    let repo = BookingRepository::new(db);
    let first = repo
        .create(customer.id, sport.id, court.id, SlotIndex::new(0).unwrap())
        .await
        .unwrap();
    let second = repo
        .create(customer.id, sport.id, court.id, SlotIndex::new(1).unwrap())
        .await
        .unwrap();

    assert!(second.id > first.id);

    Ok(())
}
