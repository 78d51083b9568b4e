use super::*;

/// Tests reserving an available slot for a new customer.
///
/// Verifies that the booking is Confirmed, the cell flips to booked and the customer
/// is created with the placeholder name.
///
/// Expected: Ok with cell 4 booked
#[tokio::test]
async fn reserves_available_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let booking = service
        .reserve(reserve_param("alice@example.com", sport.id, court.id, 4))
        .await?;

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.court_id, court.id);
    assert_eq!(booking.slot_index.get(), 4);
    assert_eq!(slot_cells(db, court.id).await?, [1, 1, 1, 1, 2, 1, 1, 1, 1, 1]);

    let customer = entity::prelude::Customer::find_by_id(booking.customer_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(customer.email, "alice@example.com");
    assert_eq!(customer.name, "Gator User");

    Ok(())
}

/// Tests that the requester's email is matched after normalization.
///
/// Expected: Ok with the booking attached to the existing customer
#[tokio::test]
async fn reuses_existing_customer_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;
    let customer =
        factory::customer::create_customer_with_email(db, "alice@example.com").await?;

    let service = ReservationService::new(db);
    let booking = service
        .reserve(reserve_param("  Alice@Example.COM ", sport.id, court.id, 0))
        .await?;

    assert_eq!(booking.customer_id, customer.id);
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 1);

    Ok(())
}

/// Tests rejecting slot indices outside the table.
///
/// Expected: Err(Validation) and nothing written
#[tokio::test]
async fn rejects_slot_index_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    for slot_index in [-1, 10] {
        let result = service
            .reserve(reserve_param("alice@example.com", sport.id, court.id, slot_index))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 0);

    Ok(())
}

/// Tests rejecting a blank customer email.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_blank_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .reserve(reserve_param("   ", sport.id, court.id, 0))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests reserving on a sport or court that does not exist.
///
/// Expected: Err(NotFound) for both and no customer created
#[tokio::test]
async fn fails_for_missing_sport_or_court() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let missing_sport = service
        .reserve(reserve_param("alice@example.com", 999, court.id, 0))
        .await;
    let missing_court = service
        .reserve(reserve_param("alice@example.com", sport.id, 999, 0))
        .await;

    assert!(matches!(missing_sport, Err(AppError::NotFound(_))));
    assert!(matches!(missing_court, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 0);

    Ok(())
}

/// Tests reserving a slot that is already booked.
///
/// Verifies that the conflicting request writes nothing, not even a new customer.
///
/// Expected: Err(Conflict) with one booking and one customer remaining
#[tokio::test]
async fn rejects_booked_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court, _, _) = create_confirmed_booking_with_dependencies(db, 6).await?;

    let service = ReservationService::new(db);
    let result = service
        .reserve(reserve_param("bob@example.com", sport.id, court.id, 6))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 1);
    assert_eq!(slot_cells(db, court.id).await?[6], 2);

    Ok(())
}

/// Tests reserving on a court that lost its slot row.
///
/// Expected: Err(IntegrityErr) and no booking written
#[tokio::test]
async fn reports_missing_slot_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;
    crate::data::slot::SlotRepository::new(db)
        .delete_by_courts(&[court.id])
        .await?;

    let service = ReservationService::new(db);
    let result = service
        .reserve(reserve_param("alice@example.com", sport.id, court.id, 0))
        .await;

    assert!(matches!(result, Err(AppError::IntegrityErr(_))));
    assert!(result.unwrap_err().is_store_error());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    Ok(())
}

/// Tests two simultaneous reservations of the same cell.
///
/// The test pool holds a single connection, so the two transactions queue on the
/// pool and run one after the other. This covers the loser seeing the committed
/// booked cell and failing with Conflict. It does not exercise the row lock itself,
/// which needs a server database with more than one connection.
///
/// Expected: exactly one Ok and one Err(Conflict), with a single confirmed booking
#[tokio::test]
async fn concurrent_reservations_allow_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let (first, second) = tokio::join!(
        service.reserve(reserve_param("alice@example.com", sport.id, court.id, 3)),
        service.reserve(reserve_param("bob@example.com", sport.id, court.id, 3)),
    );

    let outcomes = [first, second];
    let winners = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(
        crate::data::booking::BookingRepository::new(db)
            .count_confirmed_for_courts(&[court.id])
            .await?,
        1
    );
    assert_eq!(slot_cells(db, court.id).await?[3], 2);

    Ok(())
}
