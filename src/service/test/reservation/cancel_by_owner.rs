use super::*;

/// Tests a customer cancelling their own booking.
///
/// Verifies that the row is kept with status Cancelled and the cell is freed.
///
/// Expected: Ok with status Cancelled and cell available
#[tokio::test]
async fn cancels_own_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court, customer, booking) = create_confirmed_booking_with_dependencies(db, 2).await?;

    let service = ReservationService::new(db);
    service
        .cancel_by_owner(CancelByOwnerParam {
            booking_id: booking.id,
            customer_email: customer.email.to_uppercase(),
        })
        .await?;

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Cancelled");
    assert_eq!(slot_cells(db, court.id).await?, [1; 10]);

    Ok(())
}

/// Tests cancelling someone else's booking.
///
/// Expected: Err(Forbidden) with booking and cell unchanged
#[tokio::test]
async fn forbids_other_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court, _, booking) = create_confirmed_booking_with_dependencies(db, 2).await?;
    let intruder = factory::create_customer(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .cancel_by_owner(CancelByOwnerParam {
            booking_id: booking.id,
            customer_email: intruder.email.clone(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Confirmed");
    assert_eq!(slot_cells(db, court.id).await?[2], 2);

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .cancel_by_owner(CancelByOwnerParam {
            booking_id: 77,
            customer_email: customer.email,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests cancelling with an email that belongs to no customer.
///
/// Expected: Err(NotFound) and the booking stays confirmed
#[tokio::test]
async fn fails_for_unknown_requester() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_confirmed_booking_with_dependencies(db, 0).await?;

    let service = ReservationService::new(db);
    let result = service
        .cancel_by_owner(CancelByOwnerParam {
            booking_id: booking.id,
            customer_email: "stranger@example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests cancelling a booking twice.
///
/// Verifies that the second cancel fails and does not free a cell that a newer
/// booking now holds.
///
/// Expected: Err(Conflict) with the newer booking's cell still booked
#[tokio::test]
async fn rejects_already_cancelled_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court, customer, booking) =
        create_confirmed_booking_with_dependencies(db, 5).await?;

    let service = ReservationService::new(db);
    let cancel = CancelByOwnerParam {
        booking_id: booking.id,
        customer_email: customer.email.clone(),
    };
    service.cancel_by_owner(cancel.clone()).await?;
    service
        .reserve(reserve_param("bob@example.com", sport.id, court.id, 5))
        .await?;

    let result = service.cancel_by_owner(cancel).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(slot_cells(db, court.id).await?[5], 2);

    Ok(())
}

/// Tests cancelling a confirmed booking whose cell was never marked booked.
///
/// Expected: Err(IntegrityErr(SlotInvariantViolated)) reporting the cell as
/// available, and the booking stays confirmed
#[tokio::test]
async fn reports_inconsistent_cell() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sport, court) = create_court_with_dependencies(db).await?;
    let customer = factory::create_customer(db).await?;
    let booking = factory::create_booking(db, customer.id, sport.id, court.id).await?;

    let service = ReservationService::new(db);
    let result = service
        .cancel_by_owner(CancelByOwnerParam {
            booking_id: booking.id,
            customer_email: customer.email,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::IntegrityErr(
            crate::error::integrity::IntegrityError::SlotInvariantViolated {
                state: "available",
                confirmed: 1,
                ..
            }
        ))
    ));
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Confirmed");

    Ok(())
}
