use super::*;

/// Tests booking an available cell.
///
/// Expected: Ok(true) and only the targeted cell flips to 2
#[tokio::test]
async fn books_available_cell() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court) = factory::helpers::create_court_with_dependencies(db).await?;

    let repo = SlotRepository::new(db);
    let changed = repo
        .transition(
            court.id,
            SlotIndex::new(2).unwrap(),
            SlotState::Available,
            SlotState::Booked,
        )
        .await?;

    assert!(changed);
    assert_eq!(slot_cells(db, court.id).await?, [1, 1, 2, 1, 1, 1, 1, 1, 1, 1]);

    Ok(())
}

/// Tests that a cell in an unexpected state is left alone.
///
/// Expected: Ok(false) and the booked cell stays booked
#[tokio::test]
async fn refuses_cell_in_other_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court) = factory::helpers::create_court_with_dependencies(db).await?;
    set_slot_cell(db, court.id, 0, 2).await?;

    let repo = SlotRepository::new(db);
    let changed = repo
        .transition(
            court.id,
            SlotIndex::new(0).unwrap(),
            SlotState::Available,
            SlotState::Booked,
        )
        .await?;

    assert!(!changed);
    assert_eq!(slot_cells(db, court.id).await?[0], 2);

    Ok(())
}

/// Tests releasing a booked cell.
///
/// Expected: Ok(true) and the cell returns to 1
#[tokio::test]
async fn releases_booked_cell() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court) = factory::helpers::create_court_with_dependencies(db).await?;
    set_slot_cell(db, court.id, 9, 2).await?;

    let repo = SlotRepository::new(db);
    let changed = repo
        .transition(
            court.id,
            SlotIndex::new(9).unwrap(),
            SlotState::Booked,
            SlotState::Available,
        )
        .await?;

    assert!(changed);
    assert_eq!(slot_cells(db, court.id).await?, [1; 10]);

    Ok(())
}
