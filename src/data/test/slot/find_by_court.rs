use super::*;
use crate::error::{integrity::IntegrityError, AppError};

/// Tests finding the slot table of a court.
///
/// Expected: Ok(Some) with the staged booked cell reported as booked
#[tokio::test]
async fn finds_slot_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court) = factory::helpers::create_court_with_dependencies(db).await?;
    set_slot_cell(db, court.id, 3, 2).await?;

    let repo = SlotRepository::new(db);
    let table = repo.find_by_court(court.id).await.unwrap().unwrap();

    assert_eq!(table.court_id, court.id);
    assert_eq!(table.cell(SlotIndex::new(3).unwrap()), SlotState::Booked);
    assert_eq!(table.cell(SlotIndex::new(4).unwrap()), SlotState::Available);

    Ok(())
}

/// Tests finding the slot table of a court without one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_court() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SlotRepository::new(db);
    let result = repo.find_by_court(999).await.unwrap();

    assert!(result.is_none());

    Ok(())
}

/// Tests that a corrupt cell value is surfaced rather than coerced.
///
/// Expected: Err(IntegrityErr(UnknownSlotState))
#[tokio::test]
async fn rejects_corrupt_cell() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, court) = factory::helpers::create_court_with_dependencies(db).await?;
    set_slot_cell(db, court.id, 7, 5).await?;

    let repo = SlotRepository::new(db);
    let result = repo.find_by_court_for_update(court.id).await;

    assert!(matches!(
        result,
        Err(AppError::IntegrityErr(IntegrityError::UnknownSlotState {
            slot_index: 7,
            value: 5,
            ..
        }))
    ));

    Ok(())
}

/// Tests loading the slot tables of several courts at once.
///
/// Expected: Ok with one table per requested court
#[tokio::test]
async fn finds_tables_for_several_courts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sport = factory::create_sport(db).await?;
    let (first, _) = factory::create_court(db, sport.id).await?;
    let (second, _) = factory::create_court(db, sport.id).await?;
    factory::create_court(db, sport.id).await?;

    let repo = SlotRepository::new(db);
    let tables = repo.find_by_courts(&[first.id, second.id]).await.unwrap();

    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| t.court_id == first.id || t.court_id == second.id));

    Ok(())
}
