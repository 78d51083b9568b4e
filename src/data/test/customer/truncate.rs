use super::*;

/// Tests truncating the customer table.
///
/// Expected: Ok with no customers left and ids restarting at 1
#[tokio::test]
async fn removes_rows_and_restarts_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    repo.truncate().await?;

    assert!(repo.find_by_email(&customer.email).await?.is_none());

    let next = repo.find_or_create("fresh@example.com").await?;
    assert_eq!(next.customer().id, 1);

    Ok(())
}
