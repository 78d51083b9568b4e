use super::*;

/// Tests finding a customer by email.
///
/// Expected: Ok(Some) with the matching customer
#[tokio::test]
async fn finds_customer_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::customer::create_customer_with_email(db, "alice@example.com").await?;

    let repo = CustomerRepository::new(db);
    let customer = repo.find_by_email("alice@example.com").await?.unwrap();

    assert_eq!(customer.id, created.id);

    Ok(())
}

/// Tests finding a customer with an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
