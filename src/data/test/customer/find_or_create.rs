use super::*;

/// Tests creating a customer on first lookup.
///
/// Expected: Ok(Created) with the placeholder name
#[tokio::test]
async fn creates_missing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let result = repo.find_or_create("new@example.com").await?;

    assert!(result.was_created());
    let customer = result.into_customer();
    assert_eq!(customer.email, "new@example.com");
    assert_eq!(customer.name, DEFAULT_CUSTOMER_NAME);
    assert!(customer.ufid.is_none());

    Ok(())
}

/// Tests returning an existing customer unchanged.
///
/// Expected: Ok(Existing) with the stored name kept
#[tokio::test]
async fn returns_existing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::customer::CustomerFactory::new(db)
        .name("Alice")
        .email("alice@example.com")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let result = repo.find_or_create("alice@example.com").await?;

    match result {
        FindOrCreate::Existing(customer) => {
            assert_eq!(customer.id, created.id);
            assert_eq!(customer.name, "Alice");
        }
        FindOrCreate::Created(_) => panic!("expected existing customer"),
    }

    Ok(())
}

/// Tests that repeated lookups never duplicate a customer.
///
/// Expected: both calls resolve to the same id
#[tokio::test]
async fn does_not_duplicate_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let first = repo.find_or_create("same@example.com").await?;
    let second = repo.find_or_create("same@example.com").await?;

    assert!(first.was_created());
    assert!(!second.was_created());
    assert_eq!(first.customer().id, second.customer().id);

    Ok(())
}
