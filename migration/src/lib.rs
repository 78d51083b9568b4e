pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_sport_table;
mod m20250301_000002_create_court_table;
mod m20250301_000003_create_court_time_slots_table;
mod m20250301_000004_create_customer_table;
mod m20250301_000005_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_sport_table::Migration),
            Box::new(m20250301_000002_create_court_table::Migration),
            Box::new(m20250301_000003_create_court_time_slots_table::Migration),
            Box::new(m20250301_000004_create_customer_table::Migration),
            Box::new(m20250301_000005_create_booking_table::Migration),
        ]
    }
}
