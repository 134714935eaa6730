use sea_orm_migration::prelude::*;

mod m20250801_000001_create_customers;
mod m20250801_000002_create_employees;
mod m20250801_000003_create_offerings;
mod m20250801_000004_create_loans;
mod m20250801_000005_create_lockers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_customers::Migration),
            Box::new(m20250801_000002_create_employees::Migration),
            Box::new(m20250801_000003_create_offerings::Migration),
            Box::new(m20250801_000004_create_loans::Migration),
            Box::new(m20250801_000005_create_lockers::Migration),
        ]
    }
}
