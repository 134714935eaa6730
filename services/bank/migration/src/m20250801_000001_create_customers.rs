use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Profile columns stay null until profile completion.
                    .col(ColumnDef::new(Customers::Name).string())
                    .col(ColumnDef::new(Customers::AccountNumber).big_integer())
                    .col(ColumnDef::new(Customers::AccountType).string())
                    .col(ColumnDef::new(Customers::ContactNumber).big_integer())
                    .col(ColumnDef::new(Customers::PanNumber).big_integer())
                    .col(ColumnDef::new(Customers::BranchName).string())
                    .col(ColumnDef::new(Customers::BranchCode).big_integer())
                    .col(ColumnDef::new(Customers::BranchIfsc).string())
                    .col(ColumnDef::new(Customers::CardNumber).big_integer())
                    .col(ColumnDef::new(Customers::CardCreditLimit).big_integer())
                    .col(ColumnDef::new(Customers::CardExpiryDate).date())
                    .col(ColumnDef::new(Customers::Street).string())
                    .col(ColumnDef::new(Customers::City).string())
                    .col(ColumnDef::new(Customers::State).string())
                    .col(ColumnDef::new(Customers::Pin).string())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::Password).string().not_null())
                    .col(ColumnDef::new(Customers::Role).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Name,
    AccountNumber,
    AccountType,
    ContactNumber,
    PanNumber,
    BranchName,
    BranchCode,
    BranchIfsc,
    CardNumber,
    CardCreditLimit,
    CardExpiryDate,
    Street,
    City,
    State,
    Pin,
    Email,
    Password,
    Role,
}
