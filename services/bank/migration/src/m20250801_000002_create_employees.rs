use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string())
                    .col(ColumnDef::new(Employees::Salary).integer())
                    .col(ColumnDef::new(Employees::Title).string())
                    .col(ColumnDef::new(Employees::JoiningDate).date())
                    .col(ColumnDef::new(Employees::Street).string())
                    .col(ColumnDef::new(Employees::City).string())
                    .col(ColumnDef::new(Employees::State).string())
                    .col(ColumnDef::new(Employees::Pin).string())
                    .col(
                        ColumnDef::new(Employees::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Password).string().not_null())
                    .col(ColumnDef::new(Employees::Role).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Salary,
    Title,
    JoiningDate,
    Street,
    City,
    State,
    Pin,
    Email,
    Password,
    Role,
}
