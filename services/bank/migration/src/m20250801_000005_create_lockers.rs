use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lockers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lockers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Lockers::Number)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Lockers::AccountNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lockers::BranchCode)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lockers::OfferingId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lockers::Table, Lockers::OfferingId)
                            .to(Offerings::Table, Offerings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lockers_offering_id")
                    .table(Lockers::Table)
                    .col(Lockers::OfferingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lockers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Lockers {
    Table,
    Id,
    Number,
    AccountNumber,
    BranchCode,
    OfferingId,
}

#[derive(Iden)]
enum Offerings {
    Table,
    Id,
}
